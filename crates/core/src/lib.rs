//! Domain layer for the bonuses service.
//!
//! Pure logic only: shared types, the domain error, the clock used to stamp
//! completions, input validation, and the CSV report encoding. Nothing in
//! this crate touches the database or the network.

pub mod clock;
pub mod completion;
pub mod error;
pub mod report;
pub mod types;
pub mod validation;
