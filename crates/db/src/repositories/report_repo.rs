//! Batched read of the player level report.
//!
//! Rows are ordered by player identifier, level `sort_order`, then player
//! level id, and paged with a keyset cursor on that triple so each batch is
//! an independent bounded query.

use futures::stream::{self, Stream};
use sqlx::PgPool;

use crate::models::report::{PlayerLevelReportRow, ReportCursor};

/// Report query. `prize_reserved` is level-wide: true if any prize bound to
/// the level has been received, regardless of player or prize.
const REPORT_QUERY: &str = "\
    SELECT pl.id AS player_level_id, \
           p.external_id AS player_external_id, \
           l.title AS level_title, \
           l.sort_order AS level_sort_order, \
           pl.is_completed, \
           EXISTS ( \
               SELECT 1 FROM level_prizes lp \
               WHERE lp.level_id = pl.level_id AND lp.received IS NOT NULL \
           ) AS prize_reserved \
    FROM player_levels pl \
    JOIN players p ON p.id = pl.player_id \
    JOIN levels l ON l.id = pl.level_id \
    WHERE $1::VARCHAR IS NULL \
       OR (p.external_id, l.sort_order, pl.id) > ($1::VARCHAR, $2::INTEGER, $3::BIGINT) \
    ORDER BY p.external_id, l.sort_order, pl.id \
    LIMIT $4";

pub struct ReportRepo;

impl ReportRepo {
    /// Fetch up to `limit` report rows positioned after `after`
    /// (from the start when `None`).
    pub async fn fetch_batch(
        pool: &PgPool,
        after: Option<&ReportCursor>,
        limit: i64,
    ) -> Result<Vec<PlayerLevelReportRow>, sqlx::Error> {
        sqlx::query_as::<_, PlayerLevelReportRow>(REPORT_QUERY)
            .bind(after.map(|c| c.player_external_id.as_str()))
            .bind(after.map(|c| c.level_sort_order))
            .bind(after.map(|c| c.player_level_id))
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Stream the report in batches of `batch_size`, starting after `after`.
    ///
    /// Each item is one non-empty batch. The stream ends after the first
    /// short batch, so at most one extra empty query is issued when the row
    /// count is an exact multiple of `batch_size`.
    pub fn batches(
        pool: PgPool,
        after: Option<ReportCursor>,
        batch_size: i64,
    ) -> impl Stream<Item = Result<Vec<PlayerLevelReportRow>, sqlx::Error>> + Send + 'static {
        stream::try_unfold(ScanState::Next(after), move |state| {
            next_batch(pool.clone(), state, batch_size)
        })
    }
}

/// Position of an in-progress report scan.
enum ScanState {
    Next(Option<ReportCursor>),
    Done,
}

async fn next_batch(
    pool: PgPool,
    state: ScanState,
    batch_size: i64,
) -> Result<Option<(Vec<PlayerLevelReportRow>, ScanState)>, sqlx::Error> {
    let ScanState::Next(after) = state else {
        return Ok(None);
    };
    let rows = ReportRepo::fetch_batch(&pool, after.as_ref(), batch_size).await?;
    if rows.is_empty() {
        return Ok(None);
    }
    tracing::debug!(rows = rows.len(), "Fetched report batch");

    let next = match rows.last() {
        Some(last) if rows.len() as i64 >= batch_size => ScanState::Next(Some(last.cursor())),
        _ => ScanState::Done,
    };
    Ok(Some((rows, next)))
}
