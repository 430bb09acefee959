//! Streaming CSV export of player levels.
//!
//! The first batch is fetched eagerly so a database failure is reported
//! before the response starts. Later batches are pulled lazily as the body
//! is consumed, one bounded query per chunk.

use axum::body::Bytes;
use bonuses_core::report::{encode_lines, report_preamble};
use bonuses_db::models::report::PlayerLevelReportRow;
use bonuses_db::repositories::ReportRepo;
use bonuses_db::DbPool;
use futures::stream::{self, Stream, StreamExt, TryStreamExt};

/// Build the report body: BOM and header, then one chunk per batch.
///
/// An empty data set yields the header only.
pub async fn export_player_levels(
    pool: &DbPool,
    batch_size: i64,
) -> Result<impl Stream<Item = Result<Bytes, sqlx::Error>> + Send + 'static, sqlx::Error> {
    let first = ReportRepo::fetch_batch(pool, None, batch_size).await?;
    tracing::debug!(rows = first.len(), batch_size, "Report export started");

    let rest = match first.last() {
        Some(last) if first.len() as i64 >= batch_size => {
            ReportRepo::batches(pool.clone(), Some(last.cursor()), batch_size).left_stream()
        }
        _ => stream::empty().right_stream(),
    };

    let mut head = report_preamble();
    head.push_str(&encode_batch(&first));

    let head = stream::once(futures::future::ready(Ok::<_, sqlx::Error>(Bytes::from(head))));
    let tail = rest.map_ok(|rows| Bytes::from(encode_batch(&rows)));
    Ok(head.chain(tail))
}

fn encode_batch(rows: &[PlayerLevelReportRow]) -> String {
    encode_lines(rows.iter().map(PlayerLevelReportRow::as_line))
}
