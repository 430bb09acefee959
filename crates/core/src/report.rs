//! CSV encoding for the player level report.
//!
//! The report is consumed by spreadsheet applications, so the output starts
//! with a UTF-8 byte-order mark and uses CRLF line endings. Booleans are
//! always rendered as the literals `true` / `false`.

use std::borrow::Cow;

/// Attachment filename offered to the browser.
pub const REPORT_FILENAME: &str = "player_levels_report.csv";

/// `Content-Disposition` value naming [`REPORT_FILENAME`].
pub const REPORT_CONTENT_DISPOSITION: &str =
    "attachment; filename=\"player_levels_report.csv\"";

/// Media type of the report body.
pub const REPORT_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// UTF-8 byte-order mark written before the header.
pub const UTF8_BOM: &str = "\u{feff}";

/// Header columns, in output order.
pub const REPORT_COLUMNS: [&str; 4] = [
    "player_id",
    "level_name",
    "level_complete",
    "prize_reserved",
];

/// Rows fetched from the database per batch unless configured otherwise.
pub const DEFAULT_REPORT_BATCH_SIZE: i64 = 1000;

const LINE_END: &str = "\r\n";

/// One data row of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLine<'a> {
    pub player_id: &'a str,
    pub level_name: &'a str,
    pub level_complete: bool,
    /// True if any prize bound to the level has been received by anyone.
    pub prize_reserved: bool,
}

/// Literal used for boolean cells.
pub fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// BOM followed by the header row.
pub fn report_preamble() -> String {
    let mut out = String::with_capacity(64);
    out.push_str(UTF8_BOM);
    out.push_str(&REPORT_COLUMNS.join(","));
    out.push_str(LINE_END);
    out
}

/// Append one encoded row (with line terminator) to `out`.
pub fn write_line(out: &mut String, line: &ReportLine<'_>) {
    out.push_str(&csv_escape(line.player_id));
    out.push(',');
    out.push_str(&csv_escape(line.level_name));
    out.push(',');
    out.push_str(bool_token(line.level_complete));
    out.push(',');
    out.push_str(bool_token(line.prize_reserved));
    out.push_str(LINE_END);
}

/// Encode a batch of rows into a single chunk.
pub fn encode_lines<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = ReportLine<'a>>,
{
    let mut out = String::new();
    for line in lines {
        write_line(&mut out, &line);
    }
    out
}

/// Quote a field if it contains a delimiter, a quote, or a line break.
fn csv_escape(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line<'a>(
        player_id: &'a str,
        level_name: &'a str,
        complete: bool,
        reserved: bool,
    ) -> ReportLine<'a> {
        ReportLine {
            player_id,
            level_name,
            level_complete: complete,
            prize_reserved: reserved,
        }
    }

    #[test]
    fn preamble_starts_with_bom_and_header() {
        let preamble = report_preamble();
        assert!(preamble.as_bytes().starts_with(&[0xEF, 0xBB, 0xBF]));
        assert_eq!(
            preamble.trim_start_matches(UTF8_BOM),
            "player_id,level_name,level_complete,prize_reserved\r\n"
        );
    }

    #[test]
    fn disposition_names_the_report_file() {
        assert!(REPORT_CONTENT_DISPOSITION.starts_with("attachment;"));
        assert!(REPORT_CONTENT_DISPOSITION.contains(REPORT_FILENAME));
    }

    #[test]
    fn empty_batch_encodes_to_nothing() {
        assert_eq!(encode_lines(Vec::new()), "");
    }

    #[test]
    fn booleans_render_as_literals() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }

    #[test]
    fn completed_row_with_cyrillic_title() {
        let encoded = encode_lines([line("user_001", "Уровень 1", true, true)]);
        assert_eq!(encoded, "user_001,Уровень 1,true,true\r\n");
    }

    #[test]
    fn rows_keep_input_order() {
        let encoded = encode_lines([
            line("user_001", "Уровень 1", true, true),
            line("user_002", "Уровень 2", false, false),
        ]);
        let rows: Vec<&str> = encoded.split("\r\n").filter(|r| !r.is_empty()).collect();
        assert_eq!(
            rows,
            vec!["user_001,Уровень 1,true,true", "user_002,Уровень 2,false,false"]
        );
    }

    #[test]
    fn fields_with_delimiters_are_quoted() {
        let encoded = encode_lines([line("a,b", "say \"hi\"", false, true)]);
        assert_eq!(encoded, "\"a,b\",\"say \"\"hi\"\"\",false,true\r\n");
    }

    #[test]
    fn fields_with_line_breaks_are_quoted() {
        let encoded = encode_lines([line("p1", "two\nlines", true, false)]);
        assert_eq!(encoded, "p1,\"two\nlines\",true,false\r\n");
    }
}
