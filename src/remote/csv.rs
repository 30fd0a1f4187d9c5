//! Lossy line-oriented parser for the sheet's CSV export.
//!
//! The sheet is hand-edited, so a single malformed row must not blank the
//! whole gallery: rows failing the URL check are dropped, missing fields
//! are defaulted, and only an empty document is a hard error.

use super::RemoteError;
use crate::record::{ImageRecord, Snapshot, DEFAULT_LABEL};
use tracing::debug;

/// Parses `body` into a snapshot.
///
/// Contract: the first line is a header and is discarded; each non-blank
/// data line splits on commas into at most four fields
/// (`id, url, label, comments`); a row is kept only when `url` is
/// non-empty and starts with `http`; an empty `id` becomes the 1-based
/// data-line index, an empty `label` becomes [`DEFAULT_LABEL`].
pub fn parse(body: &str) -> Result<Snapshot, RemoteError> {
    let mut lines = body.lines();
    lines
        .next()
        .ok_or_else(|| RemoteError::Parse("empty document".into()))?;

    let mut records = Vec::new();
    let mut line_no = 0usize;
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        line_no += 1;

        let mut parts = line.splitn(4, ',');
        let id = clean(parts.next().unwrap_or(""));
        let url = clean(parts.next().unwrap_or(""));
        let label = clean(parts.next().unwrap_or(""));
        let comments = clean(parts.next().unwrap_or(""));

        if url.is_empty() || !url.starts_with("http") {
            debug!("dropping row {}: bad url {:?}", line_no, url);
            continue;
        }

        records.push(ImageRecord {
            id: if id.is_empty() {
                line_no.to_string()
            } else {
                id
            },
            url,
            label: if label.is_empty() {
                DEFAULT_LABEL.to_string()
            } else {
                label
            },
            comments,
        });
    }
    Ok(records)
}

/// Trims a field and strips at most one pair of enclosing double quotes.
fn clean(field: &str) -> String {
    let trimmed = field.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    unquoted.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_bad_rows_and_defaults_fields() {
        let body = "ID,URL,Label\n1,https://x/a.jpg,Foo\n,https://x/b.jpg,\n2,not-a-url,Bar\n";
        let snapshot = parse(body).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0], ImageRecord::new("1", "https://x/a.jpg", "Foo"));
        // Line index substitutes the missing id; label falls back to the default.
        assert_eq!(
            snapshot[1],
            ImageRecord::new("2", "https://x/b.jpg", "Untitled")
        );
    }

    #[test]
    fn strips_one_quote_pair_and_whitespace() {
        let body = "ID,URL,Label\n \"1\" , \"https://x/a.jpg\" , \"Foo Bar\" \n";
        let snapshot = parse(body).unwrap();
        assert_eq!(
            snapshot,
            vec![ImageRecord::new("1", "https://x/a.jpg", "Foo Bar")]
        );
    }

    #[test]
    fn unbalanced_quote_is_kept() {
        assert_eq!(clean("\"Foo"), "\"Foo");
        assert_eq!(clean("\"\"Foo\"\""), "\"Foo\"");
    }

    #[test]
    fn fourth_column_populates_comments() {
        let body = "ID,URL,Label,Comments\n1,https://x/a.jpg,Foo,shot at dawn\n";
        let snapshot = parse(body).unwrap();
        assert_eq!(snapshot[0].comments, "shot at dawn");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let body = "ID,URL,Label\n\n1,https://x/a.jpg,Foo\n\n";
        assert_eq!(parse(body).unwrap().len(), 1);
    }

    #[test]
    fn empty_document_is_a_parse_error() {
        assert!(matches!(parse(""), Err(RemoteError::Parse(_))));
    }

    #[test]
    fn header_only_yields_empty_snapshot() {
        assert!(parse("ID,URL,Label\n").unwrap().is_empty());
    }
}
