//! Gallery record types.

use serde::{Deserialize, Serialize};

/// Display name substituted when a record carries no label.
pub const DEFAULT_LABEL: &str = "Untitled";

/// One gallery entry.
///
/// # Invariants
/// - `id` is unique within a snapshot and stable across edits
/// - `url` is an absolute http(s) URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub url: String,
    pub label: String,
    #[serde(default)]
    pub comments: String,
}

impl ImageRecord {
    pub fn new(id: impl Into<String>, url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            label: label.into(),
            comments: String::new(),
        }
    }
}

/// The full ordered image list at a point in time. Order is preserved
/// from the source; this is the only persisted aggregate.
pub type Snapshot = Vec<ImageRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_default_on_deserialize() {
        let record: ImageRecord =
            serde_json::from_str(r#"{"id":"1","url":"https://x/a.jpg","label":"Foo"}"#).unwrap();
        assert_eq!(record.comments, "");
    }
}
