//! Source-mode configuration and spreadsheet URL normalization.

use crate::error::GalleryError;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Where `fetch_images` gets its records from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceMode {
    /// The fixed built-in dataset.
    Demo,
    /// A published-CSV endpoint derived from a spreadsheet URL.
    Remote(Url),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub mode: SourceMode,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            mode: SourceMode::Demo,
        }
    }
}

impl Configuration {
    pub fn remote(endpoint: Url) -> Self {
        Self {
            mode: SourceMode::Remote(endpoint),
        }
    }
}

static SHEET_ID: OnceLock<Regex> = OnceLock::new();

/// Turns a spreadsheet "edit" URL into its published-CSV endpoint.
///
/// The input must contain `/spreadsheets/d/<SHEET_ID>/`; the output is
/// deterministic for a given sheet id.
pub fn normalize_sheet_url(text: &str) -> Result<Url, GalleryError> {
    let re = SHEET_ID.get_or_init(|| {
        Regex::new(r"/spreadsheets/d/([A-Za-z0-9_-]+)").expect("static pattern")
    });
    let id = re
        .captures(text.trim())
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| GalleryError::InvalidEndpoint(text.to_string()))?;
    let csv = format!(
        "https://docs.google.com/spreadsheets/d/e/{}/pub?output=csv",
        id.as_str()
    );
    Url::parse(&csv).map_err(|_| GalleryError::InvalidEndpoint(text.to_string()))
}
