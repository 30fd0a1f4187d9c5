//! Data-synchronization core for a sheet-backed image gallery.
//!
//! The [`GalleryService`] owns the canonical image list, merges remote
//! CSV fetches with the local cache slot, and exposes the fetch/edit
//! operations a presentation layer binds to. The cache and write-back
//! boundaries are traits so any key-value store or sheet client fits.

pub mod cache;
pub mod config;
pub mod demo;
pub mod error;
pub mod record;
pub mod remote;
pub mod service;

pub use config::{normalize_sheet_url, Configuration, SourceMode};
pub use error::{GalleryError, GalleryResult};
pub use record::{ImageRecord, Snapshot, DEFAULT_LABEL};
pub use service::GalleryService;
