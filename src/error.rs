use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Cache error: {0}")]
    Cache(#[from] crate::cache::CacheError),
    #[error("Remote source error: {0}")]
    Remote(#[from] crate::remote::RemoteError),
    #[error("No image with id {0}")]
    NotFound(String),
    #[error("Not a spreadsheet URL: {0}")]
    InvalidEndpoint(String),
}

pub type GalleryResult<T> = Result<T, GalleryError>;
