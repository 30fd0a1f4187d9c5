//! Remote source: fetch a published sheet's CSV export and parse it.

pub mod csv;
pub mod writer;

use crate::record::Snapshot;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::info;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Request timed out")]
    Timeout,
    #[error("Malformed payload: {0}")]
    Parse(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub struct RemoteSource {
    client: Client,
}

impl RemoteSource {
    pub fn new() -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("galleria/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RemoteError::Config(e.to_string()))?;
        Ok(Self { client })
    }

    /// Fetches the endpoint and parses the body into a snapshot.
    pub async fn fetch(&self, endpoint: &Url) -> Result<Snapshot, RemoteError> {
        let response = self
            .client
            .get(endpoint.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RemoteError::Timeout
                } else {
                    RemoteError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Network(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;
        let snapshot = csv::parse(&body)?;
        info!("fetched {} records from {}", snapshot.len(), endpoint);
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_parses_published_csv() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/pub")
            .with_status(200)
            .with_body("ID,URL,Label\n1,https://x/a.jpg,Foo\n2,https://x/b.jpg,Bar\n")
            .create_async()
            .await;

        let source = RemoteSource::new().unwrap();
        let url = Url::parse(&format!("{}/pub", server.url())).unwrap();
        let snapshot = source.fetch(&url).await.unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].label, "Foo");
    }

    #[tokio::test]
    async fn non_success_status_is_a_network_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/pub")
            .with_status(500)
            .create_async()
            .await;

        let source = RemoteSource::new().unwrap();
        let url = Url::parse(&format!("{}/pub", server.url())).unwrap();
        assert!(matches!(
            source.fetch(&url).await,
            Err(RemoteError::Network(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let source = RemoteSource::new().unwrap();
        // Reserved port on localhost with nothing listening.
        let url = Url::parse("http://127.0.0.1:1/pub").unwrap();
        let err = source.fetch(&url).await.unwrap_err();
        assert!(matches!(err, RemoteError::Network(_) | RemoteError::Timeout));
    }
}
