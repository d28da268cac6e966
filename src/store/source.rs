//! Snapshot sources: where the serialized forest is read from.

use crate::error::IndexError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Delivers the raw snapshot payload. Implementations do not retry.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>, IndexError>;

    /// Human-readable origin recorded on the parsed snapshot.
    fn describe(&self) -> String;
}

/// Reads the snapshot from a local JSON file.
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn fetch(&self) -> Result<Vec<u8>, IndexError> {
        debug!(path = %self.path.display(), "Reading snapshot file");
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetches the snapshot with an HTTP GET.
pub struct HttpSnapshotSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSnapshotSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, IndexError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Self::with_client(url, client)
    }

    /// Use a preconfigured client (proxy, TLS or timeout settings).
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Result<Self, IndexError> {
        let url = url.into();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(IndexError::Config(format!(
                "snapshot url must use http or https: {}",
                url
            )));
        }
        Ok(Self { url, client })
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch(&self) -> Result<Vec<u8>, IndexError> {
        debug!(url = %self.url, "Fetching snapshot");
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(IndexError::Fetch(format!(
                "GET {} returned {}",
                self.url, status
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
