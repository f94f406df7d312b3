//! Client configuration

use std::path::PathBuf;
use std::sync::Arc;

use crate::storage::{LocalStorage, MemoryStorage, RedbStorage, StorageResult};

/// Client configuration for the form-list server and the local slot store
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// redb file backing the local slots; in-memory when unset
    pub storage_path: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            storage_path: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Persist local slots in a redb file
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }

    /// Open the local slot store described by this configuration
    pub fn open_storage(&self) -> StorageResult<Arc<dyn LocalStorage>> {
        match &self.storage_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Opening local storage file");
                Ok(Arc::new(RedbStorage::open(path)?))
            }
            None => Ok(Arc::new(MemoryStorage::new())),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
