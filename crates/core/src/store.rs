// Fresh-read access to the backing states document

use crate::error::StoreError;
use crate::types::StatesDocument;
use std::path::{Path, PathBuf};

/// Read access to the states document
///
/// Every call re-reads the backing resource in full, so edits to it are
/// visible on the next operation without a restart. Implementations never
/// write, cache, or retry.
#[async_trait::async_trait]
pub trait StateStore: Send + Sync {
    /// Load and parse the whole document
    async fn load(&self) -> Result<StatesDocument, StoreError>;
}

/// Store backed by a single JSON file on the local filesystem
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl StateStore for JsonFileStore {
    async fn load(&self) -> Result<StatesDocument, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Unavailable {
                path: self.path.clone(),
                source,
            })?;

        let doc: StatesDocument =
            serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            "Loaded {} state(s) from {}",
            doc.states.len(),
            self.path.display()
        );
        Ok(doc)
    }
}
