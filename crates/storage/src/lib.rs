//! Read-only access to the talk list backing `/api/talks`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::domain::Talk;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read talk list at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("talk list at {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("talk #{index} is invalid: {reason}")]
    InvalidTalk { index: usize, reason: &'static str },
}

/// Source of the ordered talk list. Always returns the full list.
#[async_trait]
pub trait TalkStore: Send + Sync {
    async fn load_talks(&self) -> Result<Vec<Talk>, StorageError>;
}

/// Flat JSON file holding an array of talks. Re-read on every call.
#[derive(Debug, Clone)]
pub struct JsonTalkStore {
    path: PathBuf,
}

impl JsonTalkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TalkStore for JsonTalkStore {
    async fn load_talks(&self) -> Result<Vec<Talk>, StorageError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })?;
        let talks: Vec<Talk> =
            serde_json::from_str(&raw).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })?;
        validate_talks(&talks)?;
        debug!(path = %self.path.display(), count = talks.len(), "loaded talk list");
        Ok(talks)
    }
}

/// Rejects records the schedule engine cannot lay out.
pub fn validate_talks(talks: &[Talk]) -> Result<(), StorageError> {
    for (index, talk) in talks.iter().enumerate() {
        let reason = if talk.title.trim().is_empty() {
            Some("title is empty")
        } else if talk.speakers.is_empty() {
            Some("speaker list is empty")
        } else if talk.duration == 0 {
            Some("duration must be a positive number of minutes")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(StorageError::InvalidTalk { index, reason });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
