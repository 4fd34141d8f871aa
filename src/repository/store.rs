//! Repository Layer - JSON File Store
//!
//! Both stores persist by rewriting a single JSON file wholesale. Reads
//! tolerate missing or malformed files; writes are not atomic, so the
//! loaders must (and do) fall back to defaults on truncated content.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

use crate::domain::{DomainError, DomainResult};

/// A store backed by one JSON file, rewritten in full on every mutation
#[async_trait]
pub trait JsonFileStore: Send + Sync {
    /// Path of the backing file
    fn path(&self) -> &Path;

    /// Serialize the current in-memory state over the backing file
    async fn persist(&self) -> DomainResult<()>;
}

/// Read and parse `path`. Missing files yield `None` silently; malformed
/// content yields `None` with a warning, never an error.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed {}: {}", path.display(), e);
            None
        }
    }
}

/// Overwrite `path` with the pretty-printed JSON form of `value`
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> DomainResult<()> {
    let raw = serde_json::to_string_pretty(value).map_err(|e| DomainError::Io(e.to_string()))?;
    std::fs::write(path, raw).map_err(|e| DomainError::Io(e.to_string()))
}
