//! Named byte storage behind the `/files` routes.
//!
//! Handlers only see the [`ByteStore`] trait. [`FsStore`] keeps each name as
//! a file directly under a root directory.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no entry named {name:?}")]
    NotFound { name: String },

    #[error("refusing name {name:?}")]
    InvalidName { name: String },

    #[error("store io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

#[async_trait]
pub trait ByteStore: Send + Sync {
    async fn read(&self, name: &str) -> Result<Vec<u8>, StoreError>;

    async fn write(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError>;
}

/// Stores each entry as a file under `root`.
///
/// Names must be a single path component: `.`/`..` and names containing a
/// separator or NUL are refused, so nothing outside `root` is reachable.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, StoreError> {
        let invalid = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\', '\0']);

        if invalid {
            return Err(StoreError::InvalidName {
                name: name.to_string(),
            });
        }

        Ok(self.root.join(name))
    }
}

#[async_trait]
impl ByteStore for FsStore {
    async fn read(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.resolve(name)?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound {
                name: name.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.resolve(name)?;

        // The handle is dropped on every return path, including `?` errors.
        let mut file = tokio::fs::File::create(&path).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        Ok(())
    }
}
