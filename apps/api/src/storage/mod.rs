//! Resume upload store — flat directory of files under generated keys.
//!
//! Keys are UUID-based, never derived from client input: the uploaded
//! filename survives only as metadata and is used to name the outgoing
//! attachment. Files accumulate; nothing here deletes them.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Longest file extension carried over into a storage key.
const MAX_EXT_LEN: usize = 10;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    #[error("stored file not found: {0}")]
    NotFound(String),

    #[error("failed to write upload: {0}")]
    WriteFailed(String),

    #[error("failed to read upload: {0}")]
    ReadFailed(String),
}

/// A stored resume: the generated key plus the client-supplied filename,
/// which is kept as metadata only.
#[derive(Debug, Clone)]
pub struct StoredResume {
    pub storage_key: String,
    pub original_filename: String,
}

/// Filesystem-backed store for uploaded resumes.
#[derive(Clone)]
pub struct UploadStore {
    base_path: PathBuf,
}

impl UploadStore {
    /// Creates the store, ensuring the upload directory exists.
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::WriteFailed(format!(
                "failed to create upload directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(UploadStore { base_path })
    }

    /// Persists one upload under a fresh UUID key and returns its metadata.
    ///
    /// Two uploads of the same filename get distinct keys; nothing is
    /// overwritten.
    pub async fn store(
        &self,
        original_filename: &str,
        data: &[u8],
    ) -> Result<StoredResume, StorageError> {
        let key = generate_storage_key(original_filename);
        let path = self.key_to_path(&key)?;

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("failed to create {}: {}", path.display(), e))
        })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::WriteFailed(format!("failed to write {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("failed to sync {}: {}", path.display(), e))
        })?;

        tracing::info!(
            key = %key,
            original_filename = %original_filename,
            size_bytes = data.len(),
            "Resume stored"
        );

        Ok(StoredResume {
            storage_key: key,
            original_filename: original_filename.to_string(),
        })
    }

    /// Reads a stored resume back by key.
    pub async fn read(&self, storage_key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.key_to_path(storage_key)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(storage_key.to_string()));
        }

        fs::read(&path).await.map_err(|e| {
            StorageError::ReadFailed(format!("failed to read {}: {}", path.display(), e))
        })
    }

    /// Converts a storage key to a filesystem path, rejecting anything that
    /// could escape the upload directory.
    fn key_to_path(&self, storage_key: &str) -> Result<PathBuf, StorageError> {
        if storage_key.is_empty()
            || storage_key.contains("..")
            || storage_key.contains('/')
            || storage_key.contains('\\')
        {
            return Err(StorageError::InvalidKey(storage_key.to_string()));
        }
        Ok(self.base_path.join(storage_key))
    }
}

/// Generates a storage key: a fresh UUID, plus the original extension when it
/// is short and purely alphanumeric.
fn generate_storage_key(original_filename: &str) -> String {
    let id = Uuid::new_v4();
    match safe_extension(original_filename) {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    }
}

fn safe_extension(filename: &str) -> Option<String> {
    let ext = Path::new(filename).extension()?.to_str()?;
    if ext.is_empty() || ext.len() > MAX_EXT_LEN || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
