//! Local disk storage for uploaded files.
//!
//! Uploads land in a temporary folder first. Saving moves them into the
//! uploads folder, which the server exposes under `/files`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use gobarber_core::providers::{ProviderError, Result, StorageProvider};

/// Stores files on the local filesystem.
#[derive(Debug, Clone)]
pub struct DiskStorageProvider {
    tmp_folder: PathBuf,
    uploads_folder: PathBuf,
}

impl DiskStorageProvider {
    pub fn new(tmp_folder: impl Into<PathBuf>, uploads_folder: impl Into<PathBuf>) -> Self {
        Self {
            tmp_folder: tmp_folder.into(),
            uploads_folder: uploads_folder.into(),
        }
    }

    /// Creates both folders if they are missing.
    pub async fn ensure_folders(&self) -> Result<()> {
        for folder in [&self.tmp_folder, &self.uploads_folder] {
            tokio::fs::create_dir_all(folder)
                .await
                .map_err(|e| storage_error(folder, e))?;
        }
        Ok(())
    }
}

fn storage_error(path: &Path, err: std::io::Error) -> ProviderError {
    ProviderError::Storage(format!("{}: {}", path.display(), err))
}

/// Rejects names that would escape the storage folders.
fn validate_file_name(file: &str) -> Result<()> {
    let mut components = Path::new(file).components();
    match (components.next(), components.next()) {
        (Some(std::path::Component::Normal(_)), None) => Ok(()),
        _ => Err(ProviderError::Storage(format!("Invalid file name: {file}"))),
    }
}

#[async_trait]
impl StorageProvider for DiskStorageProvider {
    async fn save_file(&self, file: &str) -> Result<String> {
        validate_file_name(file)?;

        tokio::fs::create_dir_all(&self.uploads_folder)
            .await
            .map_err(|e| storage_error(&self.uploads_folder, e))?;

        let from = self.tmp_folder.join(file);
        let to = self.uploads_folder.join(file);
        tokio::fs::rename(&from, &to)
            .await
            .map_err(|e| storage_error(&from, e))?;

        tracing::debug!(file, "Saved uploaded file");

        Ok(file.to_string())
    }

    async fn delete_file(&self, file: &str) -> Result<()> {
        validate_file_name(file)?;

        let path = self.uploads_folder.join(file);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(file, "Deleted stored file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error(&path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn provider(dir: &TempDir) -> DiskStorageProvider {
        DiskStorageProvider::new(tmp_folder(dir), uploads_folder(dir))
    }

    fn tmp_folder(dir: &TempDir) -> PathBuf {
        dir.path().join("tmp")
    }

    fn uploads_folder(dir: &TempDir) -> PathBuf {
        dir.path().join("tmp/uploads")
    }

    #[tokio::test]
    async fn test_save_file_moves_from_tmp_to_uploads() {
        let dir = TempDir::new().unwrap();
        let storage = provider(&dir);
        storage.ensure_folders().await.unwrap();
        tokio::fs::write(tmp_folder(&dir).join("avatar.jpg"), b"image")
            .await
            .unwrap();

        let saved = storage.save_file("avatar.jpg").await.unwrap();

        assert_eq!(saved, "avatar.jpg");
        assert!(!tmp_folder(&dir).join("avatar.jpg").exists());
        let content = tokio::fs::read(uploads_folder(&dir).join("avatar.jpg"))
            .await
            .unwrap();
        assert_eq!(content, b"image");
    }

    #[tokio::test]
    async fn test_save_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let storage = provider(&dir);
        storage.ensure_folders().await.unwrap();

        let result = storage.save_file("missing.jpg").await;

        assert!(matches!(result, Err(ProviderError::Storage(_))));
    }

    #[tokio::test]
    async fn test_delete_file() {
        let dir = TempDir::new().unwrap();
        let storage = provider(&dir);
        storage.ensure_folders().await.unwrap();
        let stored = uploads_folder(&dir).join("old.jpg");
        tokio::fs::write(&stored, b"old").await.unwrap();

        storage.delete_file("old.jpg").await.unwrap();

        assert!(!stored.exists());
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_ok() {
        let dir = TempDir::new().unwrap();
        let storage = provider(&dir);

        assert!(storage.delete_file("never-existed.jpg").await.is_ok());
    }

    #[tokio::test]
    async fn test_rejects_paths_outside_storage() {
        let dir = TempDir::new().unwrap();
        let storage = provider(&dir);

        assert!(storage.save_file("../escape.jpg").await.is_err());
        assert!(storage.delete_file("nested/file.jpg").await.is_err());
        assert!(storage.delete_file("").await.is_err());
    }
}
