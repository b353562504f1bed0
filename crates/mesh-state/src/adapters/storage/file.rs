use crate::domain::errors::RecordStoreError;
use crate::ports::outbound::RecordStore;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// File-backed record store.
///
/// Holds the state record in a single file. Writes go to a sibling temp
/// file first and are renamed over the record, so a crash mid-write leaves
/// the previous record intact.
pub struct FileRecordStore {
    path: PathBuf,
}

impl FileRecordStore {
    /// Create a store for the record at `path`. Nothing is touched on disk.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();

        if let Ok(metadata) = std::fs::metadata(&path) {
            tracing::debug!(
                "[mesh-state] Found existing state record: {} ({} bytes)",
                path.display(),
                metadata.len()
            );
        } else {
            tracing::debug!("[mesh-state] No state record at {}", path.display());
        }

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }
}

impl RecordStore for FileRecordStore {
    fn exists(&self) -> Result<bool, RecordStoreError> {
        match std::fs::metadata(&self.path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn read(&self) -> Result<Option<Vec<u8>>, RecordStoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), RecordStoreError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        let mut file = std::fs::File::create(&temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        drop(file);

        std::fs::rename(&temp_path, &self.path)?;

        tracing::debug!(
            "[mesh-state] Wrote {} bytes to {}",
            bytes.len(),
            self.path.display()
        );
        Ok(())
    }

    fn remove(&mut self) -> Result<bool, RecordStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileRecordStore::new(dir.path().join("meshState.bin"));

        assert!(!store.exists().unwrap());
        assert_eq!(store.read().unwrap(), None);

        store.write(b"first").unwrap();
        store.write(b"second").unwrap();
        assert!(store.exists().unwrap());
        assert_eq!(store.read().unwrap(), Some(b"second".to_vec()));
        assert!(!store.temp_path().exists());

        assert!(store.remove().unwrap());
        assert!(!store.remove().unwrap());
        assert!(!store.exists().unwrap());
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state").join("meshState.bin");
        let mut store = FileRecordStore::new(&path);

        store.write(b"{}").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_directory_at_record_path_is_not_a_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meshState.bin");
        std::fs::create_dir(&path).unwrap();

        let store = FileRecordStore::new(&path);
        assert!(!store.exists().unwrap());
        assert!(store.read().is_err());
    }
}
