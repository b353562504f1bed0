use crate::domain::errors::RecordStoreError;
use crate::ports::outbound::RecordStore;

/// In-memory record store for unit tests.
///
/// `fail_writes` makes every write fail, for exercising `PersistenceError`.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    record: Option<Vec<u8>>,
    fail_writes: bool,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `bytes` already persisted.
    pub fn with_record(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            record: Some(bytes.into()),
            fail_writes: false,
        }
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn record(&self) -> Option<&[u8]> {
        self.record.as_deref()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn exists(&self) -> Result<bool, RecordStoreError> {
        Ok(self.record.is_some())
    }

    fn read(&self) -> Result<Option<Vec<u8>>, RecordStoreError> {
        Ok(self.record.clone())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), RecordStoreError> {
        if self.fail_writes {
            return Err(RecordStoreError::IOError {
                message: "simulated write failure".to_string(),
            });
        }
        self.record = Some(bytes.to_vec());
        Ok(())
    }

    fn remove(&mut self) -> Result<bool, RecordStoreError> {
        Ok(self.record.take().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_record_store() {
        let mut store = InMemoryRecordStore::new();
        assert!(!store.exists().unwrap());

        store.write(b"state").unwrap();
        assert_eq!(store.read().unwrap(), Some(b"state".to_vec()));

        assert!(store.remove().unwrap());
        assert!(!store.remove().unwrap());
    }

    #[test]
    fn test_failing_writes_keep_previous_record() {
        let mut store = InMemoryRecordStore::with_record(b"old".to_vec());
        store.set_fail_writes(true);

        assert!(store.write(b"new").is_err());
        assert_eq!(store.record(), Some(&b"old"[..]));
    }
}
