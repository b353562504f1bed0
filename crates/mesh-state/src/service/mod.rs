//! # State Store Service
//!
//! The application service implementing `MeshStateStore`.
//!
//! This service:
//! 1. Owns the outbound adapters (record store, serializer, key generator)
//! 2. Generates default states from `GenerationConfig`
//! 3. Maps adapter failures onto the `MeshError` taxonomy

mod store;

use crate::adapters::{
    FileRecordStore, InMemoryRecordStore, JsonStateSerializer, RandomKeyGenerator,
};
use crate::domain::config::{Codec, StoreConfig};
use crate::ports::outbound::{KeyGenerator, RecordStore, StateSerializer};

/// Serializer chosen at runtime from `StoreConfig::codec`.
pub type DynStateSerializer = Box<dyn StateSerializer>;

/// State store persisting to the well-known file.
pub type FileStateStore =
    StateStoreService<FileRecordStore, DynStateSerializer, RandomKeyGenerator>;

/// The state store service.
pub struct StateStoreService<RS, SZ, KG>
where
    RS: RecordStore,
    SZ: StateSerializer,
    KG: KeyGenerator,
{
    /// Storage for the single state record.
    pub(crate) record_store: RS,
    /// Record encoding.
    pub(crate) serializer: SZ,
    /// Supplier of key material for `generate()`.
    pub(crate) key_generator: KG,
    /// Service configuration.
    pub(crate) config: StoreConfig,
}

/// Dependencies for StateStoreService
pub struct StateStoreDependencies<RS, SZ, KG> {
    pub record_store: RS,
    pub serializer: SZ,
    pub key_generator: KG,
}

impl<RS, SZ, KG> StateStoreService<RS, SZ, KG>
where
    RS: RecordStore,
    SZ: StateSerializer,
    KG: KeyGenerator,
{
    /// Create a new state store service with the given dependencies.
    pub fn new(deps: StateStoreDependencies<RS, SZ, KG>, config: StoreConfig) -> Self {
        Self {
            record_store: deps.record_store,
            serializer: deps.serializer,
            key_generator: deps.key_generator,
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn record_store(&self) -> &RS {
        &self.record_store
    }

    pub fn record_store_mut(&mut self) -> &mut RS {
        &mut self.record_store
    }
}

impl FileStateStore {
    /// Production wiring: file record at `config.state_path()`, codec from
    /// `config.codec`, OS-random key material.
    pub fn file_backed(config: StoreConfig) -> Self {
        let deps = StateStoreDependencies {
            record_store: FileRecordStore::new(config.state_path()),
            serializer: serializer_for(config.codec),
            key_generator: RandomKeyGenerator,
        };
        Self::new(deps, config)
    }
}

impl<KG: KeyGenerator> StateStoreService<InMemoryRecordStore, JsonStateSerializer, KG> {
    /// In-memory wiring for tests.
    pub fn in_memory(key_generator: KG) -> Self {
        let deps = StateStoreDependencies {
            record_store: InMemoryRecordStore::new(),
            serializer: JsonStateSerializer,
            key_generator,
        };
        Self::new(deps, StoreConfig::default())
    }
}

/// Boxed serializer for `codec`.
///
/// Falls back to JSON when the bincode codec is compiled out.
pub fn serializer_for(codec: Codec) -> DynStateSerializer {
    match codec {
        Codec::Json => Box::new(JsonStateSerializer),
        #[cfg(feature = "bincode-codec")]
        Codec::Bincode => Box::new(crate::adapters::BincodeStateSerializer),
        #[cfg(not(feature = "bincode-codec"))]
        Codec::Bincode => {
            tracing::warn!("[mesh-state] bincode codec not compiled in, using JSON");
            Box::new(JsonStateSerializer)
        }
    }
}

impl<T: StateSerializer + ?Sized> StateSerializer for Box<T> {
    fn serialize(
        &self,
        record: &crate::domain::state::MeshStateRecord,
    ) -> Result<Vec<u8>, crate::domain::errors::SerializationError> {
        (**self).serialize(record)
    }

    fn deserialize(
        &self,
        data: &[u8],
    ) -> Result<crate::domain::state::MeshStateRecord, crate::domain::errors::SerializationError>
    {
        (**self).deserialize(data)
    }
}
