use crate::domain::errors::SerializationError;
use crate::domain::state::MeshStateRecord;
use crate::ports::outbound::StateSerializer;

/// Compact state serializer using bincode.
#[derive(Debug, Default, Clone, Copy)]
pub struct BincodeStateSerializer;

impl StateSerializer for BincodeStateSerializer {
    fn serialize(&self, record: &MeshStateRecord) -> Result<Vec<u8>, SerializationError> {
        bincode::serialize(record).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn deserialize(&self, data: &[u8]) -> Result<MeshStateRecord, SerializationError> {
        bincode::deserialize(data).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }
}
