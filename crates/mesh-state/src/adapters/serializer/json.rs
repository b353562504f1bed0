use crate::domain::errors::SerializationError;
use crate::domain::state::MeshStateRecord;
use crate::ports::outbound::StateSerializer;

/// Default state serializer using pretty-printed JSON.
///
/// Struct fields are written in declaration order and all collections are
/// sequences, so equal records always encode to equal bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonStateSerializer;

impl StateSerializer for JsonStateSerializer {
    fn serialize(&self, record: &MeshStateRecord) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec_pretty(record).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn deserialize(&self, data: &[u8]) -> Result<MeshStateRecord, SerializationError> {
        serde_json::from_slice(data).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_test_state;

    #[test]
    fn test_encoding_is_deterministic() {
        let record = make_test_state().to_record();
        let first = JsonStateSerializer.serialize(&record).unwrap();
        let second = JsonStateSerializer.serialize(&record.clone()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_document_shape() {
        let record = make_test_state().to_record();
        let bytes = JsonStateSerializer.serialize(&record).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["name"], "Test Network");
        assert_eq!(value["global_ttl"], 5);
        assert_eq!(value["unicast_address"], 0x0123);
        assert!(value["network_keys"][0]["key"].is_string());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(JsonStateSerializer.deserialize(b"not json").is_err());
        assert!(JsonStateSerializer.deserialize(b"{\"name\": 1}").is_err());
    }
}
