use crate::traits::Serializer;
use hiit_core::{HiitError, HiitResult};

/// Compact JSON text, one line per value.
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned> Serializer<T> for JsonSerializer {
    fn serialize(&self, data: &T) -> HiitResult<String> {
        serde_json::to_string(data).map_err(|e| HiitError::Serialization(e.to_string()))
    }

    fn deserialize(&self, text: &str) -> HiitResult<T> {
        serde_json::from_str(text).map_err(|e| HiitError::Serialization(e.to_string()))
    }
}
