use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use hiit_core::{HiitError, HiitResult};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Slots kept as one JSON object in a single file:
///
/// ```json
/// { "hit:routines": "[{\"id\":\"...\",\"name\":\"Tabata\",\"items\":[]}]" }
/// ```
///
/// Every `set` re-reads the file so slots written by someone else survive.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Missing and malformed files both read as an empty map.
    fn read_slots(&self) -> HiitResult<Map<String, Value>> {
        let Some(bytes) = AtomicWriter::read_optional(&self.path)? else {
            return Ok(Map::new());
        };
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(slots)) => Ok(slots),
            Ok(_) => {
                tracing::warn!(
                    "{} does not hold a JSON object, treating it as empty",
                    self.path.display()
                );
                Ok(Map::new())
            }
            Err(e) => {
                tracing::warn!(
                    "{} is not valid JSON ({}), treating it as empty",
                    self.path.display(),
                    e
                );
                Ok(Map::new())
            }
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> HiitResult<Option<String>> {
        let slots = self.read_slots()?;
        Ok(slots.get(key).and_then(Value::as_str).map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> HiitResult<()> {
        let _guard = self.write_lock.lock();

        let mut slots = self.read_slots()?;
        slots.insert(key.to_string(), Value::String(value.to_string()));

        let bytes = serde_json::to_vec_pretty(&Value::Object(slots))
            .map_err(|e| HiitError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(&self.path, &bytes)?;

        tracing::info!(
            "Saved slot '{}' ({} bytes) to {}",
            key,
            value.len(),
            self.path.display()
        );
        Ok(())
    }
}
