use crate::serialization::JsonSerializer;
use crate::traits::{KeyValueStore, Serializer};
use hiit_core::HiitResult;
use hiit_domain::{Routine, RoutineStore};

/// Slot holding the whole routine list as one JSON array.
pub const ROUTINES_KEY: &str = "hit:routines";

/// Adapts any [`KeyValueStore`] to the editor's [`RoutineStore`] seam.
pub struct RoutineSlot<K> {
    slots: K,
    key: String,
}

impl<K: KeyValueStore> RoutineSlot<K> {
    pub fn new(slots: K) -> Self {
        Self::with_key(slots, ROUTINES_KEY)
    }

    pub fn with_key(slots: K, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    pub fn slots(&self) -> &K {
        &self.slots
    }
}

impl<K: KeyValueStore> RoutineStore for RoutineSlot<K> {
    fn load(&self) -> HiitResult<Vec<Routine>> {
        let Some(blob) = self.slots.get(&self.key)? else {
            tracing::debug!("Slot '{}' is empty", self.key);
            return Ok(Vec::new());
        };
        let parsed: HiitResult<Vec<Routine>> = JsonSerializer.deserialize(&blob);
        match parsed {
            Ok(routines) => Ok(routines),
            Err(e) => {
                tracing::warn!("Ignoring malformed routines in '{}': {}", self.key, e);
                Ok(Vec::new())
            }
        }
    }

    fn store(&self, routines: &[Routine]) -> HiitResult<()> {
        let blob = JsonSerializer.serialize(&routines.to_vec())?;
        self.slots.set(&self.key, &blob)?;
        tracing::debug!("Stored {} routines in '{}'", routines.len(), self.key);
        Ok(())
    }
}
