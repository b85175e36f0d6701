use hiit_core::HiitResult;

/// A flat map of named string slots.
///
/// Implementations decide where the map lives (a file on disk, process memory).
/// Reading a slot that was never written yields `None`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> HiitResult<Option<String>>;

    /// Overwrite one slot, leaving every other slot untouched.
    fn set(&self, key: &str, value: &str) -> HiitResult<()>;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T>: Send + Sync {
    fn serialize(&self, data: &T) -> HiitResult<String>;

    fn deserialize(&self, text: &str) -> HiitResult<T>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<K> {
    fn get(&self, key: &str) -> HiitResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> HiitResult<()> {
        (**self).set(key, value)
    }
}
