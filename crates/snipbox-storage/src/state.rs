use serde::{Serialize, de::DeserializeOwned};

use crate::backend::KeyValueStore;
use crate::error::StorageError;

/// Load a JSON value from a slot. A slot that was never written is `Ok(None)`.
pub fn load_state<T: DeserializeOwned>(
    backend: &impl KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = backend.get(key)? else {
        return Ok(None);
    };
    let value: T = serde_json::from_str(&raw)?;
    Ok(Some(value))
}

/// Serialize a value as compact JSON and write it to a slot, replacing any
/// prior value.
pub fn save_state<T: Serialize + ?Sized>(
    backend: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_string(value)?;
    backend.set(key, &body)
}
