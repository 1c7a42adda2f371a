use crate::error::StoreError;
use async_trait::async_trait;

/// An asynchronous string key-value store, the persistence primitive under
/// the saved-recipe list.
///
/// Implementations only move opaque strings; they never interpret values.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value under `key`, or `None` if nothing was ever stored.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the value under `key`.
    async fn set_item(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Deletes `key`. Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> Result<(), StoreError>;

    /// A human-readable name for this backend (for logging).
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// The available storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendChoice {
    /// One JSON file per key in the data directory. Survives restarts.
    #[default]
    File,
    /// Process-local map. Nothing is persisted.
    Memory,
}
