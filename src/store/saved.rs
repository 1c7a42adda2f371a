use crate::backend::KeyValueStore;
use crate::error::StoreError;
use crate::recipe::Recipe;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

/// Key under which the saved list is persisted.
pub const SAVED_RECIPES_KEY: &str = "savedRecipes";

/// The user's saved recipes, persisted as one JSON array under a single key.
///
/// Every mutation reads the whole collection, changes it and writes it back.
/// Mutations are serialized through an internal lock, so concurrent `save`
/// calls on the same store never drop each other's records. Two stores over
/// the same backend and key do not share that lock.
///
/// Records have no identity beyond their position: saving the same recipe
/// twice stores two entries, and positions are only meaningful relative to
/// the most recent [`list`](Self::list).
pub struct SavedRecipeStore<S> {
    backend: S,
    key: String,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> SavedRecipeStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, SAVED_RECIPES_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The persisted collection. Never fails: an unreadable or corrupt value
    /// is logged and reported as an empty collection.
    pub async fn list(&self) -> Vec<Recipe> {
        match self.try_list().await {
            Ok(recipes) => recipes,
            Err(e) => {
                warn!("Treating saved recipes as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// The persisted collection, surfacing read and parse failures.
    ///
    /// A key that was never written yields an empty collection.
    pub async fn try_list(&self) -> Result<Vec<Recipe>, StoreError> {
        match self.backend.get_item(&self.key).await? {
            Some(raw) => self.decode(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Appends a copy of `recipe`. Duplicates are allowed.
    pub async fn save(&self, recipe: &Recipe) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut recipes = self.load_for_update().await?;
        recipes.push(recipe.clone());
        self.persist(&recipes).await?;
        debug!(
            "Saved '{}' ({} recipes stored under '{}')",
            recipe.name,
            recipes.len(),
            self.key
        );
        Ok(())
    }

    /// Removes and returns the record at `position`; later records shift down.
    ///
    /// Fails with [`StoreError::OutOfRange`] without touching storage when
    /// `position` is not in `[0, len)`.
    pub async fn remove_at(&self, position: usize) -> Result<Recipe, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut recipes = self.load_for_update().await?;
        if position >= recipes.len() {
            return Err(StoreError::OutOfRange {
                position,
                len: recipes.len(),
            });
        }
        let removed = recipes.remove(position);
        self.persist(&recipes).await?;
        debug!("Removed '{}' from position {}", removed.name, position);
        Ok(removed)
    }

    /// Deletes the persisted collection.
    pub async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.backend.remove_item(&self.key).await.inspect_err(|e| {
            error!("Failed to clear saved recipes: {}", e);
        })
    }

    /// Current contents for a read-modify-write.
    ///
    /// A corrupt value is replaced on the next write. A failed read aborts
    /// the mutation instead, since the stored value may still be intact.
    async fn load_for_update(&self) -> Result<Vec<Recipe>, StoreError> {
        let raw = self.backend.get_item(&self.key).await?;
        match raw.map(|raw| self.decode(&raw)) {
            Some(Ok(recipes)) => Ok(recipes),
            Some(Err(e)) => {
                warn!("Discarding unreadable saved recipes: {}", e);
                Ok(Vec::new())
            }
            None => Ok(Vec::new()),
        }
    }

    async fn persist(&self, recipes: &[Recipe]) -> Result<(), StoreError> {
        let json = serde_json::to_string(recipes).map_err(|e| StoreError::StorageWriteFailure {
            key: self.key.clone(),
            message: e.to_string(),
        })?;
        self.backend
            .set_item(&self.key, json)
            .await
            .inspect_err(|e| error!("Failed to persist saved recipes via {}: {}", self.backend.name(), e))
    }

    fn decode(&self, raw: &str) -> Result<Vec<Recipe>, StoreError> {
        serde_json::from_str(raw).map_err(|e| StoreError::StorageReadFailure {
            key: self.key.clone(),
            message: format!("corrupt value: {}", e),
        })
    }
}
