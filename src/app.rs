//! The `RecipeBook` ties the catalog, the cuisine index and the saved-recipe
//! store together, and turns storage errors into states a front end can show
//! directly.

use crate::backend::KeyValueStore;
use crate::catalog::Catalog;
use crate::cuisine::{CuisineIndex, CuisineSelector};
use crate::error::StoreError;
use crate::matcher::{SearchOutcome, search_by_ingredients, search_by_name};
use crate::recipe::Recipe;
use crate::store::SavedRecipeStore;
use std::time::Duration;
use tracing::{error, info};

/// What the saved-recipes screen should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedState {
    NothingSaved,
    Recipes(Vec<Recipe>),
}

impl SavedState {
    fn from_recipes(recipes: Vec<Recipe>) -> Self {
        if recipes.is_empty() {
            Self::NothingSaved
        } else {
            Self::Recipes(recipes)
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        match self {
            Self::NothingSaved => &[],
            Self::Recipes(recipes) => recipes,
        }
    }

    pub fn len(&self) -> usize {
        self.recipes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The write failed; the recipe must not be assumed saved.
    NotSaved { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed { recipe: Recipe, remaining: SavedState },
    /// Storage failed; the saved list is unchanged as far as the caller knows.
    NotRemoved { reason: String },
}

pub struct RecipeBook<S> {
    catalog: Catalog,
    cuisines: CuisineIndex,
    store: SavedRecipeStore<S>,
    search_delay: Duration,
}

impl<S: KeyValueStore> RecipeBook<S> {
    pub fn new(catalog: Catalog, store: SavedRecipeStore<S>) -> Self {
        let cuisines = CuisineIndex::build(&catalog);
        Self {
            catalog,
            cuisines,
            store,
            search_delay: Duration::ZERO,
        }
    }

    /// Sets the pause applied before computing ingredient search results.
    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cuisines(&self) -> &CuisineIndex {
        &self.cuisines
    }

    pub fn store(&self) -> &SavedRecipeStore<S> {
        &self.store
    }

    /// Ingredient search over the catalog, after the configured delay.
    pub async fn search_ingredients(&self, query: &str) -> SearchOutcome<'_> {
        if !self.search_delay.is_zero() {
            tokio::time::sleep(self.search_delay).await;
        }
        search_by_ingredients(&self.catalog, query)
    }

    pub fn search_name(&self, query: &str) -> SearchOutcome<'_> {
        search_by_name(&self.catalog, query)
    }

    pub fn browse(&self, selector: &CuisineSelector) -> Vec<&Recipe> {
        self.cuisines.select(selector)
    }

    pub async fn save(&self, recipe: &Recipe) -> SaveOutcome {
        match self.store.save(recipe).await {
            Ok(()) => {
                info!("Recipe '{}' has been saved", recipe.name);
                SaveOutcome::Saved
            }
            Err(e) => {
                error!("Error saving recipe '{}': {}", recipe.name, e);
                SaveOutcome::NotSaved {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub async fn saved(&self) -> SavedState {
        SavedState::from_recipes(self.store.list().await)
    }

    /// Removes the saved recipe at `position`.
    ///
    /// An out-of-range position is a caller bug and is returned as an error;
    /// storage failures become [`RemoveOutcome::NotRemoved`].
    pub async fn remove_saved(&self, position: usize) -> Result<RemoveOutcome, StoreError> {
        match self.store.remove_at(position).await {
            Ok(recipe) => Ok(RemoveOutcome::Removed {
                recipe,
                remaining: self.saved().await,
            }),
            Err(e @ StoreError::OutOfRange { .. }) => Err(e),
            Err(e) => {
                error!("Error deleting recipe at position {}: {}", position, e);
                Ok(RemoveOutcome::NotRemoved {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Deletes every saved recipe. Returns `false` if storage failed.
    pub async fn clear_saved(&self) -> bool {
        self.store.clear().await.is_ok()
    }
}
