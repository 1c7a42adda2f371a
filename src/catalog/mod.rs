//! The immutable recipe catalog.
//!
//! A `Catalog` is loaded once and never mutated or re-ordered afterwards.
//! Cloning it is cheap: clones share the same backing slice.

use crate::error::CatalogError;
use crate::recipe::{IntoRecipe, Recipe};
use std::fs;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

mod snapshot;

pub use snapshot::CatalogSnapshot;

/// The dataset compiled into the binary.
pub const BUNDLED_DATASET: &str = include_str!("../../data/recipes.json");

/// An ordered, read-only sequence of recipes.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Arc<[Recipe]>,
}

impl Catalog {
    /// Loads the dataset bundled with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Parses a JSON array of dataset records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<Recipe> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_sources(records)
    }

    /// Reads and parses a dataset file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        info!(
            "Loaded {} recipes from '{}'",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Builds a catalog from any records that convert into a `Recipe`.
    ///
    /// Fails on the first record that does not pass its presence checks.
    pub fn from_sources<I>(sources: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator,
        I::Item: IntoRecipe,
    {
        let recipes = sources
            .into_iter()
            .enumerate()
            .map(|(index, source)| {
                source
                    .into_recipe()
                    .map_err(|source| CatalogError::Conversion { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Catalog built with {} recipes", recipes.len());
        Ok(Self {
            recipes: recipes.into(),
        })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Finds the first recipe whose name equals `name`, ignoring case and
    /// surrounding whitespace.
    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        let wanted = name.trim().to_lowercase();
        self.recipes
            .iter()
            .find(|recipe| recipe.name.trim().to_lowercase() == wanted)
    }

    /// Creates a serializable snapshot of the catalog.
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot::from_recipes(&self.recipes)
    }

    /// Restores a catalog from a snapshot.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self, CatalogError> {
        Self::from_sources(snapshot.into_recipes())
    }
}

impl Deref for Catalog {
    type Target = [Recipe];

    fn deref(&self) -> &Self::Target {
        &self.recipes
    }
}

impl FromIterator<Recipe> for Catalog {
    fn from_iter<T: IntoIterator<Item = Recipe>>(iter: T) -> Self {
        Self {
            recipes: iter.into_iter().collect(),
        }
    }
}
