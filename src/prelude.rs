//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! flavourfind crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flavourfind::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Catalog::from_file("path/to/recipes.json")?;
//! let index = CuisineIndex::build(&catalog);
//!
//! for label in index.labels() {
//!     println!("{} ({} recipes)", label, index.count(label));
//! }
//! # Ok(())
//! # }
//! ```

// Catalog and records
pub use crate::catalog::{Catalog, CatalogSnapshot};
pub use crate::recipe::{ALL_CUISINES, IntoRecipe, Recipe, UNKNOWN_CUISINE};

// Search and browse
pub use crate::cuisine::{CuisineIndex, CuisineSelector, by_cuisine, distinct_cuisines};
pub use crate::matcher::{
    IngredientQuery, SearchOutcome, match_ingredients, search_by_ingredients, search_by_name,
};

// Persistence
pub use crate::backend::{BackendChoice, KeyValueStore};
pub use crate::store::{FileKeyValueStore, MemoryKeyValueStore, SAVED_RECIPES_KEY, SavedRecipeStore};

// Presentation helpers
pub use crate::detail::{DetailFormatter, RecipeDetail};
pub use crate::links::{ContactLink, LinkOpener, SystemLinkOpener, open_link};

// Application facade and configuration
pub use crate::app::{RecipeBook, RemoveOutcome, SaveOutcome, SavedState};
pub use crate::config::AppConfig;

// Error types
pub use crate::error::{CatalogError, ConfigError, LinkError, RecipeConversionError, StoreError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
