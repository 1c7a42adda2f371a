//! # FlavourFind - Recipe Discovery Engine
//!
//! **FlavourFind** finds recipes in a bundled dataset by the ingredients you
//! have at hand or by cuisine, and keeps a persisted list of the ones you
//! want to cook later.
//!
//! ## Core Workflow
//!
//! 1.  **Load the Catalog**: [`Catalog::bundled`](catalog::Catalog::bundled) parses the dataset
//!     compiled into the crate. Custom formats can be loaded by implementing
//!     [`IntoRecipe`](recipe::IntoRecipe).
//! 2.  **Search**: [`matcher::search_by_ingredients`] keeps the recipes that contain every
//!     comma-separated term of a query (substring, case-insensitive);
//!     [`cuisine::by_cuisine`] filters by an exact cuisine label.
//! 3.  **Save**: a [`SavedRecipeStore`](store::SavedRecipeStore) persists copies of the
//!     recipes you pick as a JSON array under one key of any
//!     [`KeyValueStore`](backend::KeyValueStore).
//! 4.  **Show**: [`DetailFormatter`](detail::DetailFormatter) splits a recipe's ingredient
//!     and instruction text into display lines.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flavourfind::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let catalog = Catalog::bundled()?;
//!
//!     // Recipes that use both dal and turmeric
//!     let outcome = search_by_ingredients(&catalog, "dal, turmeric");
//!     for recipe in outcome.recipes() {
//!         println!("{}", DetailFormatter::search_card(recipe));
//!     }
//!
//!     // Every cuisine label, "All" first
//!     println!("{:?}", distinct_cuisines(&catalog));
//!
//!     // Save the first hit and read the list back
//!     let store = SavedRecipeStore::new(FileKeyValueStore::new("/tmp/flavourfind"));
//!     if let Some(recipe) = outcome.recipes().first() {
//!         store.save(recipe).await?;
//!     }
//!     for (position, recipe) in store.list().await.iter().enumerate() {
//!         println!("{position}: {}", recipe.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod backend;
pub mod catalog;
pub mod config;
pub mod cuisine;
pub mod detail;
pub mod error;
pub mod links;
pub mod matcher;
pub mod prelude;
pub mod recipe;
pub mod store;
