//! Persistence for the saved-recipe list and the key-value backends under it.

mod file;
mod memory;
mod saved;

pub use crate::backend::{BackendChoice, KeyValueStore};
pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use saved::{SAVED_RECIPES_KEY, SavedRecipeStore};

use std::path::Path;
use std::sync::Arc;

/// Opens the backend selected by `choice`.
///
/// `data_dir` is only used by the file backend.
pub fn open_backend(choice: BackendChoice, data_dir: &Path) -> Arc<dyn KeyValueStore> {
    match choice {
        BackendChoice::File => Arc::new(FileKeyValueStore::new(data_dir)),
        BackendChoice::Memory => Arc::new(MemoryKeyValueStore::new()),
    }
}
