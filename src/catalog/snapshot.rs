use crate::error::CatalogError;
use crate::recipe::Recipe;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Bumped whenever the record layout changes.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Positional record layout for bincode. The JSON renames and null handling on
/// `Recipe` only make sense for self-describing formats.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct SnapshotRecord {
    name: String,
    ingredients: String,
    instructions: String,
    cuisine: String,
    total_time_minutes: u32,
    image_url: String,
    preparation_time: Option<String>,
}

impl From<&Recipe> for SnapshotRecord {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            cuisine: recipe.cuisine.clone(),
            total_time_minutes: recipe.total_time_minutes,
            image_url: recipe.image_url.clone(),
            preparation_time: recipe.preparation_time.clone(),
        }
    }
}

impl From<SnapshotRecord> for Recipe {
    fn from(record: SnapshotRecord) -> Self {
        Self {
            name: record.name,
            ingredients: record.ingredients,
            instructions: record.instructions,
            cuisine: record.cuisine,
            total_time_minutes: record.total_time_minutes,
            image_url: record.image_url,
            preparation_time: record.preparation_time,
        }
    }
}

/// A pre-parsed catalog that loads without going through JSON.
#[derive(Serialize, Deserialize, Debug)]
pub struct CatalogSnapshot {
    format_version: u32,
    records: Vec<SnapshotRecord>,
}

impl CatalogSnapshot {
    pub(crate) fn from_recipes(recipes: &[Recipe]) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            records: recipes.iter().map(SnapshotRecord::from).collect(),
        }
    }

    pub(crate) fn into_recipes(self) -> Vec<Recipe> {
        self.records.into_iter().map(Recipe::from).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Saves the snapshot to a file using the bincode format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            CatalogError::Snapshot(format!("Could not create file '{}': {}", path.display(), e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            CatalogError::Snapshot(format!(
                "Could not write to file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let mut file = fs::File::open(path).map_err(|e| {
            CatalogError::Snapshot(format!("Could not open file '{}': {}", path.display(), e))
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            CatalogError::Snapshot(format!(
                "Could not read from file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CatalogError> {
        encode_to_vec(self, standard())
            .map_err(|e| CatalogError::Snapshot(format!("Serialization failed: {}", e)))
    }

    /// Deserializes a snapshot, rejecting other format versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CatalogError> {
        let snapshot: Self = decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| CatalogError::Snapshot(format!("Deserialization failed: {}", e)))?;

        if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
            return Err(CatalogError::Snapshot(format!(
                "Unsupported snapshot version {} (expected {})",
                snapshot.format_version, SNAPSHOT_FORMAT_VERSION
            )));
        }
        Ok(snapshot)
    }
}
