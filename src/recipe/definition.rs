use super::parsing;
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder cuisine for records whose `Cuisine` field is missing or empty.
pub const UNKNOWN_CUISINE: &str = "Unknown Cuisine";

/// Selector label meaning "no cuisine filter". Never a cuisine value itself.
pub const ALL_CUISINES: &str = "All";

/// A single dish, as it appears in the bundled dataset.
///
/// Field names on the wire follow the dataset (`TranslatedRecipeName`,
/// `Cleaned-Ingredients`, ...). The snake_case Rust names are accepted as
/// aliases on input so hand-written fixtures stay readable.
///
/// Records are plain values: the catalog hands out shared references and the
/// saved-recipe store persists its own clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "TranslatedRecipeName", alias = "name")]
    pub name: String,

    /// Comma-separated free text.
    #[serde(rename = "Cleaned-Ingredients", alias = "ingredients", default)]
    pub ingredients: String,

    /// Newline-separated free text.
    #[serde(rename = "TranslatedInstructions", alias = "instructions", default)]
    pub instructions: String,

    /// Raw cuisine value. Use [`Recipe::cuisine_label`] for the normalized label.
    #[serde(
        rename = "Cuisine",
        alias = "cuisine",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub cuisine: String,

    #[serde(rename = "TotalTimeInMins", alias = "total_time_minutes", default)]
    pub total_time_minutes: u32,

    #[serde(
        rename = "image-url",
        alias = "image_url",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub image_url: String,

    /// Display-only, no numeric semantics.
    #[serde(
        rename = "Preparation-Time",
        alias = "preparation_time",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub preparation_time: Option<String>,
}

impl Recipe {
    /// Creates a recipe with a name and ingredient list; every other field is empty.
    pub fn new(name: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            instructions: String::new(),
            cuisine: String::new(),
            total_time_minutes: 0,
            image_url: String::new(),
            preparation_time: None,
        }
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_total_time(mut self, minutes: u32) -> Self {
        self.total_time_minutes = minutes;
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn with_preparation_time(mut self, preparation_time: impl Into<String>) -> Self {
        self.preparation_time = Some(preparation_time.into());
        self
    }

    /// The cuisine this record is classified under.
    ///
    /// Missing or blank values map to [`UNKNOWN_CUISINE`].
    pub fn cuisine_label(&self) -> &str {
        let trimmed = self.cuisine.trim();
        if trimmed.is_empty() {
            UNKNOWN_CUISINE
        } else {
            &self.cuisine
        }
    }

    /// The lower-cased, trimmed ingredient terms used for matching.
    pub fn ingredient_terms(&self) -> Vec<String> {
        parsing::normalized_ingredients(&self.ingredients)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
