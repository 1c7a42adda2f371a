use super::definition::Recipe;
use crate::error::RecipeConversionError;

/// A trait for custom dataset records that can be converted into a `Recipe`.
///
/// This is the extension point for loading recipes from a format other than
/// the bundled dataset. Conversion only checks that required fields are
/// present; the content itself is taken as-is.
///
/// # Example
///
/// ```rust,no_run
/// use flavourfind::prelude::*;
/// use flavourfind::error::RecipeConversionError;
///
/// struct CsvRow { title: Option<String>, items: Vec<String>, region: String }
///
/// impl IntoRecipe for CsvRow {
///     fn into_recipe(self) -> std::result::Result<Recipe, RecipeConversionError> {
///         let title = self.title.ok_or(RecipeConversionError::MissingField("title"))?;
///         Ok(Recipe::new(title, self.items.join(", ")).with_cuisine(self.region))
///     }
/// }
/// ```
pub trait IntoRecipe {
    /// Consumes the record and converts it into a catalog `Recipe`.
    fn into_recipe(self) -> Result<Recipe, RecipeConversionError>;
}

impl IntoRecipe for Recipe {
    fn into_recipe(self) -> Result<Recipe, RecipeConversionError> {
        if self.name.trim().is_empty() {
            return Err(RecipeConversionError::MissingField("TranslatedRecipeName"));
        }
        Ok(self)
    }
}
