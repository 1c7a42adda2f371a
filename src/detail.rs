use crate::recipe::{Recipe, split_ingredients, split_instructions};

/// Prefix for each instruction step.
pub const STEP_BULLET: &str = "• ";

/// Shown on a saved-recipe card when the record has no preparation time.
pub const MISSING_PREPARATION_TIME: &str = "N/A";

/// The display fields of a single recipe, with the list fields split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub title: String,
    pub image_url: String,
    pub total_time_minutes: u32,
    pub cuisine: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl RecipeDetail {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.name.clone(),
            image_url: recipe.image_url.clone(),
            total_time_minutes: recipe.total_time_minutes,
            cuisine: recipe.cuisine_label().to_string(),
            ingredients: DetailFormatter::ingredient_lines(recipe),
            instructions: DetailFormatter::instruction_lines(recipe),
        }
    }
}

/// Formats recipes into display lines.
pub struct DetailFormatter;

impl DetailFormatter {
    /// One trimmed line per comma-separated segment.
    ///
    /// Blank segments (e.g. from a trailing comma) are kept as empty lines.
    pub fn ingredient_lines(recipe: &Recipe) -> Vec<String> {
        split_ingredients(&recipe.ingredients)
            .map(str::to_string)
            .collect()
    }

    /// One bulleted line per newline-separated step. Blank steps are kept
    /// and render as a bare bullet.
    pub fn instruction_lines(recipe: &Recipe) -> Vec<String> {
        split_instructions(&recipe.instructions)
            .map(|step| format!("{STEP_BULLET}{step}"))
            .collect()
    }

    /// The full detail page as plain text.
    pub fn render(recipe: &Recipe) -> String {
        let detail = RecipeDetail::from_recipe(recipe);
        let mut out = String::new();

        out.push_str(&format!("{} 🍲\n", detail.title));
        if !detail.image_url.is_empty() {
            out.push_str(&detail.image_url);
            out.push('\n');
        }
        out.push_str(&format!("⏱ Total Time: {} mins\n", detail.total_time_minutes));

        out.push_str("\n🌍 Cuisine\n");
        out.push_str(&detail.cuisine);
        out.push('\n');

        out.push_str("\n🥗 Ingredients\n");
        for line in &detail.ingredients {
            out.push_str(line);
            out.push('\n');
        }

        out.push_str("\n📖 Instructions\n");
        for line in &detail.instructions {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Summary shown for search and browse results.
    pub fn search_card(recipe: &Recipe) -> String {
        format!(
            "{}\n⏱ Time: {} mins",
            recipe.name, recipe.total_time_minutes
        )
    }

    /// Summary shown in the saved list, which displays the preparation time.
    pub fn saved_card(recipe: &Recipe) -> String {
        format!(
            "{}\n⏱ Time: {}",
            recipe.name,
            recipe
                .preparation_time
                .as_deref()
                .filter(|time| !time.trim().is_empty())
                .unwrap_or(MISSING_PREPARATION_TIME)
        )
    }
}
