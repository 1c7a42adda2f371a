//! Common test utilities for building recipe catalogs.
use flavourfind::prelude::*;

/// The two-record catalog used in the documented example scenario.
#[allow(dead_code)]
pub fn create_example_catalog() -> Catalog {
    Catalog::from_iter([
        Recipe::new("Dal Tadka", "toor dal, turmeric, ghee").with_cuisine("Indian"),
        Recipe::new("Pasta", "pasta, tomato, basil").with_cuisine("Italian"),
    ])
}

/// A broader catalog with duplicate cuisines, a missing cuisine and a
/// blank cuisine.
#[allow(dead_code)]
pub fn create_mixed_catalog() -> Catalog {
    Catalog::from_iter([
        Recipe::new(
            "Boneless Chicken Curry",
            "Boneless Chicken Breast, onion, tomato, garam masala",
        )
        .with_cuisine("North Indian Recipes")
        .with_total_time(50),
        Recipe::new("Masala Chai", "milk, tea leaves, ginger, sugar").with_total_time(10),
        Recipe::new("Tomato Rice", "tomato,basmati rice,curry leaves,salt")
            .with_cuisine("South Indian Recipes")
            .with_total_time(15),
        Recipe::new("Aloo Gobi", "potato (aloo), cauliflower (gobi), turmeric powder")
            .with_cuisine("North Indian Recipes")
            .with_total_time(40),
        Recipe::new("Moong Salad", "sprouted moong, tomato, lemon juice")
            .with_cuisine("   ")
            .with_total_time(15),
        Recipe::new("Chicken Pulao", "basmati rice, chicken, onion, ghee")
            .with_cuisine("north indian recipes")
            .with_total_time(45),
    ])
}

/// A recipe with every field filled in.
#[allow(dead_code)]
pub fn create_full_recipe() -> Recipe {
    Recipe::new("Paneer Butter Masala", "paneer, butter , tomato,cashew nuts,")
        .with_cuisine("North Indian Recipes")
        .with_instructions("Blend tomatoes and cashews.\n  Cook in butter.  \n\nAdd paneer.")
        .with_total_time(35)
        .with_image_url("https://example.com/paneer.jpg")
        .with_preparation_time("15 mins")
}

/// Names of the recipes in a result list, for compact assertions.
#[allow(dead_code)]
pub fn names(recipes: &[&Recipe]) -> Vec<String> {
    recipes.iter().map(|recipe| recipe.name.clone()).collect()
}

/// Names of owned recipes, for compact assertions.
#[allow(dead_code)]
pub fn owned_names(recipes: &[Recipe]) -> Vec<String> {
    recipes.iter().map(|recipe| recipe.name.clone()).collect()
}
