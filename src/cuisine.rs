//! Cuisine labels and cuisine filtering.
//!
//! Labels are compared by exact, case-sensitive equality against the
//! normalized cuisine of each record. Records without a cuisine are filed
//! under [`UNKNOWN_CUISINE`](crate::recipe::UNKNOWN_CUISINE).

use crate::catalog::Catalog;
use crate::recipe::{ALL_CUISINES, Recipe};
use ahash::AHashMap;
use itertools::Itertools;
use std::fmt;

/// Which recipes to show when browsing by cuisine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CuisineSelector {
    /// No filter.
    #[default]
    All,
    /// Only records whose normalized cuisine equals this label.
    Label(String),
}

impl CuisineSelector {
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CUISINES,
            Self::Label(label) => label,
        }
    }
}

impl From<&str> for CuisineSelector {
    fn from(label: &str) -> Self {
        if label == ALL_CUISINES {
            Self::All
        } else {
            Self::Label(label.to_string())
        }
    }
}

impl fmt::Display for CuisineSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The selectable labels for `recipes`: the wildcard first, then every
/// distinct normalized cuisine in order of first appearance.
///
/// A record whose cuisine is literally `"All"` is folded into the wildcard,
/// so the wildcard is listed exactly once.
pub fn distinct_cuisines(recipes: &[Recipe]) -> Vec<String> {
    std::iter::once(ALL_CUISINES)
        .chain(
            recipes
                .iter()
                .map(Recipe::cuisine_label)
                .filter(|label| *label != ALL_CUISINES),
        )
        .unique()
        .map(str::to_string)
        .collect()
}

/// Filters `recipes` by cuisine label, keeping their order.
///
/// The wildcard returns every record.
pub fn by_cuisine<'a>(recipes: &'a [Recipe], label: &str) -> Vec<&'a Recipe> {
    match CuisineSelector::from(label) {
        CuisineSelector::All => recipes.iter().collect(),
        CuisineSelector::Label(label) => recipes
            .iter()
            .filter(|recipe| recipe.cuisine_label() == label)
            .collect(),
    }
}

/// A per-label index over one catalog.
///
/// Safe to build once and keep: the catalog never changes after load.
#[derive(Debug, Clone)]
pub struct CuisineIndex {
    catalog: Catalog,
    labels: Vec<String>,
    positions: AHashMap<String, Vec<usize>>,
}

impl CuisineIndex {
    pub fn build(catalog: &Catalog) -> Self {
        let mut positions: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (position, recipe) in catalog.iter().enumerate() {
            positions
                .entry(recipe.cuisine_label().to_string())
                .or_default()
                .push(position);
        }

        Self {
            catalog: catalog.clone(),
            labels: distinct_cuisines(catalog),
            positions,
        }
    }

    /// Same labels as [`distinct_cuisines`], computed once.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of records filed under `label`. The wildcard counts everything.
    pub fn count(&self, label: &str) -> usize {
        match CuisineSelector::from(label) {
            CuisineSelector::All => self.catalog.len(),
            CuisineSelector::Label(label) => self.positions.get(&label).map_or(0, Vec::len),
        }
    }

    /// Records for `selector` in catalog order.
    pub fn select(&self, selector: &CuisineSelector) -> Vec<&Recipe> {
        match selector {
            CuisineSelector::All => self.catalog.iter().collect(),
            CuisineSelector::Label(label) => self
                .positions
                .get(label)
                .map(|positions| {
                    positions
                        .iter()
                        .map(|&position| &self.catalog[position])
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}
