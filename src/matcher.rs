//! Ingredient and name search over a recipe slice.
//!
//! Both searches are stable filters: results keep catalog order and nothing
//! is re-ranked.

use crate::recipe::{Recipe, normalize_term, parsing};

/// The result of running a search, keeping "not searched yet" apart from
/// "searched and found nothing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// The query was empty or whitespace-only.
    NotSearched,
    /// The query was valid but no record matched.
    NoResults,
    /// At least one record matched, in catalog order.
    Found(Vec<&'a Recipe>),
}

impl<'a> SearchOutcome<'a> {
    fn from_matches(matches: Vec<&'a Recipe>) -> Self {
        if matches.is_empty() {
            Self::NoResults
        } else {
            Self::Found(matches)
        }
    }

    /// The matched records; empty for both `NotSearched` and `NoResults`.
    pub fn recipes(&self) -> &[&'a Recipe] {
        match self {
            Self::Found(recipes) => recipes,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.recipes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes().is_empty()
    }

    pub fn was_searched(&self) -> bool {
        !matches!(self, Self::NotSearched)
    }
}

/// A parsed, comma-separated ingredient query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientQuery {
    terms: Vec<String>,
}

impl IngredientQuery {
    /// Parses a raw query. Returns `None` for an empty or whitespace-only query.
    ///
    /// Every comma-separated segment becomes a term, so `"dal,"` yields the
    /// terms `"dal"` and `""`. An empty term is contained in every ingredient.
    pub fn parse(query: &str) -> Option<Self> {
        if query.trim().is_empty() {
            return None;
        }
        let terms = parsing::split_ingredients(query)
            .map(normalize_term)
            .collect();
        Some(Self { terms })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// True when every term is a substring of at least one of the record's
    /// ingredients.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let ingredients = recipe.ingredient_terms();
        self.terms.iter().all(|term| {
            ingredients
                .iter()
                .any(|ingredient| ingredient.contains(term.as_str()))
        })
    }

    /// Filters `recipes`, keeping their order.
    pub fn filter<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|recipe| self.matches(recipe)).collect()
    }
}

/// Returns the records that contain every ingredient term in `query`.
///
/// An empty or whitespace-only query returns no records.
pub fn match_ingredients<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    match IngredientQuery::parse(query) {
        Some(parsed) => parsed.filter(recipes),
        None => Vec::new(),
    }
}

/// Like [`match_ingredients`], but reports whether a search actually ran.
pub fn search_by_ingredients<'a>(recipes: &'a [Recipe], query: &str) -> SearchOutcome<'a> {
    match IngredientQuery::parse(query) {
        Some(parsed) => SearchOutcome::from_matches(parsed.filter(recipes)),
        None => SearchOutcome::NotSearched,
    }
}

/// Case-insensitive substring search on recipe names.
pub fn search_by_name<'a>(recipes: &'a [Recipe], query: &str) -> SearchOutcome<'a> {
    let needle = normalize_term(query);
    if needle.is_empty() {
        return SearchOutcome::NotSearched;
    }
    let matches = recipes
        .iter()
        .filter(|recipe| recipe.name.to_lowercase().contains(&needle))
        .collect();
    SearchOutcome::from_matches(matches)
}
