//! Delimiter parsing shared by the matcher and the detail formatter.
//!
//! The dataset stores lists as delimited free text, so a comma inside an
//! ingredient description splits it in two. That lossy behaviour is kept.

pub const INGREDIENT_DELIMITER: char = ',';
pub const INSTRUCTION_DELIMITER: char = '\n';

/// Splits an ingredient string on commas and trims each segment.
///
/// Empty segments (e.g. from a trailing comma) are yielded as `""`.
pub fn split_ingredients(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(INGREDIENT_DELIMITER).map(str::trim)
}

/// Splits an instruction string on newlines and trims each step.
pub fn split_instructions(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(INSTRUCTION_DELIMITER).map(str::trim)
}

/// Trims and lower-cases a single term for comparison.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// The comparison set for a record's `ingredients` field.
pub fn normalized_ingredients(raw: &str) -> Vec<String> {
    split_ingredients(raw).map(normalize_term).collect()
}
