pub mod conversion;
pub mod definition;
pub mod parsing;

pub use conversion::*;
pub use definition::*;
pub use parsing::{normalize_term, split_ingredients, split_instructions};
