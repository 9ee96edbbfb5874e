//! Recipe Repository Reader.
//!
//! The data file is a JSON array of recipes. It is read in full and
//! returned untouched: no filtering, sorting or fixing up happens here,
//! so every policy decision belongs to the resolver, validator and
//! generator downstream.

use crate::error::Result;
use crate::types::Recipe;
use std::fs;
use std::path::Path;

/// Load every recipe from a JSON data file, in source order.
///
/// A missing file surfaces as `Error::IoError` and malformed JSON as
/// `Error::DataParse`. Either is fatal for a build: no partial collection
/// is ever returned.
pub fn load_all<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    load_all_str(&content)
}

/// Load recipes from a JSON string (useful for testing)
pub fn load_all_str(content: &str) -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = serde_json::from_str(content)?;
    Ok(recipes)
}
