//! Static Page Resolver.
//!
//! Routes form a closed world: every slug that can be served is known
//! once the collection is loaded, and anything else resolves to
//! [`Resolution::NotFound`].

use crate::types::Recipe;
use std::collections::HashMap;
use std::collections::HashSet;

/// Outcome of resolving one detail route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a Recipe),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn recipe(&self) -> Option<&'a Recipe> {
        match self {
            Resolution::Found(recipe) => Some(recipe),
            Resolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// Every distinct slug in the collection, in order of first appearance.
///
/// Each entry becomes exactly one generated detail page.
pub fn enumerate_routes(recipes: &[Recipe]) -> Vec<String> {
    let mut seen = HashSet::new();
    recipes
        .iter()
        .filter(|r| seen.insert(r.slug.as_str()))
        .map(|r| r.slug.clone())
        .collect()
}

/// Exact-match lookup of `slug`; the first matching record in source
/// order wins.
pub fn resolve<'a>(recipes: &'a [Recipe], slug: &str) -> Resolution<'a> {
    match recipes.iter().find(|r| r.slug == slug) {
        Some(recipe) => Resolution::Found(recipe),
        None => Resolution::NotFound,
    }
}

/// Precomputed `slug -> recipe` index over an immutable collection.
///
/// Built once per load and only read afterwards. Resolution through the
/// table agrees with [`resolve`], including first-match-wins on
/// duplicated slugs.
#[derive(Debug, Clone)]
pub struct RouteTable {
    recipes: Vec<Recipe>,
    index: HashMap<String, usize>,
    duplicates: Vec<String>,
}

impl RouteTable {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut index = HashMap::with_capacity(recipes.len());
        let mut duplicates = Vec::new();

        for (position, recipe) in recipes.iter().enumerate() {
            if index.contains_key(&recipe.slug) {
                if !duplicates.contains(&recipe.slug) {
                    duplicates.push(recipe.slug.clone());
                }
            } else {
                index.insert(recipe.slug.clone(), position);
            }
        }

        Self {
            recipes,
            index,
            duplicates,
        }
    }

    pub fn resolve(&self, slug: &str) -> Resolution<'_> {
        match self.index.get(slug) {
            Some(&position) => Resolution::Found(&self.recipes[position]),
            None => Resolution::NotFound,
        }
    }

    /// All recipes in source order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Distinct slugs in order of first appearance
    pub fn routes(&self) -> Vec<String> {
        enumerate_routes(&self.recipes)
    }

    /// Slugs shared by more than one record
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
