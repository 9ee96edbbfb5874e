use serde::{Deserialize, Serialize};

/// Path prefix under which every recipe detail page is generated
pub const RECIPES_ROUTE_PREFIX: &str = "/recipes";

/// A single authored recipe, exactly as it appears in the data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    /// Routing key, unique across the collection
    pub slug: String,
    /// URL or site-relative path of the recipe image
    pub image: String,
    /// Display order is significant
    pub ingredients: Vec<String>,
    /// Execution order
    pub steps: Vec<String>,
}

impl Recipe {
    /// Site-relative URL of the detail page, e.g. `/recipes/pancakes`
    pub fn route(&self) -> String {
        recipe_route(&self.slug)
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether the slug can be used verbatim as a URL path segment and
    /// as a directory name in the build output.
    pub fn has_url_safe_slug(&self) -> bool {
        is_url_safe_slug(&self.slug)
    }

    /// Remote images are referenced as-is; everything else is looked up
    /// under the site's public directory.
    pub fn image_is_remote(&self) -> bool {
        ["http://", "https://", "//", "data:"]
            .iter()
            .any(|prefix| self.image.starts_with(prefix))
    }

    /// Image reference as written into pages. Local images are made
    /// root-relative so they resolve the same from `/` and `/recipes/<slug>`.
    pub fn image_src(&self) -> String {
        if self.image_is_remote() || self.image.is_empty() || self.image.starts_with('/') {
            self.image.clone()
        } else {
            format!("/{}", self.image)
        }
    }
}

/// Build the detail route for a slug
pub fn recipe_route(slug: &str) -> String {
    format!("{}/{}", RECIPES_ROUTE_PREFIX, slug)
}

/// Slugs are restricted to lowercase ASCII alphanumerics, `-` and `_`
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Format a count the way the index cards show it, e.g. "3 ingredients"
pub fn format_count(count: usize, noun: &str) -> String {
    format!("{} {}", count, noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pancakes() -> Recipe {
        Recipe {
            id: 1,
            title: "Pancakes".to_string(),
            slug: "pancakes".to_string(),
            image: "/images/pancakes.jpg".to_string(),
            ingredients: vec!["flour".into(), "egg".into(), "milk".into()],
            steps: vec!["mix".into(), "cook".into()],
        }
    }

    #[test]
    fn test_route_uses_recipes_prefix() {
        assert_eq!(pancakes().route(), "/recipes/pancakes");
        assert_eq!(recipe_route("tomato-soup"), "/recipes/tomato-soup");
    }

    #[test]
    fn test_counts_are_literal_lengths() {
        let recipe = pancakes();
        assert_eq!(recipe.ingredient_count(), 3);
        assert_eq!(recipe.step_count(), 2);
        assert_eq!(format_count(recipe.ingredient_count(), "ingredients"), "3 ingredients");
    }

    #[test]
    fn test_url_safe_slugs() {
        assert!(is_url_safe_slug("pancakes"));
        assert!(is_url_safe_slug("banana-bread_2"));
        assert!(!is_url_safe_slug(""));
        assert!(!is_url_safe_slug("Pancakes"));
        assert!(!is_url_safe_slug("../etc"));
        assert!(!is_url_safe_slug("a/b"));
        assert!(!is_url_safe_slug("with space"));
        assert!(!is_url_safe_slug("crème"));
    }

    #[test]
    fn test_image_is_remote() {
        let mut recipe = pancakes();
        assert!(!recipe.image_is_remote());

        recipe.image = "https://images.example.com/p.jpg".to_string();
        assert!(recipe.image_is_remote());

        recipe.image = "http://images.example.com/p.jpg".to_string();
        assert!(recipe.image_is_remote());

        recipe.image = "//cdn.example.com/p.jpg".to_string();
        assert!(recipe.image_is_remote());

        recipe.image = "data:image/png;base64,iVBORw0KGgo=".to_string();
        assert!(recipe.image_is_remote());

        recipe.image = "images/p.jpg".to_string();
        assert!(!recipe.image_is_remote());
    }

    #[test]
    fn test_image_src_is_root_relative_for_local_images() {
        let mut recipe = pancakes();
        assert_eq!(recipe.image_src(), "/images/pancakes.jpg");

        recipe.image = "images/p.png".to_string();
        assert_eq!(recipe.image_src(), "/images/p.png");

        recipe.image = "//cdn.example.com/p.jpg".to_string();
        assert_eq!(recipe.image_src(), "//cdn.example.com/p.jpg");

        recipe.image = "https://cdn.example.com/p.jpg".to_string();
        assert_eq!(recipe.image_src(), "https://cdn.example.com/p.jpg");
    }

    #[test]
    fn test_deserializes_authored_shape() {
        let json = r#"{"id":7,"title":"Soup","slug":"soup","image":"/s.jpg","ingredients":["water"],"steps":["boil","serve"]}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, 7);
        assert_eq!(recipe.steps, vec!["boil", "serve"]);
    }
}
