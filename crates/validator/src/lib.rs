//! Authoring checks over a loaded recipe collection.
//!
//! Loading never judges the data; this crate does. Errors block a build,
//! warnings are printed and tolerated.

use recipe_viewer_core::{Recipe, RouteTable};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate every recipe in the collection.
///
/// `public_dir` is where site-relative images live; pass `None` to skip
/// image checks.
pub fn validate_recipes(recipes: &[Recipe], public_dir: Option<&Path>) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.info.push(format!("{} recipes loaded", recipes.len()));

    let table = RouteTable::new(recipes.to_vec());
    for slug in table.duplicates() {
        report
            .errors
            .push(format!("Duplicate slug '{}': only the first recipe would be reachable", slug));
    }

    let mut seen_ids = HashSet::new();
    for recipe in recipes {
        let label = describe(recipe);

        if !seen_ids.insert(recipe.id) {
            report.errors.push(format!("{}: duplicate id {}", label, recipe.id));
        }
        if recipe.title.trim().is_empty() {
            report.errors.push(format!("{}: title is empty", label));
        }
        if !recipe.has_url_safe_slug() {
            report.errors.push(format!(
                "{}: slug '{}' is not URL-safe (use a-z, 0-9, '-' and '_')",
                label, recipe.slug
            ));
        }
        if recipe.ingredients.is_empty() {
            report.warnings.push(format!("{}: no ingredients", label));
        }
        if recipe.steps.is_empty() {
            report.warnings.push(format!("{}: no steps", label));
        }

        check_image(recipe, &label, public_dir, &mut report);
    }

    report
}

fn describe(recipe: &Recipe) -> String {
    format!("Recipe #{} ({})", recipe.id, recipe.slug)
}

fn check_image(recipe: &Recipe, label: &str, public_dir: Option<&Path>, report: &mut ValidationReport) {
    if recipe.image.trim().is_empty() {
        report.warnings.push(format!("{}: no image", label));
        return;
    }
    if recipe.image_is_remote() {
        return;
    }
    let Some(public_dir) = public_dir else {
        return;
    };

    let src = recipe.image_src();
    let relative = src.trim_start_matches('/');
    if Path::new(relative)
        .components()
        .any(|c| c == std::path::Component::ParentDir)
    {
        report
            .errors
            .push(format!("{}: image '{}' points outside the public directory", label, recipe.image));
        return;
    }

    let path = public_dir.join(relative);
    if !path.is_file() {
        report.warnings.push(format!(
            "{}: image '{}' not found at {}",
            label,
            recipe.image,
            path.display()
        ));
        return;
    }

    match image::image_dimensions(&path) {
        Ok((width, height)) => report
            .info
            .push(format!("{}: image {}x{}", label, width, height)),
        Err(e) => report
            .warnings
            .push(format!("{}: image '{}' could not be read: {}", label, recipe.image, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn recipe(id: i64, slug: &str, image: &str) -> Recipe {
        Recipe {
            id,
            title: format!("Recipe {}", id),
            slug: slug.to_string(),
            image: image.to_string(),
            ingredients: vec!["flour".to_string()],
            steps: vec!["bake".to_string()],
        }
    }

    #[test]
    fn test_clean_collection_is_ok() {
        let recipes = vec![
            recipe(1, "pancakes", "https://cdn.example.com/p.jpg"),
            recipe(2, "waffles", "https://cdn.example.com/w.jpg"),
        ];
        let report = validate_recipes(&recipes, None);
        assert!(report.is_ok(), "{:?}", report.errors);
        assert!(report.warnings.is_empty());
        assert_eq!(report.info[0], "2 recipes loaded");
    }

    #[test]
    fn test_duplicate_slug_is_error() {
        let recipes = vec![
            recipe(1, "pancakes", "https://cdn.example.com/p.jpg"),
            recipe(2, "pancakes", "https://cdn.example.com/q.jpg"),
        ];
        let report = validate_recipes(&recipes, None);
        assert!(!report.is_ok());
        assert!(report.errors.iter().any(|e| e.contains("Duplicate slug 'pancakes'")));
    }

    #[test]
    fn test_duplicate_id_is_error() {
        let recipes = vec![
            recipe(1, "pancakes", "https://cdn.example.com/p.jpg"),
            recipe(1, "waffles", "https://cdn.example.com/w.jpg"),
        ];
        let report = validate_recipes(&recipes, None);
        assert!(report.errors.iter().any(|e| e.contains("duplicate id 1")));
    }

    #[test]
    fn test_unsafe_slug_is_error() {
        let recipes = vec![recipe(1, "../escape", "https://cdn.example.com/p.jpg")];
        let report = validate_recipes(&recipes, None);
        assert!(report.errors.iter().any(|e| e.contains("not URL-safe")));
    }

    #[test]
    fn test_empty_title_is_error() {
        let mut r = recipe(1, "pancakes", "https://cdn.example.com/p.jpg");
        r.title = " ".to_string();
        let report = validate_recipes(&[r], None);
        assert!(report.errors.iter().any(|e| e.contains("title is empty")));
    }

    #[test]
    fn test_empty_sequences_are_warnings() {
        let mut r = recipe(1, "pancakes", "https://cdn.example.com/p.jpg");
        r.ingredients.clear();
        r.steps.clear();
        let report = validate_recipes(&[r], None);
        assert!(report.is_ok());
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_missing_local_image_is_warning() {
        let dir = TempDir::new().unwrap();
        let recipes = vec![recipe(1, "pancakes", "/images/pancakes.jpg")];
        let report = validate_recipes(&recipes, Some(dir.path()));
        assert!(report.is_ok());
        assert!(report.warnings.iter().any(|w| w.contains("not found")));
    }

    #[test]
    fn test_undecodable_local_image_is_warning() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images/pancakes.jpg"), b"not really a jpeg").unwrap();

        let recipes = vec![recipe(1, "pancakes", "/images/pancakes.jpg")];
        let report = validate_recipes(&recipes, Some(dir.path()));
        assert!(report.warnings.iter().any(|w| w.contains("could not be read")));
    }

    #[test]
    fn test_local_image_dimensions_reported() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        let img = image::RgbImage::new(4, 3);
        img.save(dir.path().join("images/pancakes.png")).unwrap();

        let recipes = vec![recipe(1, "pancakes", "/images/pancakes.png")];
        let report = validate_recipes(&recipes, Some(dir.path()));
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
        assert!(report.info.iter().any(|i| i.contains("image 4x3")));
    }

    #[test]
    fn test_relative_local_image_resolves_under_public() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        image::RgbImage::new(2, 2)
            .save(dir.path().join("images/p.png"))
            .unwrap();

        let recipes = vec![recipe(1, "pancakes", "images/p.png")];
        let report = validate_recipes(&recipes, Some(dir.path()));
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);

        // the page references the same file the validator checked
        assert_eq!(recipes[0].image_src(), "/images/p.png");
        assert!(dir.path().join(recipes[0].image_src().trim_start_matches('/')).is_file());
    }

    #[test]
    fn test_protocol_relative_and_data_images_are_not_checked_locally() {
        let dir = TempDir::new().unwrap();
        let recipes = vec![
            recipe(1, "pancakes", "//cdn.example.com/p.jpg"),
            recipe(2, "waffles", "data:image/png;base64,iVBORw0KGgo="),
        ];
        let report = validate_recipes(&recipes, Some(dir.path()));
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    }

    #[test]
    fn test_image_traversal_is_error() {
        let dir = TempDir::new().unwrap();
        let recipes = vec![recipe(1, "pancakes", "/../secret.png")];
        let report = validate_recipes(&recipes, Some(dir.path()));
        assert!(report.errors.iter().any(|e| e.contains("outside the public directory")));
    }

    #[test]
    fn test_empty_image_is_warning() {
        let report = validate_recipes(&[recipe(1, "pancakes", "")], None);
        assert!(report.warnings.iter().any(|w| w.contains("no image")));
    }
}
