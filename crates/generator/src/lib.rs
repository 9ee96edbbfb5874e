//! Static site generation for recipe collections.
//!
//! Pages are rendered into memory first so the same output can be
//! written to disk by `build` or served by `preview`.

pub mod auth;
pub mod html;
pub mod pages;
pub mod style;

pub use auth::AuthOverlay;
pub use pages::{RenderContext, render_index, render_not_found, render_recipe};

use recipe_viewer_core::{Error, Recipe, Result, enumerate_routes, is_url_safe_slug, resolve};

pub const INDEX_PAGE: &str = "index.html";
pub const NOT_FOUND_PAGE: &str = "404.html";
pub const STYLESHEET_PATH: &str = "style.css";
/// Output directory owned entirely by generated detail pages
pub const RECIPES_DIR: &str = "recipes";

pub struct GeneratedSite {
    pub pages: Vec<(String, String)>,   // (path, html)
    pub assets: Vec<(String, Vec<u8>)>, // (path, data)
}

impl GeneratedSite {
    pub fn page(&self, path: &str) -> Option<&str> {
        self.pages
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, html)| html.as_str())
    }
}

/// Output path of the detail page for `slug`, relative to the output root.
///
/// Slugs become directory names, so anything that is not URL-safe is
/// refused here even if validation was skipped.
pub fn recipe_output_path(slug: &str) -> Result<String> {
    if !is_url_safe_slug(slug) {
        return Err(Error::InvalidData(format!(
            "Slug '{}' cannot be used as a route",
            slug
        )));
    }
    Ok(format!("{}/{}/{}", RECIPES_DIR, slug, INDEX_PAGE))
}

/// Render the whole site: index, one page per enumerated route, the
/// not-found page and the stylesheet.
pub fn generate_site(ctx: &RenderContext<'_>, recipes: &[Recipe]) -> Result<GeneratedSite> {
    let routes = enumerate_routes(recipes);
    let mut pages = Vec::with_capacity(routes.len() + 2);

    pages.push((INDEX_PAGE.to_string(), render_index(ctx, recipes)));

    for slug in &routes {
        let path = recipe_output_path(slug)?;
        pages.push((path, render_recipe(ctx, resolve(recipes, slug))));
    }

    pages.push((NOT_FOUND_PAGE.to_string(), render_not_found(ctx)));

    Ok(GeneratedSite {
        pages,
        assets: vec![(
            STYLESHEET_PATH.to_string(),
            style::STYLESHEET.as_bytes().to_vec(),
        )],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_viewer_core::SiteConfig;

    fn recipe(id: i64, title: &str, slug: &str, ingredients: &[&str], steps: &[&str]) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            slug: slug.to_string(),
            image: format!("/images/{}.jpg", slug),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn open_ctx(site: &SiteConfig) -> RenderContext<'_> {
        RenderContext {
            site,
            overlay: AuthOverlay::Open,
            is_preview: false,
        }
    }

    #[test]
    fn test_generate_site_outputs() {
        let site = SiteConfig::with_title("Recipe Viewer");
        let recipes = vec![
            recipe(1, "Pancakes", "pancakes", &["flour", "egg", "milk"], &["mix", "cook"]),
            recipe(2, "Tea", "tea", &["water", "leaves"], &["steep"]),
        ];

        let generated = generate_site(&open_ctx(&site), &recipes).unwrap();
        let paths: Vec<&str> = generated.pages.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "index.html",
                "recipes/pancakes/index.html",
                "recipes/tea/index.html",
                "404.html"
            ]
        );
        assert_eq!(generated.assets.len(), 1);
        assert_eq!(generated.assets[0].0, "style.css");
    }

    #[test]
    fn test_generated_counts_match_sequence_lengths() {
        let site = SiteConfig::with_title("Recipe Viewer");
        let recipes = vec![
            recipe(1, "Pancakes", "pancakes", &["flour", "egg", "milk"], &["mix", "cook"]),
            recipe(2, "Toast", "toast", &["bread"], &[]),
        ];

        let generated = generate_site(&open_ctx(&site), &recipes).unwrap();
        let index = generated.page("index.html").unwrap();
        for r in &recipes {
            assert!(index.contains(&format!("{} ingredients", r.ingredients.len())));
            assert!(index.contains(&format!("{} steps", r.steps.len())));
        }

        let toast = generated.page("recipes/toast/index.html").unwrap();
        assert!(toast.contains("<span>bread</span>"));
        assert!(!toast.contains("step-number"));
    }

    #[test]
    fn test_duplicate_slug_generates_one_page_for_first_record() {
        let site = SiteConfig::with_title("Recipe Viewer");
        let recipes = vec![
            recipe(1, "First", "dup", &["a"], &["b"]),
            recipe(2, "Second", "dup", &["c"], &["d"]),
        ];

        let generated = generate_site(&open_ctx(&site), &recipes).unwrap();
        assert_eq!(generated.pages.len(), 3);
        let page = generated.page("recipes/dup/index.html").unwrap();
        assert!(page.contains("<h1>First</h1>"));
        assert!(!page.contains("<h1>Second</h1>"));
    }

    #[test]
    fn test_unsafe_slug_aborts_generation() {
        let site = SiteConfig::with_title("Recipe Viewer");
        let recipes = vec![recipe(1, "Evil", "../../etc", &[], &[])];

        let result = generate_site(&open_ctx(&site), &recipes);
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_recipe_output_path() {
        assert_eq!(
            recipe_output_path("pancakes").unwrap(),
            "recipes/pancakes/index.html"
        );
        assert!(recipe_output_path("").is_err());
        assert!(recipe_output_path("a/b").is_err());
    }

    #[test]
    fn test_not_found_page_links_home() {
        let site = SiteConfig::with_title("Recipe Viewer");
        let generated = generate_site(&open_ctx(&site), &[]).unwrap();
        let page = generated.page("404.html").unwrap();
        assert!(page.contains("Recipe not found"));
        assert!(page.contains(r#"href="/""#));
        assert!(generated.page("recipes/does-not-exist/index.html").is_none());
    }
}
