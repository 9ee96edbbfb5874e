use anyhow::{Context, Result};
use chrono::Local;
use recipe_viewer_core::Recipe;
use recipe_viewer_core::config::{CONFIG_FILE, DEFAULT_PUBLIC_DIR, DEFAULT_RECIPES_PATH};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_TITLE: &str = "Recipe Viewer";

/// Escape a string for safe inclusion in a TOML basic string
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Initialize a new recipe site directory.
///
/// Creates `site.toml`, a sample `data/recipes.json` and an empty
/// `public/images/` directory. The directory is created if needed, but
/// an existing site.toml is never overwritten.
pub async fn run(path: PathBuf, title: Option<String>) -> Result<()> {
    println!("Initializing recipe site: {}", path.display());

    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!(
            "{} already exists in {}. Refusing to overwrite.",
            CONFIG_FILE,
            path.display()
        );
    }

    let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
    if title.trim().is_empty() {
        anyhow::bail!("Site title must not be empty");
    }

    create_directory_structure(&path)?;
    println!("  ✓ Created data/ and {}/images/", DEFAULT_PUBLIC_DIR);

    let data_path = path.join(DEFAULT_RECIPES_PATH);
    if data_path.exists() {
        println!("  • Keeping existing {}", DEFAULT_RECIPES_PATH);
    } else {
        write_sample_recipes(&data_path)?;
        println!("  ✓ Wrote sample {}", DEFAULT_RECIPES_PATH);
    }

    fs::write(&config_path, generate_site_toml(&title))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("  ✓ Wrote {}", CONFIG_FILE);

    println!();
    println!("Next steps:");
    println!("  1. Add recipe images under {}/images/", path.join(DEFAULT_PUBLIC_DIR).display());
    println!("  2. Edit {}", data_path.display());
    println!("  3. recipe-viewer preview {}", path.display());

    Ok(())
}

fn create_directory_structure(base: &Path) -> Result<()> {
    fs::create_dir_all(base.join("data")).context("Failed to create data directory")?;
    fs::create_dir_all(base.join(DEFAULT_PUBLIC_DIR).join("images"))
        .context("Failed to create public directory")?;
    Ok(())
}

fn generate_site_toml(title: &str) -> String {
    format!(
        r#"# Recipe site configuration
# Generated by recipe-viewer on {}

[site]
title = "{}"
# tagline = "Delicious Recipes"
# footer = "Explore delicious recipes!"

[data]
recipes = "{}"
public = "{}"

# Gate recipe pages behind a hosted identity provider.
# Visitors with a non-empty session cookie are treated as signed in.
[auth]
enabled = false
# sign_in_url = "https://accounts.example.com/sign-in"
# session_cookie = "__session"
"#,
        Local::now().format("%Y-%m-%d"),
        toml_escape_string(title),
        DEFAULT_RECIPES_PATH,
        DEFAULT_PUBLIC_DIR
    )
}

fn sample_recipes() -> Vec<Recipe> {
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    vec![
        Recipe {
            id: 1,
            title: "Pancakes".to_string(),
            slug: "pancakes".to_string(),
            image: "/images/pancakes.jpg".to_string(),
            ingredients: strings(&["flour", "egg", "milk"]),
            steps: strings(&["mix", "cook"]),
        },
        Recipe {
            id: 2,
            title: "Tomato Soup".to_string(),
            slug: "tomato-soup".to_string(),
            image: "/images/tomato-soup.jpg".to_string(),
            ingredients: strings(&["tomatoes", "onion", "vegetable stock", "olive oil"]),
            steps: strings(&[
                "Soften the onion in olive oil",
                "Add tomatoes and stock, simmer for 20 minutes",
                "Blend until smooth",
            ]),
        },
    ]
}

fn write_sample_recipes(path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&sample_recipes())
        .context("Failed to serialize sample recipes")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
