use anyhow::{Context, Result};
use recipe_viewer_core::config::CONFIG_FILE;
use recipe_viewer_core::{Recipe, SiteConfig, load_all, parse_site_toml};
use std::path::{Path, PathBuf};

/// A site directory with its configuration and full recipe collection
pub struct LoadedSite {
    pub root: PathBuf,
    pub config: SiteConfig,
    pub recipes: Vec<Recipe>,
}

impl LoadedSite {
    pub fn public_dir(&self) -> PathBuf {
        self.config.public_path(&self.root)
    }
}

/// Load site.toml and the recipe data it points to.
///
/// Any failure here is fatal for the caller: nothing is generated from a
/// site whose data could not be read in full.
pub fn load_site(path: &Path) -> Result<LoadedSite> {
    if !path.exists() {
        anyhow::bail!(
            "Site directory does not exist: {}\nRun 'recipe-viewer init {}' first",
            path.display(),
            path.display()
        );
    }

    let config_path = path.join(CONFIG_FILE);
    if !config_path.exists() {
        anyhow::bail!(
            "{} not found in {}\nRun 'recipe-viewer init {}' first",
            CONFIG_FILE,
            path.display(),
            path.display()
        );
    }

    let config = parse_site_toml(&config_path).context("Failed to parse site.toml")?;

    let data_path = config.recipes_path(path);
    let recipes = load_all(&data_path)
        .with_context(|| format!("Failed to load recipes from {}", data_path.display()))?;

    tracing::debug!(
        recipes = recipes.len(),
        data = %data_path.display(),
        "loaded site"
    );

    Ok(LoadedSite {
        root: path.to_path_buf(),
        config,
        recipes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_site() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), "[site]\ntitle = \"Recipes\"\n").unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(
            dir.path().join("data/recipes.json"),
            r#"[{"id":1,"title":"Pancakes","slug":"pancakes","image":"","ingredients":[],"steps":[]}]"#,
        )
        .unwrap();

        let site = load_site(dir.path()).unwrap();
        assert_eq!(site.config.title, "Recipes");
        assert_eq!(site.recipes.len(), 1);
        assert_eq!(site.public_dir(), dir.path().join("public"));
    }

    #[test]
    fn test_load_site_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = load_site(&dir.path().join("nope")).err().unwrap();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_load_site_missing_config() {
        let dir = TempDir::new().unwrap();
        let err = load_site(dir.path()).err().unwrap();
        assert!(err.to_string().contains("site.toml not found"));
    }

    #[test]
    fn test_load_site_missing_data_is_fatal() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), "[site]\ntitle = \"Recipes\"\n").unwrap();

        let err = load_site(dir.path()).err().unwrap();
        assert!(err.to_string().contains("Failed to load recipes"));
    }

    #[test]
    fn test_load_site_malformed_data_is_fatal() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), "[site]\ntitle = \"Recipes\"\n").unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/recipes.json"), "[{").unwrap();

        assert!(load_site(dir.path()).is_err());
    }
}
