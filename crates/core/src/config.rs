use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "site.toml";
pub const DEFAULT_RECIPES_PATH: &str = "data/recipes.json";
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_SESSION_COOKIE: &str = "__session";

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: RawSite,
    #[serde(default)]
    data: RawData,
    #[serde(default)]
    auth: RawAuth,
}

#[derive(Debug, Deserialize)]
struct RawSite {
    title: String,
    tagline: Option<String>,
    footer: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawData {
    recipes: Option<String>, // Convert to PathBuf
    public: Option<String>,  // Convert to PathBuf
}

#[derive(Debug, Default, Deserialize)]
struct RawAuth {
    #[serde(default)]
    enabled: bool,
    sign_in_url: Option<String>,
    session_cookie: Option<String>,
}

/// Complete site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Recipe data file, relative to the site directory
    pub recipes: PathBuf,
    /// Static assets copied verbatim into the build output
    pub public_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
}

/// Settings for the hosted identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub sign_in_url: String,
    pub session_cookie: String,
}

impl SiteConfig {
    /// Configuration used when a site has no site.toml of its own
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tagline: None,
            footer: None,
            recipes: PathBuf::from(DEFAULT_RECIPES_PATH),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            auth: None,
        }
    }

    pub fn recipes_path(&self, site_dir: &Path) -> PathBuf {
        site_dir.join(&self.recipes)
    }

    pub fn public_path(&self, site_dir: &Path) -> PathBuf {
        site_dir.join(&self.public_dir)
    }
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    if raw.site.title.trim().is_empty() {
        return Err(Error::ConfigParse("site.title must not be empty".to_string()));
    }

    let recipes = validate_path(
        raw.data.recipes.as_deref().unwrap_or(DEFAULT_RECIPES_PATH),
        "data.recipes",
    )?;
    let public_dir = validate_path(
        raw.data.public.as_deref().unwrap_or(DEFAULT_PUBLIC_DIR),
        "data.public",
    )?;

    let auth = if raw.auth.enabled {
        let sign_in_url = raw.auth.sign_in_url.ok_or_else(|| {
            Error::ConfigParse("auth.sign_in_url is required when auth.enabled = true".to_string())
        })?;
        if sign_in_url.trim().is_empty() {
            return Err(Error::ConfigParse("auth.sign_in_url must not be empty".to_string()));
        }
        let session_cookie = raw
            .auth
            .session_cookie
            .unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_string());
        if !is_cookie_name(&session_cookie) {
            return Err(Error::ConfigParse(format!(
                "Invalid auth.session_cookie '{}': use letters, digits, '_', '-' or '.'",
                session_cookie
            )));
        }
        Some(AuthConfig {
            sign_in_url,
            session_cookie,
        })
    } else {
        None
    };

    Ok(SiteConfig {
        title: raw.site.title,
        tagline: raw.site.tagline,
        footer: raw.site.footer,
        recipes,
        public_dir,
        auth,
    })
}

fn is_cookie_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
}

/// Validate and convert a path string to PathBuf.
///
/// Rejects absolute paths and parent directory references (`..`) so a
/// site.toml can never point the build outside the site directory.
fn validate_path(path_str: &str, field_name: &str) -> Result<PathBuf> {
    // Ensure path is not empty
    if path_str.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    let path = Path::new(path_str);

    if path.is_absolute() {
        return Err(Error::ConfigParse(format!(
            "Absolute paths not allowed in '{}': '{}'. Use relative paths only.",
            field_name, path_str
        )));
    }

    for component in path.components() {
        if component == std::path::Component::ParentDir {
            return Err(Error::ConfigParse(format!(
                "Parent directory references (..) not allowed in '{}': '{}'",
                field_name, path_str
            )));
        }
    }

    Ok(path.to_path_buf())
}
