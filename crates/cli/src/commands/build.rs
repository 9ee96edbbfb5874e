use anyhow::{Context, Result};
use recipe_viewer_generator::{AuthOverlay, RECIPES_DIR, RenderContext, generate_site};
use recipe_viewer_validator::validate_recipes;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::validate::print_report;
use crate::site::{LoadedSite, load_site};

/// Counts reported at the end of a build
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub assets: usize,
    pub public_files: usize,
    pub skipped_public_files: usize,
}

/// Build static site for deployment
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    let site = load_site(&path)?;

    println!("✓ Loaded: {}", site.config.title);
    println!("  Recipes: {}", site.recipes.len());
    println!();

    println!("🔍 Validating recipes...");
    let report = validate_recipes(&site.recipes, Some(&site.public_dir()));
    print_report(&report);
    if !report.is_ok() {
        anyhow::bail!(
            "Refusing to build: {} validation error(s)",
            report.errors.len()
        );
    }
    println!("   ✓ Recipe data valid");

    let summary = build_static_site(&site, &output)?;

    println!("   ✓ Copied {} public files", summary.public_files);
    if summary.skipped_public_files > 0 {
        println!(
            "   ⚠ Skipped {} public files under {}/ (reserved for recipe pages)",
            summary.skipped_public_files, RECIPES_DIR
        );
    }
    println!(
        "   ✓ Generated {} pages and {} assets",
        summary.pages, summary.assets
    );
    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

/// Write the complete site for `site` into `output`.
///
/// Public files are copied first so generated pages always win on a
/// path collision. The `recipes/` subtree is cleared beforehand and only
/// ever holds pages for the routes of this build.
pub fn build_static_site(site: &LoadedSite, output: &Path) -> Result<BuildSummary> {
    let ctx = RenderContext {
        site: &site.config,
        overlay: AuthOverlay::for_site(&site.config),
        is_preview: false,
    };
    let generated = generate_site(&ctx, &site.recipes).context("Failed to generate site")?;

    fs::create_dir_all(output).context("Failed to create output directory")?;

    let recipes_dir = output.join(RECIPES_DIR);
    if recipes_dir.exists() {
        fs::remove_dir_all(&recipes_dir)
            .with_context(|| format!("Failed to clear {}", recipes_dir.display()))?;
    }

    let (public_files, skipped_public_files) = copy_public_dir(&site.public_dir(), output)?;

    for (rel_path, html) in &generated.pages {
        write_output(output, rel_path, html.as_bytes())?;
    }
    for (rel_path, data) in &generated.assets {
        write_output(output, rel_path, data)?;
    }

    Ok(BuildSummary {
        pages: generated.pages.len(),
        assets: generated.assets.len(),
        public_files,
        skipped_public_files,
    })
}

fn write_output(output: &Path, rel_path: &str, data: &[u8]) -> Result<()> {
    let dst = output.join(rel_path);
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&dst, data).with_context(|| format!("Failed to write {}", dst.display()))?;
    tracing::debug!(path = %rel_path, bytes = data.len(), "wrote output");
    Ok(())
}

/// Copy the public directory into the output root, preserving layout.
///
/// Files under `recipes/` are skipped so the public tree cannot add
/// routes. Returns (copied, skipped).
fn copy_public_dir(public_dir: &Path, output: &Path) -> Result<(usize, usize)> {
    if !public_dir.exists() {
        tracing::info!(dir = %public_dir.display(), "no public directory, skipping");
        return Ok((0, 0));
    }

    let mut copied = 0;
    let mut skipped = 0;
    for entry in WalkDir::new(public_dir) {
        let entry = entry.context("Failed to read public directory")?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(public_dir)
            .context("Public file outside public directory")?;
        if rel.starts_with(RECIPES_DIR) {
            tracing::warn!(path = %rel.display(), "public file shadows recipe routes, skipping");
            skipped += 1;
            continue;
        }
        let dst = output.join(rel);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dst)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        copied += 1;
    }

    Ok((copied, skipped))
}
