use crate::site::load_site;
use recipe_viewer_validator::{ValidationReport, validate_recipes};
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating site at: {}", path.display());

    let site = load_site(&path)?;

    println!("✓ site.toml valid");
    println!("  Site: {}", site.config.title);
    println!("  Recipes: {}", site.recipes.len());
    if site.config.auth.is_some() {
        println!("  Auth: enabled");
    }

    let report = validate_recipes(&site.recipes, Some(&site.public_dir()));
    print_report(&report);

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!("\n✓ Recipe data valid");
    Ok(())
}

/// Print a validation report, errors last so they stay visible
pub fn print_report(report: &ValidationReport) {
    for line in &report.info {
        println!("  ℹ {}", line);
    }
    for line in &report.warnings {
        println!("  ⚠ {}", line);
    }
    for line in &report.errors {
        eprintln!("  ✗ {}", line);
    }
}
