pub mod auth;
pub mod database;
pub mod ui;

use anyhow::Result;
use camino::Utf8Path;
use console::style;

use crate::templates;

/// Install one embedded template into the target project and report it.
fn install_artifact(template: &str, destination: &Utf8Path) -> Result<()> {
    templates::install(template, destination)?;
    println!("  {} {}", style("created").green(), destination);
    Ok(())
}

/// Write generated contents into the target project and report it.
fn write_artifact(contents: &str, destination: &Utf8Path) -> Result<()> {
    templates::write(destination, contents)?;
    println!("  {} {}", style("created").green(), destination);
    Ok(())
}
