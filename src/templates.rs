use std::fs;

use anyhow::{Context, Result, anyhow};
use camino::Utf8Path;
use rust_embed::RustEmbed;

/// Static artifacts shipped inside the binary.
#[derive(RustEmbed)]
#[folder = "templates"]
struct Assets;

/// Look up an embedded template by its path under `templates/`.
pub fn get(name: &str) -> Result<String> {
    let file = Assets::get(name).ok_or_else(|| anyhow!("embedded template `{}` missing", name))?;
    let text = std::str::from_utf8(file.data.as_ref())
        .with_context(|| format!("decoding embedded template `{}`", name))?;
    Ok(text.to_owned())
}

/// Write `contents` to `destination`, creating parent directories as needed.
pub fn write(destination: &Utf8Path, contents: &str) -> Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating directory {}", parent))?;
    }
    fs::write(destination, contents).with_context(|| format!("writing {}", destination))
}

/// Copy an embedded template to `destination` unchanged.
pub fn install(name: &str, destination: &Utf8Path) -> Result<()> {
    let contents = get(name)?;
    write(destination, &contents)
}
