//! Loading front matter from the files named on the command line.

use anyhow::{bail, Context, Result};
use postlink_core::frontmatter::parse_frontmatter;
use postlink_core::ContentItem;
use std::fs;
use std::path::{Path, PathBuf};

/// Read each markdown file's front matter, keeping argument order
pub fn load_markdown(files: &[PathBuf]) -> Result<Vec<ContentItem>> {
    files
        .iter()
        .map(|path| {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            let item = parse_frontmatter(&content)
                .with_context(|| format!("Failed to parse front matter in {:?}", path))?;
            Ok(item.with_source(path.display().to_string()))
        })
        .collect()
}

/// Read a manifest: a sequence of front matter records
pub fn load_manifest(path: &Path) -> Result<Vec<ContentItem>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let items: Vec<ContentItem> = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON manifest {:?}", path))?
    } else if content.trim().is_empty() {
        bail!("Manifest {:?} is empty", path);
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML manifest {:?}", path))?
    };

    tracing::debug!("Loaded {} records from {:?}", items.len(), path);

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| item.with_source(format!("{}[{}]", path.display(), idx)))
        .collect())
}
