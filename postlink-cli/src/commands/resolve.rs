//! Resolve command implementations.

use super::{input, resolver_for, RunOptions};
use anyhow::{Context, Result};
use postlink_core::{ContentItem, PermalinkDecision};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
pub(crate) struct ResolvedEntry<'a> {
    pub source: &'a str,
    pub permalink: &'a PermalinkDecision,
}

/// Resolve markdown posts and print one decision per file
pub fn resolve_files(config_path: &Path, files: &[PathBuf], opts: &RunOptions) -> Result<()> {
    let items = input::load_markdown(files)?;
    let decisions = run(config_path, &items, opts)?;
    print_decisions(&items, &decisions, opts.json)
}

/// Resolve a manifest of front matter records and print one decision per record
pub fn resolve_manifest(config_path: &Path, manifest: &Path, opts: &RunOptions) -> Result<()> {
    let items = input::load_manifest(manifest)?;
    let decisions = run(config_path, &items, opts)?;
    print_decisions(&items, &decisions, opts.json)
}

/// One build run over `items`, in order
pub(crate) fn run(
    config_path: &Path,
    items: &[ContentItem],
    opts: &RunOptions,
) -> Result<Vec<PermalinkDecision>> {
    let now = opts.now()?;
    let mut resolver = resolver_for(config_path)?;

    tracing::debug!("Resolving {} items as of {}", items.len(), now.to_rfc3339());
    let decisions = resolver
        .resolve_all(items, now)
        .context("Failed to resolve permalinks")?;

    let published = decisions.iter().filter(|d| d.is_published()).count();
    tracing::info!(
        "Resolved {} items: {} published, {} unpublished",
        decisions.len(),
        published,
        decisions.len() - published
    );

    Ok(decisions)
}

pub(crate) fn entries<'a>(
    items: &'a [ContentItem],
    decisions: &'a [PermalinkDecision],
) -> Vec<ResolvedEntry<'a>> {
    items
        .iter()
        .zip(decisions)
        .map(|(item, decision)| ResolvedEntry {
            source: item.label(),
            permalink: decision,
        })
        .collect()
}

fn print_decisions(
    items: &[ContentItem],
    decisions: &[PermalinkDecision],
    json: bool,
) -> Result<()> {
    let entries = entries(items, decisions);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{}\t{}", entry.permalink, entry.source);
        }
    }

    Ok(())
}
