//! CLI command implementations.

pub mod check;
pub mod input;
pub mod resolve;

pub use check::check_files;
pub use resolve::{resolve_files, resolve_manifest};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use postlink_core::{Config, PermalinkResolver};
use std::path::Path;

/// Options shared by every command that runs the resolver
#[derive(Args, Debug, Clone)]
pub struct RunOptions {
    /// Treat this instant as "now" (YYYY-MM-DD or RFC 3339); defaults to the current time
    #[arg(long)]
    pub now: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl RunOptions {
    /// The instant every item of this run is compared against
    pub fn now(&self) -> Result<DateTime<Utc>> {
        match &self.now {
            Some(raw) => postlink_core::date::parse_now(raw)
                .with_context(|| format!("Invalid --now value {:?}", raw)),
            None => Ok(Utc::now()),
        }
    }
}

/// A fresh resolver for one build run
pub fn resolver_for(config_path: &Path) -> Result<PermalinkResolver> {
    let config = Config::load_or_default(config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;
    tracing::debug!(
        "Generated permalinks live under {}",
        config.permalink.normalized_prefix()
    );
    Ok(PermalinkResolver::new(config.permalink))
}
