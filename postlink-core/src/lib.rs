//! # postlink-core
//!
//! Core library for postlink.
//!
//! Given the front matter of each post in a build run, decides whether the
//! post is published and, if so, under which permalink. Generated permalinks
//! are unique within the run.

pub mod config;
pub mod conflicts;
pub mod date;
pub mod frontmatter;
pub mod models;
pub mod resolver;
pub mod slug;

pub use config::{Config, PermalinkConfig};
pub use conflicts::find_conflicts;
pub use models::{ContentItem, Diagnostic, DiagnosticSeverity, PermalinkDecision};
pub use resolver::{PermalinkResolver, ResolveError, SlugRegistry};
pub use slug::slugify;
