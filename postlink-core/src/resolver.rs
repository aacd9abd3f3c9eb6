//! Publish decisions and collision-free permalinks for a batch of posts.
//!
//! A [`PermalinkResolver`] lives for exactly one build run. Items are fed to
//! it in the order the generator presents them; the first item to claim a
//! slug keeps it and later items with the same slug get `-2`, `-3`, ...
//! appended. Explicit permalinks bypass the registry entirely, so they are
//! neither checked against generated slugs nor reserved for later items.
//!
//! Hosts that run several builds in one process must start each build with
//! a fresh resolver (or call [`PermalinkResolver::reset`]); otherwise slugs
//! from the previous build leak into the next one as spurious suffixes.

use crate::config::PermalinkConfig;
use crate::date::{DateError, PostDate};
use crate::models::{ContentItem, PermalinkDecision};
use crate::slug::slugify;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("{source_label}: invalid date: {error}")]
    InvalidDate {
        source_label: String,
        #[source]
        error: DateError,
    },
}

/// Slugs handed out so far in the current build run
#[derive(Debug, Clone, Default)]
pub struct SlugRegistry {
    used: HashSet<String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.used.contains(slug)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.used.iter().map(String::as_str)
    }

    /// Forget every slug; the start of a new build run
    pub fn clear(&mut self) {
        self.used.clear();
    }

    /// Claim the first free slug among `base`, `base-N`, `base-(N+1)`, ...
    ///
    /// `first_suffix` is the N tried after `base` itself is taken.
    pub fn claim(&mut self, base: &str, first_suffix: u32) -> String {
        let mut slug = base.to_string();
        let mut counter = first_suffix;

        while self.used.contains(&slug) {
            slug = format!("{}-{}", base, counter);
            counter += 1;
        }

        self.used.insert(slug.clone());
        slug
    }
}

/// Resolves each post of a build run to a permalink or to unpublished
#[derive(Debug, Clone, Default)]
pub struct PermalinkResolver {
    config: PermalinkConfig,
    registry: SlugRegistry,
}

impl PermalinkResolver {
    pub fn new(config: PermalinkConfig) -> Self {
        Self {
            config,
            registry: SlugRegistry::new(),
        }
    }

    /// Continue a run with an existing registry
    pub fn with_registry(config: PermalinkConfig, registry: SlugRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &PermalinkConfig {
        &self.config
    }

    pub fn registry(&self) -> &SlugRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> SlugRegistry {
        self.registry
    }

    /// Empty the registry so the resolver can serve a new build run
    pub fn reset(&mut self) {
        self.registry.clear();
    }

    /// Decide whether and where one item is published
    ///
    /// Precedence: a future date suppresses the item; otherwise an explicit
    /// permalink is used verbatim; otherwise the title is slugified and made
    /// unique within the run; items with none of these are unpublished.
    ///
    /// ```
    /// use chrono::Utc;
    /// use postlink_core::{ContentItem, PermalinkDecision, PermalinkResolver};
    ///
    /// let mut resolver = PermalinkResolver::default();
    /// let now = Utc::now();
    ///
    /// let first = resolver.resolve(&ContentItem::new().with_title("Hello World"), now).unwrap();
    /// let second = resolver.resolve(&ContentItem::new().with_title("Hello, World!"), now).unwrap();
    ///
    /// assert_eq!(first, PermalinkDecision::Published("/blog/hello-world/".into()));
    /// assert_eq!(second, PermalinkDecision::Published("/blog/hello-world-2/".into()));
    /// ```
    pub fn resolve(
        &mut self,
        item: &ContentItem,
        now: DateTime<Utc>,
    ) -> Result<PermalinkDecision, ResolveError> {
        if let Some(raw) = item.date() {
            let date = PostDate::parse(raw).map_err(|error| ResolveError::InvalidDate {
                source_label: item.label().to_string(),
                error,
            })?;

            if date.is_after(now) {
                tracing::debug!("{}: dated {} (future), not published", item.label(), date);
                return Ok(PermalinkDecision::Unpublished);
            }
        }

        if let Some(permalink) = item.permalink() {
            tracing::debug!("{}: explicit permalink {}", item.label(), permalink);
            return Ok(PermalinkDecision::Published(permalink.to_string()));
        }

        let Some(title) = item.title() else {
            tracing::debug!("{}: no title or permalink, not published", item.label());
            return Ok(PermalinkDecision::Unpublished);
        };

        // An empty slug is claimed like any other: `/blog//`, then `/blog/-2/`, ...
        let base = slugify(title);
        if base.is_empty() {
            tracing::warn!(
                "{}: title {:?} has no slug characters, publishing under an empty slug",
                item.label(),
                title
            );
        }

        let slug = self.registry.claim(&base, self.config.first_suffix);
        if slug != base {
            tracing::info!(
                "{}: slug {:?} already taken, using {:?}",
                item.label(),
                base,
                slug
            );
        }

        let path = self.config.path_for(&slug);
        tracing::debug!("{}: generated permalink {}", item.label(), path);
        Ok(PermalinkDecision::Published(path))
    }

    /// Resolve a batch in order, stopping at the first error
    pub fn resolve_all<'a, I>(
        &mut self,
        items: I,
        now: DateTime<Utc>,
    ) -> Result<Vec<PermalinkDecision>, ResolveError>
    where
        I: IntoIterator<Item = &'a ContentItem>,
    {
        items
            .into_iter()
            .map(|item| self.resolve(item, now))
            .collect()
    }
}
