//! Front matter extraction from markdown posts.

use crate::models::ContentItem;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("Invalid YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Front matter must be a mapping")]
    NotAMapping,
}

static FRONTMATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn frontmatter_regex() -> &'static Regex {
    FRONTMATTER_REGEX.get_or_init(|| {
        Regex::new(r"(?s)\A\x{FEFF}?---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)").unwrap()
    })
}

/// Parse the front matter block of a markdown post
///
/// Posts without a front matter block yield an empty item: no title, no date,
/// no permalink, which resolves to unpublished.
///
/// # Example
///
/// ```
/// use postlink_core::frontmatter::parse_frontmatter;
///
/// let content = "---\ntitle: My Post\ndate: 2025-01-01\n---\n# Hello World\n";
///
/// let item = parse_frontmatter(content).unwrap();
/// assert_eq!(item.title.as_deref(), Some("My Post"));
/// assert_eq!(item.date.as_deref(), Some("2025-01-01"));
/// ```
pub fn parse_frontmatter(content: &str) -> Result<ContentItem, FrontmatterError> {
    let Some(captures) = frontmatter_regex().captures(content) else {
        return Ok(ContentItem::default());
    };

    let yaml = captures.get(1).map_or("", |m| m.as_str());
    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;

    match value {
        serde_yaml::Value::Null => Ok(ContentItem::default()),
        serde_yaml::Value::Mapping(_) => Ok(serde_yaml::from_value(value)?),
        _ => Err(FrontmatterError::NotAMapping),
    }
}
