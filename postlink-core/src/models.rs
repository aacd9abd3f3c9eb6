//! Content model: front matter input, permalink decisions, diagnostics.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Front matter of a single post, as far as permalinks are concerned
///
/// Every field is optional. Dates stay as raw text until the item is
/// resolved; see [`crate::date::PostDate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(default, deserialize_with = "scalar_text")]
    pub date: Option<String>,

    #[serde(default, deserialize_with = "scalar_text")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "permalink_text")]
    pub permalink: Option<String>,

    /// Where the item came from (file name, manifest index); never affects resolution
    #[serde(skip)]
    pub source: Option<String>,
}

impl ContentItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = Some(permalink.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Raw date, if present and not blank
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// Title, if present and non-empty
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Explicit permalink, if present and non-empty
    pub fn permalink(&self) -> Option<&str> {
        self.permalink.as_deref().filter(|p| !p.is_empty())
    }

    /// Source label used in logs and output, `<untitled>` when the item has none
    pub fn label(&self) -> &str {
        self.source.as_deref().unwrap_or("<untitled>")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// Accept any scalar and keep its textual form
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

/// Permalinks are either a path or a boolean; booleans carry no path
fn permalink_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(path)) => Some(path),
        Some(Scalar::Bool(_)) | None => None,
        Some(other) => Some(other.into_text()),
    })
}

/// Outcome of resolving one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermalinkDecision {
    Published(String),
    Unpublished,
}

impl PermalinkDecision {
    pub fn is_published(&self) -> bool {
        matches!(self, PermalinkDecision::Published(_))
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            PermalinkDecision::Published(path) => Some(path),
            PermalinkDecision::Unpublished => None,
        }
    }
}

impl std::fmt::Display for PermalinkDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermalinkDecision::Published(path) => write!(f, "{}", path),
            PermalinkDecision::Unpublished => write!(f, "unpublished"),
        }
    }
}

/// Serialized the way the generator reads it: a path, or `false`
impl Serialize for PermalinkDecision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PermalinkDecision::Published(path) => serializer.serialize_str(path),
            PermalinkDecision::Unpublished => serializer.serialize_bool(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// A problem found across a batch of resolved items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub severity: DiagnosticSeverity,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_item() {
        let item: ContentItem = serde_yaml::from_str(
            "title: Hello World\ndate: 2024-06-01\npermalink: /custom/path/\ntags: [a, b]\n",
        )
        .unwrap();

        assert_eq!(item.title(), Some("Hello World"));
        assert_eq!(item.date.as_deref(), Some("2024-06-01"));
        assert_eq!(item.permalink(), Some("/custom/path/"));
        assert_eq!(item.source, None);
    }

    #[test]
    fn test_deserialize_empty_item() {
        let item: ContentItem = serde_yaml::from_str("{}").unwrap();
        assert_eq!(item, ContentItem::default());
    }

    #[test]
    fn test_non_string_scalars_become_text() {
        let item: ContentItem = serde_yaml::from_str("title: 1984\ndate: 2024\n").unwrap();
        assert_eq!(item.title(), Some("1984"));
        assert_eq!(item.date.as_deref(), Some("2024"));
    }

    #[test]
    fn test_boolean_permalink_is_absent() {
        let item: ContentItem = serde_yaml::from_str("title: Draft\npermalink: false\n").unwrap();
        assert_eq!(item.permalink(), None);

        let item: ContentItem = serde_json::from_str(r#"{"permalink": true}"#).unwrap();
        assert_eq!(item.permalink(), None);
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let item = ContentItem::new()
            .with_title("")
            .with_permalink("")
            .with_date("  ");
        assert_eq!(item.date(), None);
        assert_eq!(item.title(), None);
        assert_eq!(item.permalink(), None);
        assert_eq!(item.label(), "<untitled>");
    }

    #[test]
    fn test_label_is_the_source_only() {
        let item = ContentItem::new().with_title("Hello World");
        assert_eq!(item.label(), "<untitled>");
        assert_eq!(item.with_source("posts/hello.md").label(), "posts/hello.md");
    }

    #[test]
    fn test_null_fields() {
        let item: ContentItem = serde_yaml::from_str("title: ~\ndate: null\n").unwrap();
        assert_eq!(item.title, None);
        assert_eq!(item.date, None);
    }

    #[test]
    fn test_decision_serialization() {
        let decisions = vec![
            PermalinkDecision::Published("/blog/hello-world/".into()),
            PermalinkDecision::Unpublished,
        ];
        assert_eq!(
            serde_json::to_string(&decisions).unwrap(),
            r#"["/blog/hello-world/",false]"#
        );
    }

    #[test]
    fn test_decision_accessors() {
        let published = PermalinkDecision::Published("/x/".into());
        assert!(published.is_published());
        assert_eq!(published.path(), Some("/x/"));
        assert_eq!(published.to_string(), "/x/");

        assert!(!PermalinkDecision::Unpublished.is_published());
        assert_eq!(PermalinkDecision::Unpublished.path(), None);
        assert_eq!(PermalinkDecision::Unpublished.to_string(), "unpublished");
    }
}
