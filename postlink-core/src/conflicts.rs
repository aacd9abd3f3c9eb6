//! Duplicate permalink detection across a resolved batch.
//!
//! The resolver only guarantees uniqueness for generated slugs. Explicit
//! permalinks can still land on the same path as another item; this pass
//! reports those collisions without changing any decision.

use crate::models::{Diagnostic, DiagnosticSeverity, PermalinkDecision};
use std::collections::BTreeMap;

/// Report every published path claimed by more than one item
///
/// `resolved` pairs each item's label with its decision, in build order.
/// Diagnostics are sorted by path.
pub fn find_conflicts<'a, I>(resolved: I) -> Vec<Diagnostic>
where
    I: IntoIterator<Item = (&'a str, &'a PermalinkDecision)>,
{
    let mut by_path: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for (label, decision) in resolved {
        if let Some(path) = decision.path() {
            by_path.entry(path).or_default().push(label);
        }
    }

    by_path
        .into_iter()
        .filter(|(_, labels)| labels.len() > 1)
        .map(|(path, labels)| Diagnostic {
            code: "permalink.duplicate".to_string(),
            message: format!("{} items publish to {}", labels.len(), path),
            severity: DiagnosticSeverity::Error,
            sources: labels.into_iter().map(str::to_string).collect(),
            context: Some(path.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn published(path: &str) -> PermalinkDecision {
        PermalinkDecision::Published(path.to_string())
    }

    #[test]
    fn test_no_conflicts() {
        let decisions = [
            ("a.md", published("/blog/a/")),
            ("b.md", published("/blog/b/")),
            ("c.md", PermalinkDecision::Unpublished),
            ("d.md", PermalinkDecision::Unpublished),
        ];
        let diagnostics = find_conflicts(decisions.iter().map(|(l, d)| (*l, d)));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_paths_are_reported() {
        let decisions = [
            ("z.md", published("/blog/hello-world/")),
            ("a.md", published("/custom/")),
            ("y.md", published("/blog/hello-world/")),
            ("b.md", published("/custom/")),
            ("c.md", published("/custom/")),
        ];
        let diagnostics = find_conflicts(decisions.iter().map(|(l, d)| (*l, d)));

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].context.as_deref(), Some("/blog/hello-world/"));
        assert_eq!(diagnostics[0].sources, vec!["z.md", "y.md"]);
        assert_eq!(diagnostics[1].message, "3 items publish to /custom/");
        assert_eq!(diagnostics[1].severity, DiagnosticSeverity::Error);
        assert_eq!(diagnostics[1].code, "permalink.duplicate");
    }
}
