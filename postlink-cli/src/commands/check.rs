//! Check command: resolve, then surface permalinks claimed more than once.

use super::resolve::{entries, run, ResolvedEntry};
use super::{input, RunOptions};
use anyhow::{bail, Result};
use postlink_core::{find_conflicts, Diagnostic, DiagnosticSeverity};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct CheckSummary<'a> {
    items: usize,
    published: usize,
    errors: usize,
    warnings: usize,
    resolved: Vec<ResolvedEntry<'a>>,
    diagnostics: &'a [Diagnostic],
}

/// Resolve markdown posts and fail when two of them publish to the same path
pub fn check_files(config_path: &Path, files: &[PathBuf], opts: &RunOptions) -> Result<()> {
    let items = input::load_markdown(files)?;
    let decisions = run(config_path, &items, opts)?;
    let resolved = entries(&items, &decisions);

    let diagnostics = find_conflicts(resolved.iter().map(|e| (e.source, e.permalink)));
    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == DiagnosticSeverity::Error)
        .count();
    let warnings = diagnostics
        .iter()
        .filter(|d| d.severity == DiagnosticSeverity::Warning)
        .count();

    let summary = CheckSummary {
        items: items.len(),
        published: decisions.iter().filter(|d| d.is_published()).count(),
        errors,
        warnings,
        resolved,
        diagnostics: &diagnostics,
    };

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Check complete: {} items, {} published, {} errors, {} warnings",
            summary.items, summary.published, errors, warnings
        );
        for diag in &diagnostics {
            println!("- {:?} {}: {}", diag.severity, diag.code, diag.message);
            for source in &diag.sources {
                println!("  {}", source);
            }
        }
    }

    if errors > 0 {
        bail!("{} permalink conflict(s) found", errors);
    }

    Ok(())
}
