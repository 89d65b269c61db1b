//! Applies generated fixes to source files.

use std::fs;

use anyhow::{Context, Result};

use crate::{check::FileReport, rule::Fix};

/// Outcome of applying fixes across a set of reports.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixStats {
    pub files_modified: usize,
    pub edits_applied: usize,
}

/// Apply a file's edits to its source text.
///
/// Edits are applied in descending start order so earlier offsets stay
/// valid. Edits never overlap: each call produces at most one edit, and
/// every edit stays within its own call's span.
pub fn apply_edits(source: &str, fixes: &[Fix]) -> String {
    let mut sorted: Vec<&Fix> = fixes.iter().collect();
    sorted.sort_by(|a, b| b.start().cmp(&a.start()));

    let mut out = source.to_string();
    for fix in sorted {
        out = fix.apply(&out);
    }
    out
}

/// Rewrite every file that has fixes.
pub fn apply_fixes(reports: &[FileReport]) -> Result<FixStats> {
    let mut stats = FixStats::default();

    for report in reports {
        if report.fixes.is_empty() {
            continue;
        }
        let source = fs::read_to_string(&report.file_path)
            .with_context(|| format!("Failed to read file: {}", report.file_path))?;
        let fixed = apply_edits(&source, &report.fixes);
        fs::write(&report.file_path, fixed)
            .with_context(|| format!("Failed to write file: {}", report.file_path))?;
        stats.files_modified += 1;
        stats.edits_applied += report.fixes.len();
    }

    Ok(stats)
}
