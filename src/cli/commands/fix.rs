//! Fix command - apply safe text domain autofixes.
//!
//! Fixable issues are missing domains (single allowed domain), invalid
//! domains (single allowed domain) and redundant `'default'` domains.
//! Issues without a safe rewrite are reported but left untouched.
//!
//! Use `--apply` to actually rewrite files (default is dry-run mode).

use anyhow::Result;
use colored::Colorize;

use super::super::{args::FixCommand, exit_status::ExitStatus};
use crate::{context::ProjectContext, fixer, issue::Issue, reporter};

pub fn fix(cmd: FixCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let reports = ctx.check_all();
    let apply = cmd.apply;

    let mut issues: Vec<Issue> = reports.iter().flat_map(|r| r.issues.clone()).collect();
    issues.sort();

    let fixable: usize = reports.iter().map(|r| r.fixes.len()).sum();
    let parse_failures = reports.iter().filter(|r| r.parse_failed).count();
    let file_count = reports.iter().filter(|r| !r.fixes.is_empty()).count();

    if issues.is_empty() {
        reporter::print_no_issue(ctx.files.len());
        return Ok(ExitStatus::Success);
    }

    reporter::print_report(&issues);

    let unfixable = issues.iter().filter(|i| !i.fixable).count();

    if apply {
        let stats = fixer::apply_fixes(&reports)?;
        println!(
            "{} {} fix(es) in {} file(s).",
            "Applied".green().bold(),
            stats.edits_applied,
            stats.files_modified
        );
        if unfixable > 0 {
            println!("  - skipped: {} issue(s) without a safe fix", unfixable);
        }
    } else if fixable > 0 {
        println!(
            "{} {} fix(es) in {} file(s).",
            "Would apply".yellow().bold(),
            fixable,
            file_count
        );
        println!("Run with {} to rewrite these files.", "--apply".cyan());
        if unfixable > 0 {
            println!(
                "Note: {} issue(s) have no safe fix (unknown value or ambiguous domain).",
                unfixable
            );
        }
    } else {
        println!("Note: none of these issues has a safe fix.");
    }

    // In dry-run mode, pending fixes signal work to be done (exit 1).
    if parse_failures > 0 {
        Ok(ExitStatus::Error)
    } else if !apply && fixable > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
