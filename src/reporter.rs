//! Report formatting and printing utilities.
//!
//! This module is separate from the core library logic to allow tdlint
//! to be used as a library without printing side effects.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::issue::{Issue, Severity};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in a cargo-style format.
///
/// Issues are sorted and displayed with:
/// - Severity and message
/// - Clickable file location (path:line:col)
/// - Source code context with caret indicator
/// - Summary of total errors/warnings
pub fn print_report(issues: &[Issue]) {
    let mut sorted = issues.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = sorted
        .iter()
        .map(|i| i.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for issue in &sorted {
        let severity_str = match issue.severity {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };

        println!(
            "{}: {}  {}",
            severity_str,
            issue.message,
            issue.rule.to_string().dimmed().cyan()
        );

        println!(
            "  {} {}:{}:{}",
            "-->".blue(),
            issue.file_path,
            issue.line,
            issue.col
        );

        if let Some(source_line) = &issue.source_line {
            let caret_char = match issue.severity {
                Severity::Error => "^".red(),
                Severity::Warning => "^".yellow(),
            };

            println!("{:>width$} {}", "", "|".blue(), width = max_line_width);
            println!(
                "{:>width$} {} {}",
                issue.line.to_string().blue(),
                "|".blue(),
                source_line,
                width = max_line_width
            );
            // Caret pointing to the column (col is 1-based).
            // Use unicode display width for correct positioning with CJK
            // chars and emoji.
            let prefix: String = source_line
                .chars()
                .take(issue.col.saturating_sub(1))
                .collect();
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            println!(
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                caret_char,
                width = max_line_width,
                padding = caret_padding
            );
        }

        println!();
    }

    print_summary(issues);
}

pub fn print_summary(issues: &[Issue]) {
    let error_count = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    let mut parts = Vec::new();
    if error_count > 0 {
        parts.push(format!("{} error(s)", error_count).red().bold().to_string());
    }
    if warning_count > 0 {
        parts.push(
            format!("{} warning(s)", warning_count)
                .yellow()
                .bold()
                .to_string(),
        );
    }

    if !parts.is_empty() {
        println!("{} Found {}.", FAILURE_MARK.red(), parts.join(", "));
    }
}

pub fn print_no_issue(files_checked: usize) {
    println!(
        "{} No text domain issues found in {} file(s).",
        SUCCESS_MARK.green(),
        files_checked
    );
}
