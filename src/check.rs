//! Per-file analysis: parse, collect translation calls, validate each.

use std::fs;

use crate::{
    collector::CallCollector,
    issue::Issue,
    parser::parse_source,
    rule::{Fix, RuleOptions, check_call},
};

/// Everything found in one file: display-ready issues plus the raw edits
/// for `fix --apply`.
#[derive(Debug, Clone, Default)]
pub struct FileReport {
    pub file_path: String,
    pub issues: Vec<Issue>,
    /// One edit per fixable diagnostic, in source order.
    pub fixes: Vec<Fix>,
    pub parse_failed: bool,
}

impl FileReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == crate::issue::Severity::Error)
            .count()
    }
}

/// Validate every translation call in `code`.
///
/// Calls are processed independently in source order; a parse failure yields
/// a single `parse-error` issue instead of diagnostics.
pub fn check_source(code: &str, file_path: &str, options: &RuleOptions) -> FileReport {
    let parsed = match parse_source(code, file_path) {
        Ok(parsed) => parsed,
        Err(err) => {
            return FileReport {
                file_path: file_path.to_string(),
                issues: vec![Issue::parse_error(file_path, &err.to_string())],
                fixes: Vec::new(),
                parse_failed: true,
            };
        }
    };

    let calls = CallCollector::new(&parsed.source_map, parsed.start_pos).collect(&parsed.module);

    let mut issues = Vec::new();
    let mut fixes = Vec::new();
    for call in calls {
        if let Some(diagnostic) = check_call(&call.record, options) {
            issues.push(Issue::from_diagnostic(
                &diagnostic,
                file_path,
                call.line,
                call.col,
                call.source_line,
            ));
            if let Some(fix) = diagnostic.fix {
                fixes.push(fix);
            }
        }
    }

    FileReport {
        file_path: file_path.to_string(),
        issues,
        fixes,
        parse_failed: false,
    }
}

/// Read and validate one file. I/O failures surface as `parse-error` issues
/// so a single unreadable file cannot abort the whole run.
pub fn check_file(file_path: &str, options: &RuleOptions) -> FileReport {
    match fs::read_to_string(file_path) {
        Ok(code) => check_source(&code, file_path, options),
        Err(err) => FileReport {
            file_path: file_path.to_string(),
            issues: vec![Issue::parse_error(file_path, &err.to_string())],
            fixes: Vec::new(),
            parse_failed: true,
        },
    }
}
