//! Shared state for one CLI invocation.
//!
//! Loads the configuration, applies command-line overrides and scans the
//! project for source files. The resulting context is read-only for the
//! rest of the run.

use std::env;

use anyhow::{Context as _, Result};
use rayon::prelude::*;

use crate::{
    check::{FileReport, check_file},
    cli::args::CommonArgs,
    config::load_config,
    rule::RuleOptions,
    scanner::scan_files,
};

pub struct ProjectContext {
    /// Source files to check, in sorted order.
    pub files: Vec<String>,
    pub options: RuleOptions,
    pub verbose: bool,
}

impl ProjectContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to resolve current directory")?;
        let mut config = load_config(&cwd)?.config;

        if let Some(source_root) = &common.source_root {
            config.source_root = source_root.to_string_lossy().into_owned();
        }
        if common.allow_default {
            config.allow_default = true;
        }
        if !common.allowed_text_domains.is_empty() {
            config.allowed_text_domains = common.allowed_text_domains.clone();
        }
        // Overrides go through the same validation as file values.
        config.validate()?;

        let base_dir = cwd.join(&config.source_root);
        let scan = scan_files(
            &base_dir.to_string_lossy(),
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            common.verbose,
        );
        if common.verbose && scan.skipped_count > 0 {
            eprintln!("Skipped {} inaccessible path(s).", scan.skipped_count);
        }

        Ok(Self {
            files: scan.files.into_iter().collect(),
            options: config.rule_options(),
            verbose: common.verbose,
        })
    }

    /// Check every scanned file. Files are independent, so they are checked
    /// in parallel; results keep the sorted file order.
    pub fn check_all(&self) -> Vec<FileReport> {
        self.files
            .par_iter()
            .map(|file| check_file(file, &self.options))
            .collect()
    }
}
