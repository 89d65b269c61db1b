use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::rule::RuleOptions;

pub const CONFIG_FILE_NAME: &str = ".tdlintrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Accept calls that omit the text domain argument.
    #[serde(default)]
    pub allow_default: bool,
    /// The only text domains accepted as valid.
    #[serde(default)]
    pub allowed_text_domains: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_default: false,
            allowed_text_domains: Vec::new(),
            ignores: Vec::new(),
            includes: Vec::new(),
            source_root: default_source_root(),
            ignore_test_files: default_ignore_test_files(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or if
    /// `allowedTextDomains` contains duplicates. The rule relies on the set
    /// being duplicate-free, so it is enforced here at the loading boundary.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Include patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        for (i, domain) in self.allowed_text_domains.iter().enumerate() {
            if self.allowed_text_domains[..i].contains(domain) {
                bail!("Duplicate entry in 'allowedTextDomains': \"{}\"", domain);
            }
        }

        Ok(())
    }

    /// The options the validation rule reads; everything else in the config
    /// concerns file discovery.
    pub fn rule_options(&self) -> RuleOptions {
        RuleOptions {
            allow_default: self.allow_default,
            allowed_text_domains: self.allowed_text_domains.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
