//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Validate text domains of translation calls
//! - `fix`: Apply safe autofixes (dry-run by default)
//! - `init`: Initialize a tdlint configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Accept calls that omit the text domain (overrides config file)
    #[arg(long)]
    pub allow_default: bool,

    /// Allowed text domain, repeatable (overrides config file)
    #[arg(long = "allowed-text-domain", value_name = "DOMAIN")]
    pub allowed_text_domains: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check translation calls for missing or invalid text domains
    Check(CheckCommand),
    /// Apply safe text domain autofixes
    Fix(FixCommand),
    /// Initialize a new .tdlintrc.json configuration file
    Init,
}
