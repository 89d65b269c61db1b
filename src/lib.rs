//! tdlint - WordPress i18n text domain checker
//!
//! tdlint is a CLI tool and library for validating that translation-marking
//! calls (`__`, `_x`, `_n`, `_nx`) in JavaScript/TypeScript projects carry a
//! well-formed, allowed text domain as their trailing argument, with safe
//! autofixes for the unambiguous cases.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `rule`: The stateless text domain validation rule and its fixes
//! - `collector`: AST adapter reducing swc call expressions to plain records
//! - `check`: Per-file analysis combining parser, collector and rule
//! - `fixer`: Applies generated fixes to source files
//! - `reporter`: Diagnostic rendering

pub mod check;
pub mod cli;
pub mod collector;
pub mod config;
pub mod context;
pub mod fixer;
pub mod issue;
pub mod parser;
pub mod reporter;
pub mod rule;
pub mod scanner;
