use std::{fs, path::Path};

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, fix::fix},
    exit_status::ExitStatus,
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Main entry point for the tdlint CLI.
///
/// Dispatches to the appropriate command handler based on the parsed
/// arguments.
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Fix(cmd)) => fix(cmd),
        Some(Command::Init) => {
            init()?;
            println!("Created {}", CONFIG_FILE_NAME);
            Ok(ExitStatus::Success)
        }
        None => unreachable!("with_command_or_help returned Some without a command"),
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
