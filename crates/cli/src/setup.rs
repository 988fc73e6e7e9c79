// setup: interactive .env completion

use std::io::{self, Write};
use std::path::PathBuf;

use leetsheet_config::{EnvFile, REQUIRED_KEYS};

use crate::CliError;

pub fn cmd_setup(env_file: PathBuf) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let write_err = |e: io::Error| CliError::general(e.to_string());

    writeln!(out, "Environment setup\n").map_err(write_err)?;
    if env_file.exists() {
        writeln!(out, "Found existing {}. Merging new values...\n", env_file.display()).map_err(write_err)?;
    }

    let mut env = EnvFile::load(&env_file).map_err(CliError::config)?;
    let outcome = env
        .prompt_missing(REQUIRED_KEYS, &mut input, &mut out)
        .map_err(CliError::config)?;
    env.save(&env_file).map_err(CliError::config)?;

    writeln!(out, "\nConfiguration saved to {}!", env_file.display()).map_err(write_err)?;
    writeln!(
        out,
        "{} added, {} already set",
        outcome.added.len(),
        outcome.already_set.len()
    )
    .map_err(write_err)?;
    if !outcome.left_empty.is_empty() {
        writeln!(out, "Still missing: {}", outcome.left_empty.join(", ")).map_err(write_err)?;
    }
    Ok(())
}
