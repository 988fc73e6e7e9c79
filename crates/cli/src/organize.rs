// organize: sheet in, categorized CSV out

use std::path::PathBuf;

use leetsheet_config::Settings;
use leetsheet_engine::{organize, summarize};
use tracing::info;

use crate::{CliError, OrganizeArgs};

pub fn cmd_organize(config: Option<PathBuf>, args: OrganizeArgs) -> Result<(), CliError> {
    let mut settings = Settings::load(config.as_deref()).map_err(CliError::config)?;

    if let Some(input) = args.input {
        settings.input = input;
    }
    if let Some(output) = args.output {
        settings.output = output;
    }
    if let Some(target) = args.target {
        settings.target = usize::try_from(target)
            .map_err(|_| CliError::general(format!("--target {} is too large", target)))?;
    }
    settings.validate().map_err(CliError::config)?;

    let records = leetsheet_io::load_records(&settings.input).map_err(CliError::io)?;
    let rows = organize(records, &settings.pipeline_options());
    leetsheet_io::write_export(&settings.output, &rows).map_err(|e| {
        let hint = format!("check that the folder for '{}' exists and is writable", settings.output.display());
        let err = CliError::io(e);
        if err.hint.is_none() { err.with_hint(hint) } else { err }
    })?;

    for (category, count) in summarize(&rows) {
        info!(category = %category, count, "category total");
    }

    println!(
        "Successfully organized {} problems into '{}'",
        rows.len(),
        settings.output.display()
    );
    Ok(())
}
