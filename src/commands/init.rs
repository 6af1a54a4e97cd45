use std::fs;
use std::path::Path;

use crate::EXIT_SUCCESS;
use crate::cli::InitArgs;
use crate::config::LOCAL_CONFIG_NAME;
use crate::error::{Result, SheetStatsError};

/// Main entry point for the init command.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or
/// cannot be written.
pub fn run_init(args: &InitArgs) -> Result<i32> {
    let path = Path::new(LOCAL_CONFIG_NAME);
    if path.exists() && !args.force {
        return Err(SheetStatsError::Config(format!(
            "Configuration file already exists: {LOCAL_CONFIG_NAME}. Use --force to overwrite."
        )));
    }

    fs::write(path, generate_config_template())?;

    println!("Created configuration file: {LOCAL_CONFIG_NAME}");
    Ok(EXIT_SUCCESS)
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# sheetstats configuration file

[breakdown]
# Share threshold (percent) under which properties merge into "other"
threshold = 2.0

[output]
# Default output format: "json" or "text"
format = "json"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
