//! Command to validate a tablebook configuration file.

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use tablebook::config::{ConfigLoader, ConfigValidator, CONFIG_FILE_NAME};

/// Validate a configuration file.
#[derive(Args)]
pub struct ValidateConfigCommand {
    /// Configuration file to validate (default: config.yaml in the data directory)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config_path = match self.config_path {
            Some(path) => path,
            None => resolve_data_dir(global)?.join(CONFIG_FILE_NAME),
        };

        if !config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                config_path.display()
            )));
        }

        let config = match ConfigLoader::load_file(&config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        match ConfigValidator::validate(&config) {
            Ok(()) => {
                println!("Configuration is valid");
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
