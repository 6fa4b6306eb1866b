//! Config command implementation.
//!
//! The `laya config` command shows the loaded configuration section with
//! secrets masked.

use std::path::{Path, PathBuf};

use crate::bootstrap::{mask_dsn, Bootstrap, MASK};
use crate::cli::args::ConfigArgs;
use crate::config::AppConfig;
use crate::environment::EnvironmentSettings;
use crate::error::{LayaError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand<'a> {
    settings: &'a EnvironmentSettings,
    env: String,
    config_file: Option<PathBuf>,
    args: ConfigArgs,
}

impl<'a> ConfigCommand<'a> {
    /// Create a new config command for an environment section.
    pub fn new(settings: &'a EnvironmentSettings, env: &str, args: ConfigArgs) -> Self {
        Self {
            settings,
            env: env.to_string(),
            config_file: None,
            args,
        }
    }

    /// Read this file instead of the discovered one.
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    fn bootstrap(&self) -> Bootstrap<'a> {
        let bootstrap = Bootstrap::new(self.settings).with_env(&self.env);
        match &self.config_file {
            Some(path) => bootstrap.with_config_file(path.clone()),
            None => bootstrap,
        }
    }
}

impl Command for ConfigCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let bootstrap = self.bootstrap();
        let paths = bootstrap.config_paths()?;

        let config = match bootstrap.load_config() {
            Ok(c) => c,
            Err(LayaError::ConfigNotFound { path }) => {
                ui.error(&format!("No configuration found at {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };
        let config = masked(config);

        if ui.output_mode().shows_status() && !self.args.json {
            ui.message(&format!("# {} ({})", paths.file.display(), bootstrap.env()));
            ui.message("");
        }

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| LayaError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let yaml = serde_yaml::to_string(&config).map_err(|e| LayaError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}

/// Replace secrets with a fixed mask.
fn masked(mut config: AppConfig) -> AppConfig {
    config.database.dsn = mask_dsn(&config.database.dsn);
    if !config.cache.pwd.is_empty() {
        config.cache.pwd = MASK.to_string();
    }
    config
}
