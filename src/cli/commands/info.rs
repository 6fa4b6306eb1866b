//! Info command implementation.
//!
//! The `laya info` command shows the resolved runtime environment.

use crate::environment::{EnvironmentSettings, UNKNOWN_IP};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The info command implementation.
pub struct InfoCommand<'a> {
    settings: &'a EnvironmentSettings,
}

impl<'a> InfoCommand<'a> {
    /// Create a new info command.
    pub fn new(settings: &'a EnvironmentSettings) -> Self {
        Self { settings }
    }
}

impl Command for InfoCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = self.settings;

        // Root path first: a fatal detection error must surface before output
        let root = settings.root_path()?.to_path_buf();
        let root_source = settings.root_path_source().map(|s| s.to_string());
        let run_mode_source = settings.run_mode_source().to_string();

        ui.show_header("Environment");
        ui.show_field("App name", &settings.app_name(), None);
        ui.show_field("Run mode", &settings.run_mode(), Some(&run_mode_source));
        ui.show_field(
            "Root path",
            &root.display().to_string(),
            root_source.as_deref(),
        );
        ui.show_field(
            "Config root",
            &settings.conf_root_path()?.display().to_string(),
            None,
        );
        ui.show_field(
            "Data root",
            &settings.data_root_path()?.display().to_string(),
            None,
        );
        ui.show_field(
            "Log root",
            &settings.log_root_path()?.display().to_string(),
            None,
        );
        ui.show_field("Local IP", settings.local_ip(), None);
        if settings.local_ip() == UNKNOWN_IP {
            ui.warning("No usable IPv4 address found on any interface");
        }
        ui.show_field("PID", settings.pid_string(), None);

        Ok(CommandResult::success())
    }
}
