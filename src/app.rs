//! Per-invocation application context shared by all commands.

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;

pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
    /// JSON output requested; commands print machine payloads only.
    pub robot_mode: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &cwd)?;
        Ok(Self::with_config(config, cli.output_format()))
    }

    /// Context over an already-loaded config.
    #[must_use]
    pub fn with_config(config: Config, output_format: OutputFormat) -> Self {
        Self {
            config,
            output_format,
            robot_mode: output_format.is_machine_readable(),
        }
    }
}
