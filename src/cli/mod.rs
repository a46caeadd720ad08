//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// Alerta - Format monitoring alerts and suggest the owning team
#[derive(Parser, Debug)]
#[command(name = "alerta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, plain)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/alerta/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run; the interactive wizard when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Effective output format.
    ///
    /// `--output-format` wins over `--machine`; the default is human.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if let Some(fmt) = self.output_format {
            return fmt;
        }
        if self.machine {
            return OutputFormat::Json;
        }
        OutputFormat::Human
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect an alert step by step in the terminal (TUI)
    Wizard(commands::wizard::WizardArgs),

    /// Suggest the owning team for a description and link
    Classify(commands::classify::ClassifyArgs),

    /// Format an alert from flags, optionally saving and copying it
    Compose(commands::compose::ComposeArgs),

    /// Print shell completions
    Completions(commands::completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["alerta"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output_format(), OutputFormat::Human);
    }

    #[test]
    fn machine_flag_selects_json() {
        let cli = Cli::try_parse_from(["alerta", "-m", "classify", "--description", "x"]).unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn explicit_format_beats_machine_flag() {
        let cli = Cli::try_parse_from([
            "alerta",
            "--machine",
            "--output-format",
            "plain",
            "classify",
            "--description",
            "x",
        ])
        .unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Plain);
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["alerta", "-vv", "wizard"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::Wizard(_))));
    }
}
