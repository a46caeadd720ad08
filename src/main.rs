//! alerta - Alert formatter
//!
//! Collects an alert step by step, formats the message and suggests the
//! team that should handle it.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use alerta::Result;
use alerta::app::AppContext;
use alerta::cli::{Cli, Commands};
use alerta::cli::output::ErrorResponse;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.output_format().is_machine_readable() {
                let payload = ErrorResponse::from(&e);
                println!("{}", serde_json::to_string(&payload).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(Commands::Completions(args)) = &cli.command {
        return alerta::cli::commands::completions::run(args);
    }
    let ctx = AppContext::from_cli(cli)?;
    alerta::cli::commands::run(&ctx, cli.command.as_ref())
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    // Log lines written under the TUI's alternate screen corrupt the display.
    let interactive = matches!(cli.command, None | Some(Commands::Wizard(_)));
    let filter = match cli.verbose {
        0 if interactive => "warn",
        0 => "warn,alerta=info",
        1 => "info,alerta=debug",
        2 => "debug,alerta=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.output_format().is_machine_readable() {
        // JSON logging for machine mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
