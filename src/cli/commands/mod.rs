//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod classify;
pub mod completions;
pub mod compose;
pub mod wizard;

/// Dispatch a command to its handler. No subcommand runs the wizard.
pub fn run(ctx: &AppContext, command: Option<&Commands>) -> Result<()> {
    match command {
        None => wizard::run(ctx, &wizard::WizardArgs::default()),
        Some(Commands::Wizard(args)) => wizard::run(ctx, args),
        Some(Commands::Classify(args)) => classify::run(ctx, args),
        Some(Commands::Compose(args)) => compose::run(ctx, args),
        Some(Commands::Completions(args)) => completions::run(args),
    }
}
