//! alerta wizard - Collect an alert interactively.

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::tui::{WizardTuiOptions, run_wizard_tui};

#[derive(Args, Debug, Default)]
pub struct WizardArgs {
    /// Directory for saved messages (default: config output.directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Do not copy the message automatically when the wizard completes
    #[arg(long)]
    pub no_copy: bool,
}

pub fn run(ctx: &AppContext, args: &WizardArgs) -> Result<()> {
    run_wizard_tui(options(ctx, args))
}

fn options(ctx: &AppContext, args: &WizardArgs) -> WizardTuiOptions {
    let clipboard = &ctx.config.clipboard;
    WizardTuiOptions {
        output_dir: args
            .out_dir
            .clone()
            .unwrap_or_else(|| ctx.config.output.directory.clone()),
        clipboard_enabled: clipboard.enabled,
        auto_copy: clipboard.auto_copy() && !args.no_copy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::config::Config;

    #[test]
    fn flags_override_config() {
        let ctx = AppContext::with_config(Config::default(), OutputFormat::Human);
        let args = WizardArgs {
            out_dir: Some(PathBuf::from("/tmp/alertas")),
            no_copy: true,
        };
        let opts = options(&ctx, &args);
        assert_eq!(opts.output_dir, PathBuf::from("/tmp/alertas"));
        assert!(opts.clipboard_enabled);
        assert!(!opts.auto_copy);
    }

    #[test]
    fn defaults_come_from_config() {
        let mut config = Config::default();
        config.output.directory = PathBuf::from("saida");
        config.clipboard.copy_on_finish = false;
        let ctx = AppContext::with_config(config, OutputFormat::Human);

        let opts = options(&ctx, &WizardArgs::default());
        assert_eq!(opts.output_dir, PathBuf::from("saida"));
        assert!(!opts.auto_copy);
    }
}
