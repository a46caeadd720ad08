//! alerta classify - Suggest the owning team without running the wizard.

use clap::Args;

use crate::app::AppContext;
use crate::classifier::{ClassificationResult, suggest_team};
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Alert description text
    #[arg(long, short = 'd')]
    pub description: String,

    /// Dynatrace link
    #[arg(long, short = 'l', default_value = "")]
    pub link: String,
}

pub fn run(ctx: &AppContext, args: &ClassifyArgs) -> Result<()> {
    let result = suggest_team(&args.description, &args.link);

    if ctx.robot_mode {
        return emit_json(&result);
    }

    let mut layout = HumanLayout::for_format(ctx.output_format);
    push_classification(&mut layout, &result);
    emit_human(layout);
    Ok(())
}

/// Append the suggested team and every matched reason.
pub(crate) fn push_classification(layout: &mut HumanLayout, result: &ClassificationResult) {
    layout.section("Sugestão de time").kv("Time", &result.team);
    if result.has_suggestion() {
        layout.blank().push_line("Regras que casaram:");
        for reason in &result.reasons {
            layout.bullet(reason);
        }
    }
}
