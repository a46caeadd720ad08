//! alerta compose - Format an alert from flags instead of the wizard.
//!
//! Field values go through the same wizard state machine, so required
//! fields and normalization behave exactly as in the interactive flow.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tracing::warn;

use crate::alert::{Alert, AlertReport};
use crate::app::AppContext;
use crate::cli::commands::classify::push_classification;
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::error::Result;
use crate::export::{ClipboardSink, SystemClipboard, save_message};
use crate::wizard::WizardState;

#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Alert identifier
    #[arg(long)]
    pub id: String,

    /// Alert description (may contain newlines)
    #[arg(long, short = 'd')]
    pub description: String,

    /// Dynatrace link; omitted means the step is skipped
    #[arg(long, short = 'l')]
    pub link: Option<String>,

    /// Save the message to alerta_<timestamp>.txt
    #[arg(long)]
    pub save: bool,

    /// Copy the message to the system clipboard. On Linux this waits until
    /// another application (e.g. a clipboard manager) takes the content over.
    #[arg(long)]
    pub copy: bool,

    /// Directory for --save (default: config output.directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct ComposeOutput {
    #[serde(flatten)]
    pub report: AlertReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<PathBuf>,
    pub copied: bool,
    /// Why `--copy` did not reach the clipboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_error: Option<String>,
}

pub fn run(ctx: &AppContext, args: &ComposeArgs) -> Result<()> {
    let report = compose_report(args)?;
    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| ctx.config.output.directory.clone());
    let output = deliver(args, &out_dir, report, &mut SystemClipboard::new())?;

    if ctx.robot_mode {
        return emit_json(&output);
    }
    emit_human(render(&output, HumanLayout::for_format(ctx.output_format)));
    Ok(())
}

/// Run the flag values through the wizard and build the report.
pub fn compose_report(args: &ComposeArgs) -> Result<AlertReport> {
    let mut wizard = WizardState::for_alert();
    wizard.submit(&args.id)?;
    wizard.submit(&args.description)?;
    match &args.link {
        Some(link) => wizard.submit(link)?,
        None => wizard.skip(),
    };
    Ok(Alert::from_values(wizard.values()).report())
}

/// Save and copy as requested.
///
/// A save failure is fatal since nothing was delivered yet. A copy failure
/// is only reported, so the message and any saved path still reach the
/// operator.
fn deliver<C: ClipboardSink>(
    args: &ComposeArgs,
    out_dir: &Path,
    report: AlertReport,
    clipboard: &mut C,
) -> Result<ComposeOutput> {
    let saved_to = if args.save {
        Some(save_message(out_dir, &report.message)?)
    } else {
        None
    };

    let mut output = ComposeOutput {
        report,
        saved_to,
        copied: false,
        copy_error: None,
    };

    if args.copy {
        match clipboard.set_text_persistent(&output.report.message) {
            Ok(()) => output.copied = true,
            Err(err) => {
                warn!(error = %err, "copy failed; message still printed");
                output.copy_error = Some(err.to_string());
            }
        }
    }
    Ok(output)
}

fn render(output: &ComposeOutput, mut layout: HumanLayout) -> HumanLayout {
    layout.title("Mensagem pronta");
    for line in output.report.message.lines() {
        layout.push_line(line);
    }
    layout.blank();
    push_classification(&mut layout, &output.report.classification);
    if output.saved_to.is_some() || output.copied || output.copy_error.is_some() {
        layout.blank();
    }
    if let Some(path) = &output.saved_to {
        layout.kv("Arquivo salvo", &path.display().to_string());
    }
    if output.copied {
        layout.kv("Clipboard", "mensagem copiada");
    } else if let Some(err) = &output.copy_error {
        layout.kv("Clipboard", &format!("falha ao copiar: {err}"));
    }
    layout
}
