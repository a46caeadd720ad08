//! Delivery of the formatted message: timestamped text file and clipboard.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::error::{AlertaError, Result};

/// File name for a message saved at `now`: `alerta_YYYYMMDD_HHMMSS.txt`.
#[must_use]
pub fn file_name_for(now: &DateTime<Local>) -> String {
    format!("alerta_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

/// Write `message` as raw UTF-8 into `dir`, named after `now`.
///
/// The caller keeps its copy of the message, so a failed save can simply be
/// retried.
pub fn save_message_at(dir: &Path, message: &str, now: &DateTime<Local>) -> Result<PathBuf> {
    let path = dir.join(file_name_for(now));
    match std::fs::write(&path, message) {
        Ok(()) => {
            info!(path = %path.display(), bytes = message.len(), "saved alert message");
            Ok(path)
        }
        Err(source) => {
            warn!(path = %path.display(), error = %source, "failed to save alert message");
            Err(AlertaError::Export { path, source })
        }
    }
}

pub fn save_message(dir: &Path, message: &str) -> Result<PathBuf> {
    save_message_at(dir, message, &Local::now())
}

/// Destination for the formatted message. Write-only.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;

    /// Copy `text` so it stays available after this process exits.
    ///
    /// Sinks whose content does not depend on a live owner keep the default.
    fn set_text_persistent(&mut self, text: &str) -> Result<()> {
        self.set_text(text)
    }
}

/// The system clipboard via `arboard`.
///
/// The handle is opened on first use and kept for the session; on X11 the
/// clipboard content lives only as long as its owner.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: None }
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|err| AlertaError::Clipboard(err.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| AlertaError::Clipboard("clipboard not initialized".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.handle()?
            .set_text(text.to_owned())
            .map_err(|err| AlertaError::Clipboard(err.to_string()))?;
        info!(bytes = text.len(), "copied alert message to clipboard");
        Ok(())
    }

    /// On Linux the selection dies with its owner, so this blocks until
    /// another client (usually a clipboard manager) takes it over.
    #[cfg(target_os = "linux")]
    fn set_text_persistent(&mut self, text: &str) -> Result<()> {
        use arboard::SetExtLinux;

        info!(bytes = text.len(), "copying alert message, waiting for clipboard handover");
        self.handle()?
            .set()
            .wait()
            .text(text.to_owned())
            .map_err(|err| AlertaError::Clipboard(err.to_string()))?;
        Ok(())
    }
}

/// In-memory clipboard that records every write.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub writes: Vec<String>,
    /// When set, every write fails with this message.
    pub fail_with: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if let Some(reason) = &self.fail_with {
            return Err(AlertaError::Clipboard(reason.clone()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
