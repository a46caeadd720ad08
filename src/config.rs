use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AlertaError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

impl Config {
    /// Load layered config.
    ///
    /// With an explicit path (argument or `ALERTA_CONFIG`) only that file is
    /// read and it must exist. Otherwise the global file and then the
    /// project file under `project_root` are merged when present.
    /// Environment overrides apply last in both cases.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env_string("ALERTA_CONFIG").map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                AlertaError::MissingConfig(format!("config file {} not found", path.display()))
            })?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("alerta/config.toml"))
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join(".alerta/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| AlertaError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| AlertaError::Config(format!("parse config {}: {err}", path.display())))?;
        debug!(path = %path.display(), "loaded config layer");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
        if let Some(patch) = patch.clipboard {
            self.clipboard.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(value) = env_string("ALERTA_OUTPUT_DIR") {
            self.output.directory = PathBuf::from(value);
        }
        if let Some(value) = env_bool("ALERTA_CLIPBOARD_ENABLED") {
            self.clipboard.enabled = value;
        }
        if let Some(value) = env_bool("ALERTA_COPY_ON_FINISH") {
            self.clipboard.copy_on_finish = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives `alerta_<timestamp>.txt` files.
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.directory {
            self.directory = value;
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Copy the message as soon as the wizard completes.
    #[serde(default = "default_true")]
    pub copy_on_finish: bool,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            copy_on_finish: true,
        }
    }
}

impl ClipboardConfig {
    fn merge(&mut self, patch: ClipboardPatch) {
        if let Some(value) = patch.enabled {
            self.enabled = value;
        }
        if let Some(value) = patch.copy_on_finish {
            self.copy_on_finish = value;
        }
    }

    /// Whether completion should trigger an automatic copy.
    #[must_use]
    pub const fn auto_copy(&self) -> bool {
        self.enabled && self.copy_on_finish
    }
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub output: Option<OutputPatch>,
    pub clipboard: Option<ClipboardPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ClipboardPatch {
    pub enabled: Option<bool>,
    pub copy_on_finish: Option<bool>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|value| {
        matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}
