//! @acp:module "Configuration"
//! @acp:summary "Output settings and their defaults"
//! @acp:domain cli
//! @acp:layer config

use std::path::{Path, PathBuf};

/// Width of the `=` rule under the plain-text header
pub const DEFAULT_RULE_WIDTH: usize = 50;

/// @acp:summary "Output settings shared by all views"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Plain-text export file, overwritten on every save
    pub export_path: PathBuf,

    /// Command shown in the footer usage hint
    pub command_hint: String,

    /// Width of the plain-text header rule
    pub rule_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_path: default_export_path(),
            command_hint: default_command_hint(),
            rule_width: DEFAULT_RULE_WIDTH,
        }
    }
}

impl Config {
    /// Use a different export file
    pub fn with_export_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.export_path = path.as_ref().to_path_buf();
        self
    }

    /// File name of the export, for user-facing messages
    pub fn export_name(&self) -> String {
        self.export_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.export_path.display().to_string())
    }
}

fn default_export_path() -> PathBuf {
    PathBuf::from("resume.txt")
}

fn default_command_hint() -> String {
    "resume".to_string()
}
