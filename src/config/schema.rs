use crate::draft::DEFAULT_DRAFT_KEY;
use crate::error::{self, ConfigError};
use crate::submission::{RemoteError, SubmissionTiming};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

pub const DEFAULT_DUPLICATE_TITLE_MARKER: &str = "An initiative with this title already exists";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    /// Directory holding draft files. Relative paths resolve against the
    /// config directory.
    pub storage_dir: PathBuf,
    pub draft_key: String,
    pub text_debounce_ms: u64,
    pub navigation_delay_ms: u64,
    pub success_redirect_ms: u64,
    /// Exact backend message that signals a title collision.
    pub duplicate_title_marker: String,
    pub log_level: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            storage_dir: PathBuf::from("drafts"),
            draft_key: DEFAULT_DRAFT_KEY.to_string(),
            text_debounce_ms: 300,
            navigation_delay_ms: 1500,
            success_redirect_ms: 3000,
            duplicate_title_marker: DEFAULT_DUPLICATE_TITLE_MARKER.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl WizardConfig {
    pub fn text_debounce(&self) -> Duration {
        Duration::from_millis(self.text_debounce_ms)
    }

    pub fn timing(&self) -> SubmissionTiming {
        SubmissionTiming {
            navigation_delay: Duration::from_millis(self.navigation_delay_ms),
            success_redirect: Duration::from_millis(self.success_redirect_ms),
        }
    }

    /// Classify a message-only backend failure with the configured marker.
    pub fn remote_error(&self, message: impl Into<String>) -> RemoteError {
        RemoteError::from_message(message, &self.duplicate_title_marker)
    }

    /// Tracing level; falls back to `INFO` for unparseable values.
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    /// Draft directory with relative paths anchored next to config.toml.
    pub fn resolved_storage_dir(&self) -> PathBuf {
        if self.storage_dir.is_absolute() {
            return self.storage_dir.clone();
        }
        self.config_path
            .parent()
            .map_or_else(|| self.storage_dir.clone(), |dir| dir.join(&self.storage_dir))
    }

    /// Switch to another draft, rejecting keys that cannot name a draft file.
    pub fn with_draft_key(mut self, key: impl Into<String>) -> error::Result<Self> {
        self.draft_key = key.into();
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.draft_key.is_empty()
            || !self
                .draft_key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::Validation(format!(
                "draft_key must be non-empty and use only letters, digits, '-' or '_': {:?}",
                self.draft_key
            )));
        }
        if self.text_debounce_ms == 0 || self.text_debounce_ms > 10_000 {
            return Err(ConfigError::Validation(format!(
                "text_debounce_ms must be within 1..=10000, got {}",
                self.text_debounce_ms
            )));
        }
        if self.duplicate_title_marker.trim().is_empty() {
            return Err(ConfigError::Validation(
                "duplicate_title_marker must not be empty".into(),
            ));
        }
        if self.log_level.parse::<Level>().is_err() {
            return Err(ConfigError::Validation(format!(
                "unknown log_level {:?}",
                self.log_level
            )));
        }
        Ok(())
    }
}
