use crate::submission::remote::RemoteError;
use crate::submission::state::{SubmissionEvent, SubmissionState};
use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for the wizard engine.
///
/// Library callers and the CLI dispatcher match on these to pick a recovery
/// path; helpers that only need context chains use `anyhow::Result` and land
/// in `Other`.
#[derive(Debug, Error)]
pub enum WizardError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Remote initiative API ───────────────────────────────────────────
    #[error("remote: {0}")]
    Remote(#[from] RemoteError),

    // ── Submission flow ─────────────────────────────────────────────────
    #[error("submission: {0}")]
    Submit(#[from] SubmitError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Submission errors ──────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("cannot apply {event} while in {from}")]
    InvalidTransition {
        from: SubmissionState,
        event: SubmissionEvent,
    },

    #[error("a submission is already in flight")]
    AlreadySubmitting,

    #[error("the submission dialog is not open")]
    NotOpen,

    #[error("the dialog cannot be closed while in {0}")]
    DismissBlocked(SubmissionState),

    #[error("not a GitHub profile URL: {0}")]
    InvalidGithubLink(String),

    #[error("a new title is required")]
    TitleMissing,

    #[error("profile service: {0}")]
    Profile(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, WizardError>;
