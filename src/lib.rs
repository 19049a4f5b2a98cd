#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unnecessary_literal_bound,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod config;
pub mod draft;
pub mod error;
pub mod submission;
pub mod ui;
pub mod wizard;

pub use config::WizardConfig;
pub use draft::{DraftStore, FileStorage, KeyValueStorage, MemoryStorage};
pub use error::{ConfigError, SubmitError, WizardError};
pub use submission::{SubmissionOrchestrator, SubmissionState, SubmissionTiming};
pub use wizard::{FormPatch, FormSnapshot, Navigator, SessionMode, StatusCalculator, StepNumber};
