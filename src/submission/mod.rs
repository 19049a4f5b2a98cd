pub mod notify;
pub mod orchestrator;
pub mod profile;
pub mod remote;
pub mod state;

pub use notify::{NoticeLevel, Notifier, TracingNotifier};
pub use orchestrator::{
    Preflight, Redirect, SubmissionOrchestrator, SubmissionTiming, save_partial_draft,
};
pub use profile::{ProfileCompletenessReport, ProfileService, UserProfile};
pub use remote::{InitiativeApi, InitiativeRecord, RemoteError, RemoteErrorKind};
pub use state::{DismissGesture, SubmissionEvent, SubmissionState};
