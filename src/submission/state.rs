use super::remote::RemoteErrorKind;
use crate::error::SubmitError;
use serde::Serialize;
use strum::Display;

/// States of the submission modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SubmissionState {
    Confirm,
    Loading,
    Success,
    Error,
    ProfileSuggestion,
    GithubRequired,
    TitleRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SubmissionEvent {
    /// Leave the profile suggestion without fixing the profile.
    ContinueAnyway,
    /// A GitHub account was linked.
    IdentityLinked { profile_complete: bool },
    /// Send the form: confirm, retry or resend with a new title.
    Submit,
    Succeeded,
    Failed(RemoteErrorKind),
    /// Back out of the error screen without retrying.
    CancelError,
}

/// How the user tried to close the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissGesture {
    /// Close button or explicit cancel.
    Explicit,
    /// Click outside, escape key and similar.
    Incidental,
}

impl SubmissionState {
    /// State the modal opens in once the form itself is valid.
    pub fn after_preflight(identity_link_missing: bool, profile_complete: bool) -> Self {
        if identity_link_missing {
            Self::GithubRequired
        } else if !profile_complete {
            Self::ProfileSuggestion
        } else {
            Self::Confirm
        }
    }

    pub fn apply(self, event: SubmissionEvent) -> Result<Self, SubmitError> {
        use SubmissionEvent as E;

        let next = match (self, event) {
            (Self::ProfileSuggestion, E::ContinueAnyway) => Self::Confirm,
            (Self::GithubRequired, E::IdentityLinked { profile_complete }) => {
                Self::after_preflight(false, profile_complete)
            }
            (Self::Confirm | Self::Error | Self::TitleRequired, E::Submit) => Self::Loading,
            (Self::Loading, E::Succeeded) => Self::Success,
            (Self::Loading, E::Failed(RemoteErrorKind::DuplicateTitle)) => Self::TitleRequired,
            (Self::Loading, E::Failed(_)) => Self::Error,
            (Self::Error, E::CancelError) => Self::Confirm,
            (from, event) => return Err(SubmitError::InvalidTransition { from, event }),
        };

        tracing::debug!(from = %self, to = %next, %event, "submission transition");
        Ok(next)
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Success
    }

    pub fn allows_dismiss(self, gesture: DismissGesture) -> bool {
        match gesture {
            DismissGesture::Explicit => self != Self::Loading,
            DismissGesture::Incidental => {
                !matches!(self, Self::Loading | Self::Success | Self::Error)
            }
        }
    }
}
