//! Drives the submission modal from "user confirms the review step" to a
//! published initiative.
//!
//! Order of checks: form validity, then the linked GitHub account, then
//! profile completeness. Remote failures are folded into recoverable modal
//! states; nothing here aborts the session.

use super::notify::Notifier;
use super::profile::{ProfileCompletenessReport, ProfileService};
use super::remote::{InitiativeApi, InitiativeRecord, RemoteError};
use super::state::{DismissGesture, SubmissionEvent, SubmissionState};
use crate::draft::DraftStore;
use crate::error::SubmitError;
use crate::wizard::form::FormPatch;
use crate::wizard::navigator::Navigator;
use crate::wizard::steps::{SessionMode, StepNumber};
use crate::wizard::validation::{is_allowed_social_url, validate_form};
use crate::wizard::{SocialNetwork, fields::has_text};
use std::sync::Arc;
use std::time::Duration;

/// Visible delays of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTiming {
    /// Pause before snapping the user to the first invalid step.
    pub navigation_delay: Duration,
    /// How long the success screen stays before redirecting.
    pub success_redirect: Duration,
}

impl Default for SubmissionTiming {
    fn default() -> Self {
        Self {
            navigation_delay: Duration::from_millis(1500),
            success_redirect: Duration::from_millis(3000),
        }
    }
}

/// Result of trying to open the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preflight {
    /// The form was invalid; the user was moved to `step`.
    Redirected { step: StepNumber, message: String },
    Opened(SubmissionState),
}

/// Where to send the user once the initiative is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub initiative_id: i64,
}

pub struct SubmissionOrchestrator {
    api: Arc<dyn InitiativeApi>,
    profiles: Arc<dyn ProfileService>,
    notifier: Arc<dyn Notifier>,
    timing: SubmissionTiming,
    state: Option<SubmissionState>,
    profile_report: Option<ProfileCompletenessReport>,
    last_error: Option<RemoteError>,
    published: Option<InitiativeRecord>,
}

impl SubmissionOrchestrator {
    pub fn new(
        api: Arc<dyn InitiativeApi>,
        profiles: Arc<dyn ProfileService>,
        notifier: Arc<dyn Notifier>,
        timing: SubmissionTiming,
    ) -> Self {
        Self {
            api,
            profiles,
            notifier,
            timing,
            state: None,
            profile_report: None,
            last_error: None,
            published: None,
        }
    }

    /// Current modal state; `None` while the modal is closed.
    pub fn state(&self) -> Option<SubmissionState> {
        self.state
    }

    pub fn profile_report(&self) -> Option<&ProfileCompletenessReport> {
        self.profile_report.as_ref()
    }

    pub fn last_error(&self) -> Option<&RemoteError> {
        self.last_error.as_ref()
    }

    pub fn published(&self) -> Option<&InitiativeRecord> {
        self.published.as_ref()
    }

    /// Entry point when the user confirms the final step.
    pub async fn open(&mut self, store: &mut DraftStore) -> Result<Preflight, SubmitError> {
        if self.state == Some(SubmissionState::Loading) || store.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }

        let report = validate_form(store.form(), store.mode());
        if let Some(step) = report.first_failing_step(store.mode()) {
            let message = report.describe_step(step);
            tracing::info!(%step, "submission blocked by invalid form");
            self.notifier.error(&message);
            pause(self.timing.navigation_delay).await;
            Navigator::new(store).go_to_step(i64::from(step.get()));
            return Ok(Preflight::Redirected { step, message });
        }

        let profile = self.profiles.current_profile().await.map_err(|error| {
            self.notifier.error("Could not load your profile. Please try again.");
            SubmitError::Profile(format!("{error:#}"))
        })?;
        let completeness = profile.completeness();
        let state =
            SubmissionState::after_preflight(!profile.has_github_link(), completeness.is_complete);
        self.profile_report = Some(completeness);
        self.last_error = None;
        self.state = Some(state);
        Ok(Preflight::Opened(state))
    }

    /// Skip the profile suggestion.
    pub fn continue_anyway(&mut self) -> Result<SubmissionState, SubmitError> {
        self.transition(SubmissionEvent::ContinueAnyway)
    }

    /// Leave the flow to complete the profile first.
    pub fn go_fix_profile(&mut self) -> Result<(), SubmitError> {
        match self.current()? {
            SubmissionState::ProfileSuggestion => {
                self.state = None;
                Ok(())
            }
            from => Err(SubmitError::InvalidTransition {
                from,
                event: SubmissionEvent::ContinueAnyway,
            }),
        }
    }

    /// Link a GitHub account from the `GithubRequired` screen.
    pub async fn supply_github_link(&mut self, url: &str) -> Result<SubmissionState, SubmitError> {
        let current = self.current()?;
        if current != SubmissionState::GithubRequired {
            return Err(SubmitError::InvalidTransition {
                from: current,
                event: SubmissionEvent::IdentityLinked {
                    profile_complete: false,
                },
            });
        }
        if !is_allowed_social_url(SocialNetwork::Github, url) {
            return Err(SubmitError::InvalidGithubLink(url.to_string()));
        }

        let profile = self
            .profiles
            .link_github(url.trim())
            .await
            .map_err(|error| SubmitError::Profile(format!("{error:#}")))?;
        if !profile.has_github_link() {
            return Ok(current);
        }

        let completeness = profile.completeness();
        let profile_complete = completeness.is_complete;
        self.profile_report = Some(completeness);
        self.transition(SubmissionEvent::IdentityLinked { profile_complete })
    }

    /// Send the form from the confirm screen.
    pub async fn confirm(&mut self, store: &mut DraftStore) -> Result<SubmissionState, SubmitError> {
        self.submit(store).await
    }

    /// Resend after a generic failure.
    pub async fn retry(&mut self, store: &mut DraftStore) -> Result<SubmissionState, SubmitError> {
        if self.current()? != SubmissionState::Error {
            return Err(SubmitError::InvalidTransition {
                from: self.current()?,
                event: SubmissionEvent::Submit,
            });
        }
        self.submit(store).await
    }

    pub fn cancel_error(&mut self) -> Result<SubmissionState, SubmitError> {
        self.transition(SubmissionEvent::CancelError)
    }

    /// Replace a duplicate title and resend immediately.
    pub async fn provide_title(
        &mut self,
        store: &mut DraftStore,
        title: &str,
    ) -> Result<SubmissionState, SubmitError> {
        let current = self.current()?;
        if current != SubmissionState::TitleRequired {
            return Err(SubmitError::InvalidTransition {
                from: current,
                event: SubmissionEvent::Submit,
            });
        }
        if !has_text(title) {
            return Err(SubmitError::TitleMissing);
        }

        store.update_form_data(FormPatch {
            title: Some(title.trim().to_string()),
            ..FormPatch::default()
        });
        self.submit(store).await
    }

    /// Close the modal if the gesture is allowed in the current state.
    ///
    /// Closing the success screen redirects straight away.
    pub fn dismiss(&mut self, gesture: DismissGesture) -> Result<Option<Redirect>, SubmitError> {
        let current = self.current()?;
        if !current.allows_dismiss(gesture) {
            return Err(SubmitError::DismissBlocked(current));
        }
        self.state = None;
        Ok(self.redirect_target(current))
    }

    /// Hold the success screen for the configured delay, then redirect.
    pub async fn wait_for_redirect(&mut self) -> Option<Redirect> {
        if self.state != Some(SubmissionState::Success) {
            return None;
        }
        pause(self.timing.success_redirect).await;
        // The user may have dismissed the modal meanwhile in a UI driver.
        if self.state != Some(SubmissionState::Success) {
            return None;
        }
        self.state = None;
        self.redirect_target(SubmissionState::Success)
    }

    async fn submit(&mut self, store: &mut DraftStore) -> Result<SubmissionState, SubmitError> {
        if store.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }
        let current = self.current()?;
        if current == SubmissionState::Loading {
            return Err(SubmitError::AlreadySubmitting);
        }
        self.state = Some(current.apply(SubmissionEvent::Submit)?);
        store.set_submitting(true);

        let form = store.form().clone();
        let result = match (store.mode(), store.initiative_draft_id()) {
            (SessionMode::Edit { initiative_id }, _) => self.api.update(initiative_id, &form).await,
            (SessionMode::Create, Some(draft_id)) => self.api.promote_draft(draft_id, &form).await,
            (SessionMode::Create, None) => self.api.create(&form).await,
        };
        store.set_submitting(false);

        match result {
            Ok(record) => {
                tracing::info!(id = record.id, mode = ?store.mode(), "initiative submitted");
                if store.mode().is_edit() {
                    store.set_initiative_draft_id(None);
                    store.force_reset();
                } else {
                    store.reset_form();
                }
                self.api.invalidate_listings();
                self.notifier.success(if record.is_draft {
                    "Your draft was saved."
                } else {
                    "Your initiative is live!"
                });
                self.published = Some(record);
                self.last_error = None;
                self.transition(SubmissionEvent::Succeeded)
            }
            Err(error) => {
                tracing::warn!("initiative submission failed: {error}");
                let kind = error.kind;
                if !error.is_duplicate_title() {
                    self.notifier.error(&error.message);
                }
                self.last_error = Some(error);
                self.transition(SubmissionEvent::Failed(kind))
            }
        }
    }

    fn current(&self) -> Result<SubmissionState, SubmitError> {
        self.state.ok_or(SubmitError::NotOpen)
    }

    fn transition(&mut self, event: SubmissionEvent) -> Result<SubmissionState, SubmitError> {
        let next = self.current()?.apply(event)?;
        self.state = Some(next);
        Ok(next)
    }

    fn redirect_target(&self, closed_from: SubmissionState) -> Option<Redirect> {
        if closed_from != SubmissionState::Success {
            return None;
        }
        self.published.as_ref().map(|record| Redirect {
            initiative_id: record.id,
        })
    }
}

/// Persist partial progress remotely and remember the draft id.
///
/// Edit sessions have no remote draft; they return `Ok(None)`.
pub async fn save_partial_draft(
    api: &dyn InitiativeApi,
    store: &mut DraftStore,
) -> Result<Option<i64>, RemoteError> {
    if store.mode().is_edit() {
        return Ok(None);
    }
    let record = api
        .save_draft(store.initiative_draft_id(), store.form())
        .await?;
    if store.initiative_draft_id() != Some(record.id) {
        tracing::debug!(id = record.id, "remote draft created");
        store.set_initiative_draft_id(Some(record.id));
    }
    Ok(Some(record.id))
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
