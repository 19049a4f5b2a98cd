use super::storage::KeyValueStorage;
use crate::submission::remote::InitiativeRecord;
use crate::wizard::form::{FormPatch, FormSnapshot};
use crate::wizard::status::StatusCalculator;
use crate::wizard::steps::{SessionMode, StepNumber};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

pub const DEFAULT_DRAFT_KEY: &str = "initiative-draft";

/// Everything the wizard remembers between page loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WizardSession {
    pub current_step: StepNumber,
    pub form_data: FormSnapshot,
    pub completed_steps: BTreeSet<StepNumber>,
    pub has_started_navigation: bool,
    #[serde(skip)]
    pub is_submitting: bool,
    pub initiative_draft_id: Option<i64>,
}

/// Owns the [`WizardSession`] of one wizard run and mirrors it to storage.
///
/// Edit sessions never touch storage: they are rebuilt from the initiative
/// record on every load so a stale creation draft cannot leak into them.
pub struct DraftStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    mode: SessionMode,
    session: WizardSession,
    is_reset: bool,
}

impl DraftStore {
    /// Start or resume a creation draft.
    pub fn open_create(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let session = match load_session(storage.as_ref(), &key) {
            Ok(Some(session)) => {
                tracing::debug!(key = %key, step = %session.current_step, "restored draft");
                session
            }
            Ok(None) => WizardSession::default(),
            Err(error) => {
                tracing::warn!("discarding unreadable draft {key}: {error:#}");
                if let Err(error) = storage.remove(&key) {
                    tracing::warn!("failed clearing draft {key}: {error:#}");
                }
                WizardSession::default()
            }
        };

        Self {
            storage,
            key,
            mode: SessionMode::Create,
            session,
            is_reset: false,
        }
    }

    /// Start an edit session seeded from the stored initiative.
    pub fn open_edit(
        storage: Arc<dyn KeyValueStorage>,
        key: impl Into<String>,
        record: &InitiativeRecord,
    ) -> Self {
        Self {
            storage,
            key: key.into(),
            mode: SessionMode::Edit {
                initiative_id: record.id,
            },
            session: WizardSession {
                form_data: record.form.clone(),
                ..WizardSession::default()
            },
            is_reset: false,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn form(&self) -> &FormSnapshot {
        &self.session.form_data
    }

    pub fn current_step(&self) -> StepNumber {
        self.session.current_step
    }

    pub fn initiative_draft_id(&self) -> Option<i64> {
        self.session.initiative_draft_id
    }

    pub fn is_submitting(&self) -> bool {
        self.session.is_submitting
    }

    /// Status view over the current values.
    pub fn calculator(&self) -> StatusCalculator<'_> {
        StatusCalculator::new(
            &self.session.form_data,
            self.mode,
            self.session.has_started_navigation,
        )
    }

    pub fn update_form_data(&mut self, patch: FormPatch) {
        if patch.is_empty() {
            return;
        }
        patch.apply(&mut self.session.form_data);
        self.persist();
    }

    pub fn set_current_step(&mut self, step: StepNumber) {
        self.session.current_step = step;
        self.persist();
    }

    pub fn mark_step_as_completed(&mut self, step: StepNumber) {
        if self.session.completed_steps.insert(step) {
            self.persist();
        }
    }

    pub fn is_step_marked_completed(&self, step: StepNumber) -> bool {
        self.session.completed_steps.contains(&step)
    }

    /// Latch the navigation flag; it only clears on a reset.
    pub(crate) fn start_navigation(&mut self) {
        if !self.session.has_started_navigation {
            self.session.has_started_navigation = true;
            self.persist();
        }
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.session.is_submitting = submitting;
    }

    /// Remember the backend id of the partial save so later saves update it.
    pub fn set_initiative_draft_id(&mut self, id: Option<i64>) {
        self.session.initiative_draft_id = id;
        self.persist();
    }

    /// Back to an empty session. Raises the reset flag for form bindings.
    pub fn reset_form(&mut self) {
        self.session = WizardSession::default();
        self.is_reset = true;
        if !self.mode.is_edit() {
            self.purge();
        }
    }

    /// Like [`Self::reset_form`], but always removes the stored record.
    pub fn force_reset(&mut self) {
        self.session = WizardSession::default();
        self.is_reset = true;
        self.purge();
    }

    /// Returns whether a reset happened since the last call.
    pub fn take_reset_flag(&mut self) -> bool {
        std::mem::take(&mut self.is_reset)
    }

    fn persist(&self) {
        if self.mode.is_edit() {
            return;
        }
        let result = serde_json::to_string(&self.session)
            .context("failed serializing draft")
            .and_then(|payload| self.storage.set(&self.key, &payload));

        if let Err(error) = result {
            tracing::warn!("failed saving draft {}: {error:#}", self.key);
            self.purge();
        }
    }

    fn purge(&self) {
        if let Err(error) = self.storage.remove(&self.key) {
            tracing::warn!("failed clearing draft {}: {error:#}", self.key);
        }
    }
}

fn load_session(storage: &dyn KeyValueStorage, key: &str) -> Result<Option<WizardSession>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    let session =
        serde_json::from_str(&raw).with_context(|| format!("failed parsing draft {key}"))?;
    Ok(Some(session))
}
