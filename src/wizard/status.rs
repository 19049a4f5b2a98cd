use super::fields::{FieldId, is_field_complete, social_networks_complete};
use super::form::FormSnapshot;
use super::steps::{SessionMode, StepDefinition, StepNumber};
use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StepStatus {
    /// Navigation has not started yet; nothing is flagged.
    Neutral,
    /// Required fields are still missing.
    Pending,
    /// Only optional fields remain unfilled.
    Optional,
    Completed,
}

/// `completed` of `total` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepCount {
    pub completed: usize,
    pub total: usize,
}

impl StepCount {
    pub fn is_ready(self) -> bool {
        self.completed == self.total
    }

    pub fn percent(self) -> u8 {
        percent(self.completed, self.total)
    }
}

/// Classifies steps against live form values.
///
/// Always recomputed from the snapshot; nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct StatusCalculator<'a> {
    form: &'a FormSnapshot,
    mode: SessionMode,
    has_started_navigation: bool,
}

impl<'a> StatusCalculator<'a> {
    pub fn new(form: &'a FormSnapshot, mode: SessionMode, has_started_navigation: bool) -> Self {
        Self {
            form,
            mode,
            has_started_navigation,
        }
    }

    pub fn definition(&self, step: StepNumber) -> StepDefinition {
        StepDefinition::for_step(step, self.mode)
    }

    pub fn is_field_complete(&self, field: FieldId) -> bool {
        is_field_complete(field, self.form)
    }

    /// Status shown to the user. `Neutral` until the wizard has left step 1.
    pub fn step_status(&self, step: StepNumber) -> StepStatus {
        if !self.has_started_navigation {
            return StepStatus::Neutral;
        }
        self.classify(step)
    }

    /// Status derived purely from form values, ignoring the neutral phase.
    pub fn classify(&self, step: StepNumber) -> StepStatus {
        if step == StepNumber::REVIEW {
            return if self.core_steps_satisfied() {
                StepStatus::Completed
            } else {
                StepStatus::Pending
            };
        }

        if step == StepNumber::NETWORKS && social_networks_complete(self.form) {
            return StepStatus::Completed;
        }

        let definition = self.definition(step);
        if definition.has_required_fields() {
            if definition.required.iter().all(|f| self.is_field_complete(*f)) {
                StepStatus::Completed
            } else {
                StepStatus::Pending
            }
        } else if definition.optional.iter().all(|f| self.is_field_complete(*f)) {
            StepStatus::Completed
        } else {
            StepStatus::Optional
        }
    }

    /// True when nothing required is missing on `step` in the current mode.
    ///
    /// This is the forward-navigation gate. A step with only optional fields
    /// (4, 5, and 3 when editing) always passes, filled or not; `Optional`
    /// counts as filled here, only `Pending` blocks.
    pub fn has_required_fields_filled(&self, step: StepNumber) -> bool {
        self.classify(step) != StepStatus::Pending
    }

    /// Whether a core step counts as done for aggregation.
    ///
    /// `Completed` always counts. `Optional` counts only for a core step with
    /// no required fields in this mode, which is the team step when editing:
    /// it is satisfied even with every optional field left empty. A core step
    /// that still has required fields needs `Completed`.
    pub fn is_step_satisfied(&self, step: StepNumber) -> bool {
        match self.classify(step) {
            StepStatus::Completed => true,
            StepStatus::Optional => !self.definition(step).has_required_fields(),
            StepStatus::Pending | StepStatus::Neutral => false,
        }
    }

    fn core_steps_satisfied(&self) -> bool {
        StepNumber::CORE.iter().all(|s| self.is_step_satisfied(*s))
    }

    /// Share of individually complete fields, independent of the status.
    pub fn step_progress(&self, step: StepNumber) -> u8 {
        if step == StepNumber::REVIEW {
            let done = StepNumber::CORE
                .iter()
                .filter(|s| self.is_step_satisfied(**s))
                .count();
            return percent(done, StepNumber::CORE.len());
        }

        let definition = self.definition(step);
        let done = definition
            .fields()
            .filter(|f| self.is_field_complete(*f))
            .count();
        percent(done, definition.field_count())
    }

    /// Steps counted on the progress bar.
    ///
    /// Networks and progress are optional and the review step follows the
    /// core trio, so finishing the trio jumps straight to 6 of 6.
    pub fn completed_steps_count(&self) -> StepCount {
        let completed = StepNumber::CORE
            .iter()
            .filter(|s| self.is_step_satisfied(**s))
            .count();
        let completed = if completed == StepNumber::CORE.len() {
            StepNumber::COUNT
        } else {
            completed
        };
        StepCount {
            completed,
            total: StepNumber::COUNT,
        }
    }

    pub fn overall_progress(&self) -> u8 {
        self.completed_steps_count().percent()
    }

    /// Progress over the mandatory steps only; gates the submit button.
    pub fn required_steps_progress(&self) -> StepCount {
        let required: &[StepNumber] = if self.mode.is_edit() {
            &StepNumber::CORE_EDIT
        } else {
            &StepNumber::CORE
        };
        StepCount {
            completed: required
                .iter()
                .filter(|s| self.classify(**s) == StepStatus::Completed)
                .count(),
            total: required.len(),
        }
    }
}

fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    // done <= total, so the quotient is at most 100.
    #[allow(clippy::cast_possible_truncation)]
    let value = (done * 100 / total) as u8;
    value
}
