use super::steps::StepNumber;
use crate::draft::DraftStore;

/// Step movement over a [`DraftStore`].
///
/// Forward moves are gated on the live classification of the step being
/// left, never on a cached status.
pub struct Navigator<'a> {
    store: &'a mut DraftStore,
}

impl<'a> Navigator<'a> {
    pub fn new(store: &'a mut DraftStore) -> Self {
        Self { store }
    }

    pub fn current_step(&self) -> StepNumber {
        self.store.current_step()
    }

    pub fn can_go_to_previous_step(&self) -> bool {
        !self.current_step().is_first()
    }

    pub fn can_go_to_next_step(&self) -> bool {
        let current = self.current_step();
        !current.is_last() && self.store.calculator().has_required_fields_filled(current)
    }

    /// Move forward when allowed. On the last step only marks it completed.
    pub fn go_to_next_step(&mut self) -> bool {
        let current = self.current_step();
        if current.is_last() {
            self.store.mark_step_as_completed(current);
            return false;
        }
        if !self.can_go_to_next_step() {
            tracing::debug!(step = %current, "forward navigation blocked");
            return false;
        }

        self.store.mark_step_as_completed(current);
        self.move_to(current.next());
        true
    }

    pub fn go_to_previous_step(&mut self) -> bool {
        if !self.can_go_to_previous_step() {
            return false;
        }
        let target = self.current_step().previous();
        self.move_to(target);
        true
    }

    /// Unconditional jump, clamped into the wizard.
    pub fn go_to_step(&mut self, step: i64) -> StepNumber {
        let target = StepNumber::clamped(step);
        self.move_to(target);
        target
    }

    fn move_to(&mut self, target: StepNumber) {
        let current = self.current_step();
        if current == target {
            return;
        }
        if current.is_first() {
            self.store.start_navigation();
        }
        tracing::debug!(from = %current, to = %target, "step change");
        self.store.set_current_step(target);
    }
}
