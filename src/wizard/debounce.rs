//! Debounced sync of long-text fields into the draft.
//!
//! Growing text is held until the field has been quiet for the configured
//! delay. Shrinking text (a deletion) flushes immediately.

use super::form::{FormPatch, FormSnapshot, LongTextField};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Write this value to the draft now.
    Flush(String),
    /// Value held until the given instant.
    Scheduled(Instant),
    /// Value equals what the draft already has.
    Unchanged,
}

/// Sync state for a single text field.
#[derive(Debug, Clone)]
pub struct TextSync {
    delay: Duration,
    committed: String,
    pending: Option<(String, Instant)>,
}

impl TextSync {
    pub fn new(committed: impl Into<String>, delay: Duration) -> Self {
        Self {
            delay,
            committed: committed.into(),
            pending: None,
        }
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn input(&mut self, value: impl Into<String>, now: Instant) -> SyncAction {
        let value = value.into();
        if value == self.committed {
            self.pending = None;
            return SyncAction::Unchanged;
        }

        // Compare against what the user last typed, held or not.
        let latest = self
            .pending
            .as_ref()
            .map_or(&self.committed, |(held, _)| held);
        if value.chars().count() < latest.chars().count() {
            self.pending = None;
            self.committed.clone_from(&value);
            return SyncAction::Flush(value);
        }

        let due = now + self.delay;
        self.pending = Some((value, due));
        SyncAction::Scheduled(due)
    }

    /// Release the held value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self.pending.as_ref().map(|(_, due)| *due)?;
        if due <= now { self.flush() } else { None }
    }

    /// Release the held value regardless of the deadline.
    pub fn flush(&mut self) -> Option<String> {
        let (value, _) = self.pending.take()?;
        self.committed.clone_from(&value);
        Some(value)
    }

    /// Forget any held value and adopt `value` as the committed text.
    pub fn resync(&mut self, value: impl Into<String>) {
        self.pending = None;
        self.committed = value.into();
    }
}

/// One [`TextSync`] per long-text field, producing draft patches.
#[derive(Debug, Clone)]
pub struct TextSyncSet {
    fields: BTreeMap<LongTextField, TextSync>,
}

impl TextSyncSet {
    pub fn new(form: &FormSnapshot, delay: Duration) -> Self {
        let fields = LongTextField::ALL
            .into_iter()
            .map(|field| (field, TextSync::new(form.long_text(field), delay)))
            .collect();
        Self { fields }
    }

    /// Record an edit; returns a patch when the edit must be written now.
    pub fn edit(
        &mut self,
        field: LongTextField,
        value: impl Into<String>,
        now: Instant,
    ) -> Option<FormPatch> {
        let sync = self.fields.get_mut(&field)?;
        match sync.input(value, now) {
            SyncAction::Flush(value) => Some(FormPatch::long_text(field, value)),
            SyncAction::Scheduled(_) | SyncAction::Unchanged => None,
        }
    }

    pub fn poll(&mut self, now: Instant) -> Vec<FormPatch> {
        self.fields
            .iter_mut()
            .filter_map(|(field, sync)| sync.poll(now).map(|v| FormPatch::long_text(*field, v)))
            .collect()
    }

    pub fn flush_all(&mut self) -> Vec<FormPatch> {
        self.fields
            .iter_mut()
            .filter_map(|(field, sync)| sync.flush().map(|v| FormPatch::long_text(*field, v)))
            .collect()
    }

    pub fn has_pending(&self) -> bool {
        self.fields.values().any(TextSync::is_pending)
    }

    /// Drop held edits after the draft was reset or reloaded.
    pub fn resync(&mut self, form: &FormSnapshot) {
        for (field, sync) in &mut self.fields {
            sync.resync(form.long_text(*field));
        }
    }
}
