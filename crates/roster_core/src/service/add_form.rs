//! Add-student form controller.
//!
//! # Responsibility
//! - Own the in-progress draft and its per-field error report.
//! - Run validation on submit and forward valid drafts to the store.
//!
//! # Invariants
//! - Field edits never run validation.
//! - A record is created only from a draft whose report is empty.
//! - A successful submit clears the draft; the same draft instance is never
//!   submitted twice.
//! - Navigation is signalled through the returned outcome, never performed
//!   here.

use crate::model::student::{StudentDraft, StudentField, StudentRecord};
use crate::repo::student_repo::StudentRepository;
use crate::validate::ValidationReport;
use log::{debug, info};

/// Lifecycle state of one draft instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    /// Draft is being edited; submit and cancel are available.
    #[default]
    Editing,
    /// Draft was stored; terminal until `reset` starts a fresh draft.
    Submitted,
}

/// Result of a submit attempt, interpreted by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft was stored. The shell should navigate to the student list.
    Saved(StudentRecord),
    /// Validation failed; messages are available via `errors()` and must be
    /// surfaced next to their fields.
    Invalid,
    /// The draft was already stored; nothing happened. `errors()` stays
    /// empty, so this is never rendered as a validation failure. Call
    /// `reset` to start a new draft.
    AlreadySubmitted,
}

/// Controller for the add-student screen.
#[derive(Debug, Default)]
pub struct AddStudentForm {
    draft: StudentDraft,
    errors: ValidationReport,
    state: FormState,
}

impl AddStudentForm {
    /// Creates a controller with an empty draft in `Editing` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Current value of one draft field.
    pub fn field(&self, field: StudentField) -> &str {
        self.draft.get(field)
    }

    /// Error report from the last submit attempt.
    pub fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    /// Updates exactly one field of the draft.
    ///
    /// # Contract
    /// - `Editing -> Editing`; other fields are untouched.
    /// - Does not re-run validation; stale messages stay until next submit.
    /// - Ignored after a successful submit; call `reset` first.
    pub fn set_field(&mut self, field: StudentField, value: impl Into<String>) {
        if self.state == FormState::Submitted {
            debug!("event=field_edit module=form status=ignored reason=submitted field={field}");
            return;
        }
        self.draft.set(field, value);
    }

    /// Attempts to submit the current draft.
    ///
    /// # Contract
    /// - Invalid draft: stays `Editing`, stores the report, adds nothing.
    /// - Valid draft: stores the record, clears the draft, transitions to
    ///   `Submitted` and returns `Saved` so the shell navigates to the list.
    /// - Already-submitted draft: no-op, returns `AlreadySubmitted`;
    ///   `Invalid` is only ever paired with a non-empty report.
    pub fn submit<R: StudentRepository>(&mut self, repo: &mut R) -> SubmitOutcome {
        if self.state == FormState::Submitted {
            debug!("event=form_submit module=form status=ignored reason=submitted");
            return SubmitOutcome::AlreadySubmitted;
        }

        match repo.add(&self.draft) {
            Ok(record) => {
                self.draft.clear();
                self.errors = ValidationReport::default();
                self.state = FormState::Submitted;
                info!(
                    "event=form_submit module=form status=ok id={} total={}",
                    record.id,
                    repo.count()
                );
                SubmitOutcome::Saved(record)
            }
            Err(report) => {
                debug!(
                    "event=form_submit module=form status=invalid fields={}",
                    report.len()
                );
                self.errors = report;
                SubmitOutcome::Invalid
            }
        }
    }

    /// Discards the draft without validation or mutation.
    ///
    /// The shell navigates to the student list afterwards.
    pub fn cancel(&mut self) {
        debug!("event=form_cancel module=form status=ok");
        self.reset();
    }

    /// Starts a fresh empty draft in `Editing` state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{AddStudentForm, FormState, SubmitOutcome};
    use crate::model::student::StudentField;
    use crate::repo::student_repo::{MemoryStudentRepository, StudentRepository};

    #[test]
    fn edits_after_submit_are_ignored_until_reset() {
        let mut repo = MemoryStudentRepository::new();
        let mut form = AddStudentForm::new();
        form.set_field(StudentField::Name, "Ann");
        form.set_field(StudentField::Email, "a@b.com");
        form.set_field(StudentField::RollNumber, "R1");
        form.set_field(StudentField::Course, "CS");
        form.set_field(StudentField::Phone, "1234567890");

        assert!(matches!(form.submit(&mut repo), SubmitOutcome::Saved(_)));
        assert_eq!(form.state(), FormState::Submitted);

        form.set_field(StudentField::Name, "ignored");
        assert_eq!(form.field(StudentField::Name), "");

        form.reset();
        assert_eq!(form.state(), FormState::Editing);
        form.set_field(StudentField::Name, "Ben");
        assert_eq!(form.field(StudentField::Name), "Ben");
    }
}
