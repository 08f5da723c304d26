//! Student list viewer.
//!
//! # Responsibility
//! - Project the current store contents into a renderable snapshot.
//! - Drive the two-step delete protocol (request, then confirm or decline).
//!
//! # Invariants
//! - The store is only mutated by a confirm that follows a request.
//! - Declining a request leaves the store unchanged.
//! - An empty store is a defined zero state, not an error.

use crate::model::student::{StudentId, StudentRecord};
use crate::repo::student_repo::StudentRepository;
use log::{debug, info};

/// Text shown when the store holds no records.
pub const EMPTY_STATE_TEXT: &str = "No students added yet.";

/// Read model for the student list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    /// Records in insertion order; empty means zero state.
    pub rows: Vec<StudentRecord>,
    /// Current record count, displayed as the list total.
    pub total: usize,
}

impl ListSnapshot {
    /// Returns whether the zero state should be rendered.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Controller for the student list screen.
///
/// Deletion is split into `request_delete` and `confirm_delete` so the core
/// never blocks on a confirmation dialog; the shell owns the prompt.
#[derive(Debug, Default)]
pub struct StudentListView {
    pending_delete: Option<StudentId>,
}

impl StudentListView {
    /// Creates a viewer with no pending confirmation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the current store contents.
    ///
    /// Idempotent between mutations: two snapshots without an intervening
    /// add or remove are equal.
    pub fn snapshot<R: StudentRepository>(&self, repo: &R) -> ListSnapshot {
        let rows = repo.list();
        let total = rows.len();
        ListSnapshot { rows, total }
    }

    /// Records a delete request awaiting confirmation.
    ///
    /// A newer request replaces any earlier unconfirmed one.
    pub fn request_delete(&mut self, id: StudentId) {
        debug!("event=delete_requested module=list status=pending id={id}");
        self.pending_delete = Some(id);
    }

    /// Id awaiting confirmation, if any.
    pub fn pending_delete(&self) -> Option<StudentId> {
        self.pending_delete
    }

    /// Applies the pending removal.
    ///
    /// # Contract
    /// - Returns the removed-request id, or `None` when nothing was pending.
    /// - Removal of an id that has since vanished falls through to the
    ///   store's no-op semantics.
    pub fn confirm_delete<R: StudentRepository>(&mut self, repo: &mut R) -> Option<StudentId> {
        let id = self.pending_delete.take()?;
        repo.remove(id);
        info!(
            "event=delete_confirmed module=list status=ok id={id} total={}",
            repo.count()
        );
        Some(id)
    }

    /// Drops the pending request without touching the store.
    pub fn decline_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            debug!("event=delete_declined module=list status=ok id={id}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StudentListView;
    use crate::model::student::StudentDraft;
    use crate::repo::student_repo::{MemoryStudentRepository, StudentRepository};

    fn seeded_repo() -> MemoryStudentRepository {
        let mut repo = MemoryStudentRepository::new();
        for name in ["a", "b"] {
            let draft = StudentDraft {
                name: name.to_string(),
                email: format!("{name}@school.edu"),
                roll_number: format!("R-{name}"),
                course: "CS".to_string(),
                phone: "1234567890".to_string(),
            };
            repo.add(&draft).unwrap();
        }
        repo
    }

    #[test]
    fn newer_request_replaces_pending_one() {
        let mut repo = seeded_repo();
        let mut view = StudentListView::new();

        view.request_delete(1);
        view.request_delete(2);
        assert_eq!(view.pending_delete(), Some(2));

        assert_eq!(view.confirm_delete(&mut repo), Some(2));
        assert_eq!(repo.count(), 1);
        assert!(repo.get(1).is_some());
    }

    #[test]
    fn confirm_without_request_is_a_no_op() {
        let mut repo = seeded_repo();
        let mut view = StudentListView::new();

        assert_eq!(view.confirm_delete(&mut repo), None);
        assert_eq!(repo.count(), 2);
    }
}
