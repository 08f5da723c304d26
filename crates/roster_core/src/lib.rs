//! Core domain logic for the student roster.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::student::{StudentDraft, StudentField, StudentId, StudentRecord};
pub use repo::student_repo::{MemoryStudentRepository, StudentRepository};
pub use service::add_form::{AddStudentForm, FormState, SubmitOutcome};
pub use service::list_view::{ListSnapshot, StudentListView, EMPTY_STATE_TEXT};
pub use validate::{validate_draft, ValidationReport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
