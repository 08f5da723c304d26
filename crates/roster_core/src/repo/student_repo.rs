//! Student record store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/remove/list APIs over the process-local record collection.
//! - Own unique id assignment.
//!
//! # Invariants
//! - `add` validates before mutating; invalid drafts never enter the store.
//! - Ids increase monotonically and are never reused by one store instance.
//! - `list` returns records in insertion order.
//! - Removing an absent id is a no-op, not an error.

use crate::model::student::{StudentDraft, StudentId, StudentRecord};
use crate::validate::{validate_draft, ValidationReport};
use log::debug;
use std::collections::BTreeMap;

/// Storage contract for student records.
///
/// The form controller and list viewer depend on this trait rather than on a
/// concrete container, keeping them storage-agnostic.
pub trait StudentRepository {
    /// Validates the draft, assigns a fresh unique id and stores the record.
    ///
    /// # Contract
    /// - Returns the stored record on success; the collection grows by one.
    /// - Returns the full per-field report when any rule fails; the
    ///   collection is untouched.
    /// - No duplicate or capacity checks exist.
    fn add(&mut self, draft: &StudentDraft) -> Result<StudentRecord, ValidationReport>;

    /// Removes the record with the given id, if present.
    ///
    /// Absent ids are a defined no-op.
    fn remove(&mut self, id: StudentId);

    /// Returns a snapshot of all records in insertion order.
    fn list(&self) -> Vec<StudentRecord>;

    /// Returns one record by id.
    fn get(&self, id: StudentId) -> Option<StudentRecord>;

    /// Number of records currently stored.
    fn count(&self) -> usize;
}

/// Process-local in-memory store.
///
/// Records live in an ordered map keyed by the monotonic id counter, so key
/// order and insertion order coincide and removal by id stays direct.
#[derive(Debug, Default)]
pub struct MemoryStudentRepository {
    records: BTreeMap<StudentId, StudentRecord>,
    next_id: StudentId,
}

impl MemoryStudentRepository {
    /// Creates an empty store; the first assigned id is 1.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl StudentRepository for MemoryStudentRepository {
    fn add(&mut self, draft: &StudentDraft) -> Result<StudentRecord, ValidationReport> {
        let report = validate_draft(draft);
        if !report.is_valid() {
            return Err(report);
        }

        let id = self.next_id;
        self.next_id += 1;

        // Stored values stay exactly as entered; validation trims only for
        // checking.
        let record = StudentRecord {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            roll_number: draft.roll_number.clone(),
            course: draft.course.clone(),
            phone: draft.phone.clone(),
        };
        self.records.insert(id, record.clone());

        debug!(
            "event=record_added module=repo status=ok id={id} total={}",
            self.records.len()
        );
        Ok(record)
    }

    fn remove(&mut self, id: StudentId) {
        match self.records.remove(&id) {
            Some(_) => debug!(
                "event=record_removed module=repo status=ok id={id} total={}",
                self.records.len()
            ),
            None => debug!("event=record_removed module=repo status=noop id={id}"),
        }
    }

    fn list(&self) -> Vec<StudentRecord> {
        self.records.values().cloned().collect()
    }

    fn get(&self, id: StudentId) -> Option<StudentRecord> {
        self.records.get(&id).cloned()
    }

    fn count(&self) -> usize {
        self.records.len()
    }
}
