//! Record store abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the use-case oriented storage contract for student records.
//! - Isolate container and id-assignment details from service orchestration.
//!
//! # Invariants
//! - Store writes validate the draft before mutation.
//! - Listing preserves insertion order.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod student_repo;
