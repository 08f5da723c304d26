//! Domain model for student roster records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one record shape shared by the form, store and list projections.
//!
//! # Invariants
//! - Every stored record is identified by a store-assigned `StudentId`.
//! - Records are immutable once stored; there is no edit operation.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod student;
