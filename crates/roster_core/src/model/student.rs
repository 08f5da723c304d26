//! Student domain model.
//!
//! # Responsibility
//! - Define the canonical stored record and its field identifiers.
//! - Define the transient form draft edited before submission.
//!
//! # Invariants
//! - `id` is store-assigned and never reused for another record.
//! - A `StudentRecord` only exists for values that passed validation.
//! - A `StudentDraft` carries raw, unvalidated input.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier for a stored student record.
///
/// Assigned from a monotonically increasing counter owned by the store, so
/// two consecutive additions can never collide (unlike wall-clock ids).
pub type StudentId = u64;

/// Identifies one field of the student form.
///
/// Order is significant: reports and rendered forms iterate fields in this
/// declaration order, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentField {
    Name,
    Email,
    RollNumber,
    Course,
    Phone,
}

impl StudentField {
    /// All form fields in form layout order.
    pub const ALL: [StudentField; 5] = [
        StudentField::Name,
        StudentField::Email,
        StudentField::RollNumber,
        StudentField::Course,
        StudentField::Phone,
    ];

    /// Stable machine-readable key, also the serde wire name.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::RollNumber => "roll_number",
            Self::Course => "course",
            Self::Phone => "phone",
        }
    }

    /// Human-readable input label shown next to the field.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name *",
            Self::Email => "Email *",
            Self::RollNumber => "Roll Number *",
            Self::Course => "Course *",
            Self::Phone => "Phone Number *",
        }
    }

    /// Placeholder hint for an empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter student name",
            Self::Email => "Enter email address",
            Self::RollNumber => "Enter roll number",
            Self::Course => "Enter course name",
            Self::Phone => "Enter 10 digit phone number",
        }
    }

    /// Parses a machine-readable key back into a field.
    pub fn parse_key(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "roll_number" => Some(Self::RollNumber),
            "course" => Some(Self::Course),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }
}

impl Display for StudentField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Canonical stored student record.
///
/// Field values are kept exactly as entered; validation trims only for
/// checking, never for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Store-assigned unique id.
    pub id: StudentId,
    /// Non-empty display name.
    pub name: String,
    /// Address of `text@text.text` shape.
    pub email: String,
    /// Non-empty roll number.
    pub roll_number: String,
    /// Non-empty course name.
    pub course: String,
    /// Exactly 10 decimal digits.
    pub phone: String,
}

impl StudentRecord {
    /// Returns the stored value for one field.
    pub fn field(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.name,
            StudentField::Email => &self.email,
            StudentField::RollNumber => &self.roll_number,
            StudentField::Course => &self.course,
            StudentField::Phone => &self.phone,
        }
    }
}

/// In-progress form values before successful validation.
///
/// Transient by design: discarded on successful submit or navigation away,
/// never persisted and never logged (field values are personal data).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub roll_number: String,
    pub course: String,
    pub phone: String,
}

impl StudentDraft {
    /// Creates an all-empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces exactly one field value, leaving the others untouched.
    pub fn set(&mut self, field: StudentField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Returns the current value of one field.
    pub fn get(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.name,
            StudentField::Email => &self.email,
            StudentField::RollNumber => &self.roll_number,
            StudentField::Course => &self.course,
            StudentField::Phone => &self.phone,
        }
    }

    /// Resets every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns whether every field is still empty.
    pub fn is_empty(&self) -> bool {
        StudentField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    fn slot(&mut self, field: StudentField) -> &mut String {
        match field {
            StudentField::Name => &mut self.name,
            StudentField::Email => &mut self.email,
            StudentField::RollNumber => &mut self.roll_number,
            StudentField::Course => &mut self.course,
            StudentField::Phone => &mut self.phone,
        }
    }
}
