//! Form draft validation rules.
//!
//! # Responsibility
//! - Map a candidate draft to a per-field error report, pure and side-effect
//!   free.
//! - Own the message texts surfaced next to form inputs.
//!
//! # Invariants
//! - All rules run on every call; failures are reported together.
//! - At most one message per field: the presence check short-circuits the
//!   format check.
//! - Presence checks trim whitespace; stored values stay untrimmed.
//! - The phone format check runs on the raw value: records store values as
//!   entered, so a padded phone must fail instead of entering the store.

use crate::model::student::{StudentDraft, StudentField};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));

pub const MSG_NAME_REQUIRED: &str = "Name is required";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_INVALID: &str = "Email is invalid";
pub const MSG_ROLL_NUMBER_REQUIRED: &str = "Roll Number is required";
pub const MSG_COURSE_REQUIRED: &str = "Course is required";
pub const MSG_PHONE_REQUIRED: &str = "Phone is required";
pub const MSG_PHONE_FORMAT: &str = "Phone must be 10 digits";

/// Per-field validation error report.
///
/// Empty report means the draft is valid. Iteration order follows
/// `StudentField` declaration order, matching form layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    messages: BTreeMap<StudentField, String>,
}

impl ValidationReport {
    /// Returns whether no rule failed.
    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the message recorded for one field, if any.
    pub fn message(&self, field: StudentField) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns whether the report carries no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (StudentField, &str)> {
        self.messages
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    fn record(&mut self, field: StudentField, message: &str) {
        self.messages.insert(field, message.to_string());
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            return f.write_str("valid");
        }
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Validates a draft against every field rule.
///
/// # Contract
/// - Returns an empty report exactly when the draft may become a record.
/// - Never mutates the draft and never logs field values.
pub fn validate_draft(draft: &StudentDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    if draft.name.trim().is_empty() {
        report.record(StudentField::Name, MSG_NAME_REQUIRED);
    }

    if draft.email.trim().is_empty() {
        report.record(StudentField::Email, MSG_EMAIL_REQUIRED);
    } else if !EMAIL_RE.is_match(draft.email.trim()) {
        report.record(StudentField::Email, MSG_EMAIL_INVALID);
    }

    if draft.roll_number.trim().is_empty() {
        report.record(StudentField::RollNumber, MSG_ROLL_NUMBER_REQUIRED);
    }

    if draft.course.trim().is_empty() {
        report.record(StudentField::Course, MSG_COURSE_REQUIRED);
    }

    if draft.phone.trim().is_empty() {
        report.record(StudentField::Phone, MSG_PHONE_REQUIRED);
    } else if !PHONE_RE.is_match(&draft.phone) {
        // Raw value, not trimmed: stored phones must be exactly 10 digits,
        // so padding has to fail here rather than slip into the store.
        report.record(StudentField::Phone, MSG_PHONE_FORMAT);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::{
        validate_draft, MSG_COURSE_REQUIRED, MSG_EMAIL_INVALID, MSG_EMAIL_REQUIRED,
        MSG_NAME_REQUIRED, MSG_PHONE_FORMAT, MSG_PHONE_REQUIRED, MSG_ROLL_NUMBER_REQUIRED,
    };
    use crate::model::student::{StudentDraft, StudentField};

    fn complete_draft() -> StudentDraft {
        StudentDraft {
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            roll_number: "R1".to_string(),
            course: "CS".to_string(),
            phone: "1234567890".to_string(),
        }
    }

    #[test]
    fn complete_draft_is_valid() {
        let report = validate_draft(&complete_draft());
        assert!(report.is_valid());
        assert_eq!(report.len(), 0);
    }

    #[test]
    fn empty_draft_reports_every_presence_rule() {
        let report = validate_draft(&StudentDraft::new());

        assert_eq!(report.len(), 5);
        assert_eq!(report.message(StudentField::Name), Some(MSG_NAME_REQUIRED));
        assert_eq!(
            report.message(StudentField::Email),
            Some(MSG_EMAIL_REQUIRED)
        );
        assert_eq!(
            report.message(StudentField::RollNumber),
            Some(MSG_ROLL_NUMBER_REQUIRED)
        );
        assert_eq!(
            report.message(StudentField::Course),
            Some(MSG_COURSE_REQUIRED)
        );
        assert_eq!(
            report.message(StudentField::Phone),
            Some(MSG_PHONE_REQUIRED)
        );
    }

    #[test]
    fn whitespace_only_values_fail_presence_checks() {
        let mut draft = complete_draft();
        draft.set(StudentField::Name, "   ");
        draft.set(StudentField::Course, "\t");

        let report = validate_draft(&draft);
        assert_eq!(report.message(StudentField::Name), Some(MSG_NAME_REQUIRED));
        assert_eq!(
            report.message(StudentField::Course),
            Some(MSG_COURSE_REQUIRED)
        );
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn malformed_email_reports_invalid_not_required() {
        let mut draft = complete_draft();
        draft.set(StudentField::Email, "bad");

        let report = validate_draft(&draft);
        assert_eq!(report.message(StudentField::Email), Some(MSG_EMAIL_INVALID));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn email_shape_requires_at_sign_and_dot_with_no_spaces() {
        let accepted = ["a@b.com", "first.last@school.edu", "x@y.z"];
        let rejected = ["a@b", "a b@c.d", "@b.com", "a@.com", "a@b."];

        for value in accepted {
            let mut draft = complete_draft();
            draft.set(StudentField::Email, value);
            assert!(
                validate_draft(&draft).is_valid(),
                "expected `{value}` to pass"
            );
        }
        for value in rejected {
            let mut draft = complete_draft();
            draft.set(StudentField::Email, value);
            assert_eq!(
                validate_draft(&draft).message(StudentField::Email),
                Some(MSG_EMAIL_INVALID),
                "expected `{value}` to fail"
            );
        }
    }

    #[test]
    fn padded_phone_is_rejected_not_trimmed_into_validity() {
        for value in [" 1234567890 ", " 1234567890", "1234567890 ", "1234567890\t"] {
            let mut draft = complete_draft();
            draft.set(StudentField::Phone, value);
            let report = validate_draft(&draft);
            assert_eq!(
                report.message(StudentField::Phone),
                Some(MSG_PHONE_FORMAT),
                "expected `{value}` to fail"
            );
        }
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() {
        for value in ["12", "123456789", "12345678901", "12345abcde", "123 456789"] {
            let mut draft = complete_draft();
            draft.set(StudentField::Phone, value);
            assert_eq!(
                validate_draft(&draft).message(StudentField::Phone),
                Some(MSG_PHONE_FORMAT),
                "expected `{value}` to fail"
            );
        }

        let mut draft = complete_draft();
        draft.set(StudentField::Phone, "0123456789");
        assert!(validate_draft(&draft).is_valid());
    }

    #[test]
    fn failures_are_independent_and_reported_together() {
        let draft = StudentDraft {
            name: String::new(),
            email: "bad".to_string(),
            roll_number: String::new(),
            course: String::new(),
            phone: "12".to_string(),
        };

        let report = validate_draft(&draft);
        assert_eq!(report.len(), 5);
        assert_eq!(report.message(StudentField::Name), Some(MSG_NAME_REQUIRED));
        assert_eq!(report.message(StudentField::Email), Some(MSG_EMAIL_INVALID));
        assert_eq!(
            report.message(StudentField::RollNumber),
            Some(MSG_ROLL_NUMBER_REQUIRED)
        );
        assert_eq!(
            report.message(StudentField::Course),
            Some(MSG_COURSE_REQUIRED)
        );
        assert_eq!(report.message(StudentField::Phone), Some(MSG_PHONE_FORMAT));
    }

    #[test]
    fn report_display_lists_fields_in_form_order() {
        let report = validate_draft(&StudentDraft::new());
        let rendered = report.to_string();
        let name_pos = rendered.find("name:").unwrap();
        let phone_pos = rendered.find("phone:").unwrap();
        assert!(name_pos < phone_pos);
    }
}
