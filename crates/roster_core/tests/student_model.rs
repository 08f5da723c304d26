use roster_core::{StudentDraft, StudentField, StudentRecord};

#[test]
fn new_draft_starts_empty_in_every_field() {
    let draft = StudentDraft::new();

    assert!(draft.is_empty());
    for field in StudentField::ALL {
        assert_eq!(draft.get(field), "");
    }
}

#[test]
fn set_updates_one_field_and_leaves_others_untouched() {
    let mut draft = StudentDraft::new();
    draft.set(StudentField::Name, "Ann");
    draft.set(StudentField::Phone, "1234567890");

    assert_eq!(draft.get(StudentField::Name), "Ann");
    assert_eq!(draft.get(StudentField::Phone), "1234567890");
    assert_eq!(draft.get(StudentField::Email), "");
    assert_eq!(draft.get(StudentField::RollNumber), "");
    assert_eq!(draft.get(StudentField::Course), "");
}

#[test]
fn record_serialization_uses_expected_wire_fields() {
    let record = StudentRecord {
        id: 7,
        name: "Ann".to_string(),
        email: "a@b.com".to_string(),
        roll_number: "R1".to_string(),
        course: "CS".to_string(),
        phone: "1234567890".to_string(),
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "Ann");
    assert_eq!(json["email"], "a@b.com");
    assert_eq!(json["roll_number"], "R1");
    assert_eq!(json["course"], "CS");
    assert_eq!(json["phone"], "1234567890");

    let decoded: StudentRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn field_labels_match_the_form_chrome() {
    assert_eq!(StudentField::Name.label(), "Full Name *");
    assert_eq!(StudentField::Phone.placeholder(), "Enter 10 digit phone number");
    assert_eq!(StudentField::RollNumber.key(), "roll_number");
}

#[test]
fn record_field_accessor_matches_struct_fields() {
    let record = StudentRecord {
        id: 1,
        name: "Ann".to_string(),
        email: "a@b.com".to_string(),
        roll_number: "R1".to_string(),
        course: "CS".to_string(),
        phone: "1234567890".to_string(),
    };

    for field in StudentField::ALL {
        assert!(!record.field(field).is_empty());
    }
    assert_eq!(record.field(StudentField::Course), "CS");
}
