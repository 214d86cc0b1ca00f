use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_from_user_type_matches_exact_values() {
    assert_eq!(Role::from_user_type("farmer"), Role::Farmer);
    assert_eq!(Role::from_user_type("buyer"), Role::Buyer);
}

#[test]
fn role_from_user_type_is_case_sensitive() {
    assert_eq!(Role::from_user_type("Farmer"), Role::Unknown);
    assert_eq!(Role::from_user_type(" buyer"), Role::Unknown);
}

#[test]
fn role_default_is_unknown() {
    assert_eq!(Role::default(), Role::Unknown);
    assert!(!Role::default().is_known());
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Farmer).unwrap(), "\"farmer\"");
    assert_eq!(serde_json::to_string(&Role::Unknown).unwrap(), "\"unknown\"");
}

// =============================================================
// SessionRecord parsing
// =============================================================

#[test]
fn record_parses_backend_user_object() {
    let raw = r#"{
        "uid": "u-1",
        "email": "asha@example.com",
        "fullName": "Asha Patel",
        "phone": "99999",
        "address": "Anand",
        "userType": "farmer",
        "isVerified": true
    }"#;
    let record: SessionRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.uid, "u-1");
    assert_eq!(record.full_name, "Asha Patel");
    assert_eq!(record.user_type, Role::Farmer);
    assert!(record.is_verified);
    assert!(record.extra.is_empty());
}

#[test]
fn record_keeps_unmodelled_fields() {
    let raw = r#"{"uid":"u-1","userType":"buyer","createdAt":"2025-01-01"}"#;
    let record: SessionRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.extra.get("createdAt"), Some(&Value::from("2025-01-01")));
    let back = serde_json::to_value(&record).unwrap();
    assert_eq!(back["createdAt"], "2025-01-01");
}

#[test]
fn record_missing_user_type_is_unknown_role() {
    let record: SessionRecord = serde_json::from_str(r#"{"uid":"u-1"}"#).unwrap();
    assert_eq!(record.user_type, Role::Unknown);
}

#[test]
fn record_non_string_user_type_is_unknown_role() {
    let record: SessionRecord = serde_json::from_str(r#"{"userType":42}"#).unwrap();
    assert_eq!(record.user_type, Role::Unknown);
    let record: SessionRecord = serde_json::from_str(r#"{"userType":null}"#).unwrap();
    assert_eq!(record.user_type, Role::Unknown);
}

#[test]
fn record_unrecognised_user_type_is_unknown_role() {
    let record: SessionRecord = serde_json::from_str(r#"{"userType":"admin"}"#).unwrap();
    assert_eq!(record.user_type, Role::Unknown);
}

#[test]
fn record_coerces_mistyped_profile_fields() {
    let raw = r#"{
        "uid": "u-1",
        "fullName": null,
        "email": 12,
        "phone": 9876543210,
        "address": ["not", "text"],
        "userType": "farmer",
        "isVerified": "true"
    }"#;
    let record: SessionRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.user_type, Role::Farmer);
    assert_eq!(record.full_name, "");
    assert_eq!(record.email, "12");
    assert_eq!(record.phone.as_deref(), Some("9876543210"));
    assert_eq!(record.address, None);
    assert!(record.is_verified);
}

#[test]
fn record_null_optional_fields_read_as_absent() {
    let record: SessionRecord = serde_json::from_str(r#"{"phone":null,"address":null,"isVerified":null}"#).unwrap();
    assert_eq!(record.phone, None);
    assert_eq!(record.address, None);
    assert!(!record.is_verified);
}

// =============================================================
// belongs_to / display_name
// =============================================================

#[test]
fn belongs_to_matches_uid() {
    let record = SessionRecord { uid: "u-1".to_owned(), ..SessionRecord::default() };
    assert!(record.belongs_to(&Subject::new("u-1")));
    assert!(!record.belongs_to(&Subject::new("u-2")));
}

#[test]
fn belongs_to_accepts_untagged_record() {
    let record = SessionRecord::default();
    assert!(record.belongs_to(&Subject::new("anyone")));
}

#[test]
fn display_name_prefers_full_name_then_email() {
    let mut record = SessionRecord {
        email: "a@b.com".to_owned(),
        full_name: "Asha".to_owned(),
        ..SessionRecord::default()
    };
    assert_eq!(record.display_name(), "Asha");
    record.full_name = "  ".to_owned();
    assert_eq!(record.display_name(), "a@b.com");
    record.email.clear();
    assert_eq!(record.display_name(), "Guest");
}
