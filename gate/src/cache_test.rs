use super::*;

fn farmer_record() -> SessionRecord {
    SessionRecord {
        uid: "u-farmer".to_owned(),
        email: "asha@example.com".to_owned(),
        full_name: "Asha Patel".to_owned(),
        user_type: Role::Farmer,
        ..SessionRecord::default()
    }
}

// =============================================================
// parse_record
// =============================================================

#[test]
fn parse_record_rejects_invalid_json() {
    let err = parse_record("{not json").expect_err("should fail");
    assert!(matches!(err, CacheError::Malformed(_)));
}

#[test]
fn parse_record_rejects_non_object_json() {
    for raw in ["null", "\"farmer\"", "42", "[1,2]"] {
        let err = parse_record(raw).expect_err("should fail");
        assert!(matches!(err, CacheError::NotAnObject), "raw: {raw}");
    }
}

#[test]
fn parse_record_coerces_mistyped_field() {
    let record = parse_record(r#"{"uid": 7, "userType": "farmer"}"#).expect("record");
    assert_eq!(record.uid, "7");
    assert_eq!(record.user_type, Role::Farmer);
}

#[test]
fn mistyped_profile_fields_keep_the_cached_record() {
    for raw in [
        r#"{"uid":"u-1","userType":"farmer","phone":9876543210}"#,
        r#"{"uid":"u-1","userType":"farmer","fullName":null}"#,
    ] {
        let cache = MemoryCache::with_raw(raw);
        let read = cache.read().expect("record");
        assert_eq!(read.user_type, Role::Farmer, "raw: {raw}");
        assert_eq!(cache.role(), Role::Farmer, "raw: {raw}");
    }
}

// =============================================================
// parse_role never fails
// =============================================================

#[test]
fn parse_role_handles_garbage_as_unknown() {
    let garbage = ["", "{", "undefined", "null", "[]", "\"buyer\"", "{\"userType\":{}}", "\u{0}"];
    for raw in garbage {
        assert_eq!(parse_role(Some(raw)), Role::Unknown, "raw: {raw:?}");
    }
}

#[test]
fn parse_role_absent_entry_is_unknown() {
    assert_eq!(parse_role(None), Role::Unknown);
}

#[test]
fn parse_role_missing_field_is_unknown() {
    assert_eq!(parse_role(Some(r#"{"uid":"u-1"}"#)), Role::Unknown);
}

#[test]
fn parse_role_recovers_role_when_other_fields_are_bad() {
    assert_eq!(parse_role(Some(r#"{"uid": 7, "userType": "buyer"}"#)), Role::Buyer);
}

// =============================================================
// SessionCache provided methods over MemoryCache
// =============================================================

#[test]
fn memory_cache_starts_empty() {
    let cache = MemoryCache::new();
    assert!(cache.read().is_none());
    assert_eq!(cache.role(), Role::Unknown);
}

#[test]
fn write_then_read_round_trips_role_and_uid() {
    let cache = MemoryCache::new();
    cache.write(&farmer_record());
    let read = cache.read().expect("record");
    assert_eq!(read.uid, "u-farmer");
    assert_eq!(read.user_type, Role::Farmer);
    assert_eq!(cache.role(), Role::Farmer);
}

#[test]
fn write_overwrites_previous_record() {
    let cache = MemoryCache::new();
    cache.write(&farmer_record());
    cache.write(&SessionRecord { uid: "u-buyer".to_owned(), user_type: Role::Buyer, ..SessionRecord::default() });
    assert_eq!(cache.read().expect("record").uid, "u-buyer");
}

#[test]
fn malformed_entry_reads_as_none() {
    let cache = MemoryCache::with_raw("{\"userType\":");
    assert!(cache.read().is_none());
    assert_eq!(cache.role(), Role::Unknown);
}

#[test]
fn clear_removes_entry() {
    let cache = MemoryCache::new();
    cache.write(&farmer_record());
    cache.clear();
    assert!(cache.read_raw().is_none());
    assert!(cache.read().is_none());
}

#[test]
fn session_key_matches_backend_convention() {
    assert_eq!(SESSION_KEY, "user");
}
