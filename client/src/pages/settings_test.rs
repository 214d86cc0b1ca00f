use gate::Role;

use super::*;

#[test]
fn record_fills_the_profile() {
    let record = SessionRecord {
        uid: "u-1".to_owned(),
        email: "asha@farm.test".to_owned(),
        full_name: "Asha Patel".to_owned(),
        phone: Some("98765".to_owned()),
        address: None,
        user_type: Role::Farmer,
        ..SessionRecord::default()
    };
    let profile = profile_from_record(&record);
    assert_eq!(profile.full_name, "Asha Patel");
    assert_eq!(profile.phone, "98765");
    assert_eq!(profile.address, "");
    assert_eq!(profile.user_type.as_deref(), Some("farmer"));
}

#[test]
fn unknown_role_leaves_account_type_blank() {
    let profile = profile_from_record(&SessionRecord::default());
    assert_eq!(profile.user_type, None);
}
