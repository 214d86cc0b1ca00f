use gate::{Role, SessionRecord, Subject};

use super::*;

fn signed_in(role: Role) -> SessionSnapshot {
    SessionSnapshot {
        version: 3,
        identity: IdentityState::Authenticated(Subject::new("u-1")),
        record: Some(SessionRecord { uid: "u-1".to_owned(), user_type: role, ..SessionRecord::default() }),
    }
}

#[test]
fn redirect_target_only_for_redirect_verdicts() {
    assert_eq!(redirect_target(Verdict::Redirect("/login")), Some("/login"));
    assert_eq!(redirect_target(Verdict::Pending), None);
    assert_eq!(redirect_target(Verdict::Render), None);
}

#[test]
fn forward_target_waits_for_identity() {
    assert_eq!(forward_target(&SessionSnapshot::default()), None);
}

#[test]
fn forward_target_sends_signed_out_visitors_to_login() {
    let snapshot = SessionSnapshot { identity: IdentityState::Unauthenticated, ..SessionSnapshot::default() };
    assert_eq!(forward_target(&snapshot), Some("/login"));
}

#[test]
fn forward_target_uses_role_landing() {
    assert_eq!(forward_target(&signed_in(Role::Farmer)), Some("/farmer/dashboard"));
    assert_eq!(forward_target(&signed_in(Role::Buyer)), Some("/buyer/dashboard"));
}

#[test]
fn forward_target_stays_while_role_unknown() {
    assert_eq!(forward_target(&signed_in(Role::Unknown)), None);
}

#[test]
fn role_unresolved_only_for_signed_in_subject_without_role() {
    assert!(role_unresolved(&signed_in(Role::Unknown)));
    let no_record = SessionSnapshot { record: None, ..signed_in(Role::Farmer) };
    assert!(role_unresolved(&no_record));
    assert!(!role_unresolved(&signed_in(Role::Buyer)));
    assert!(!role_unresolved(&SessionSnapshot::default()));
    let signed_out = SessionSnapshot { identity: IdentityState::Unauthenticated, ..SessionSnapshot::default() };
    assert!(!role_unresolved(&signed_out));
}

#[test]
fn replace_history_replaces() {
    assert!(replace_history().replace);
}
