use std::sync::Mutex;

use futures::executor::block_on;

use super::*;

fn credential(uid: &str, token: &str) -> Credential {
    Credential { subject: Subject::new(uid).with_email(format!("{uid}@example.com")), id_token: token.to_owned() }
}

fn recorder(identity: &LocalIdentity) -> (Arc<Mutex<Vec<Option<String>>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_cb = Arc::clone(&seen);
    let sub = identity.subscribe(move |subject| {
        seen_cb.lock().unwrap().push(subject.map(|s| s.uid.clone()));
    });
    (seen, sub)
}

// =============================================================
// IdentityState
// =============================================================

#[test]
fn identity_state_defaults_to_unknown() {
    assert_eq!(IdentityState::default(), IdentityState::Unknown);
    assert!(!IdentityState::default().is_resolved());
}

#[test]
fn identity_state_from_event() {
    let subject = Subject::new("u-1");
    assert_eq!(IdentityState::from_event(Some(&subject)), IdentityState::Authenticated(subject.clone()));
    assert_eq!(IdentityState::from_event(None), IdentityState::Unauthenticated);
    assert_eq!(IdentityState::Authenticated(subject.clone()).subject(), Some(&subject));
    assert_eq!(IdentityState::Unauthenticated.subject(), None);
}

// =============================================================
// LocalIdentity notification semantics
// =============================================================

#[test]
fn subscribe_before_resolution_gets_no_immediate_event() {
    let identity = LocalIdentity::new();
    let (seen, _sub) = recorder(&identity);
    assert!(seen.lock().unwrap().is_empty());
    assert!(!identity.is_resolved());
}

#[test]
fn subscribe_after_resolution_replays_current_state() {
    let identity = LocalIdentity::new();
    identity.commit(credential("u-1", "t-1"));
    let (seen, _sub) = recorder(&identity);
    assert_eq!(*seen.lock().unwrap(), vec![Some("u-1".to_owned())]);
}

#[test]
fn commit_and_sign_out_notify_in_order() {
    let identity = LocalIdentity::new();
    let (seen, _sub) = recorder(&identity);
    identity.commit(credential("u-1", "t-1"));
    identity.sign_out();
    assert_eq!(*seen.lock().unwrap(), vec![Some("u-1".to_owned()), None]);
    assert!(identity.current_subject().is_none());
}

#[test]
fn each_subscriber_is_notified_independently() {
    let identity = LocalIdentity::new();
    let (a, _sa) = recorder(&identity);
    let (b, _sb) = recorder(&identity);
    identity.sign_out();
    assert_eq!(a.lock().unwrap().len(), 1);
    assert_eq!(b.lock().unwrap().len(), 1);
}

#[test]
fn unsubscribed_listener_receives_nothing() {
    let identity = LocalIdentity::new();
    let (seen, sub) = recorder(&identity);
    sub.unsubscribe();
    sub.unsubscribe();
    identity.commit(credential("u-1", "t-1"));
    assert!(seen.lock().unwrap().is_empty());
}

// =============================================================
// revoke_token / id_token
// =============================================================

#[test]
fn revoke_token_only_revokes_active_token() {
    let identity = LocalIdentity::new();
    identity.commit(credential("u-1", "old"));
    identity.commit(credential("u-1", "new"));
    assert!(!identity.revoke_token("old"));
    assert!(identity.current_subject().is_some());
    assert!(identity.revoke_token("new"));
    assert!(identity.current_subject().is_none());
}

#[test]
fn id_token_for_signed_in_subject() {
    let identity = LocalIdentity::new();
    identity.commit(credential("u-1", "t-1"));
    let token = block_on(identity.id_token(&Subject::new("u-1"))).unwrap();
    assert_eq!(token, "t-1");
}

#[test]
fn id_token_for_other_subject_is_rejected() {
    let identity = LocalIdentity::new();
    identity.commit(credential("u-1", "t-1"));
    let err = block_on(identity.id_token(&Subject::new("u-2"))).unwrap_err();
    assert_eq!(err, IdentityError::NotSignedIn);
}

#[test]
fn id_token_when_signed_out_is_rejected() {
    let identity = LocalIdentity::new();
    let err = block_on(identity.id_token(&Subject::new("u-1"))).unwrap_err();
    assert_eq!(err, IdentityError::NotSignedIn);
}
