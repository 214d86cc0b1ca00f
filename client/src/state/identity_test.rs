use super::*;

fn issued(lifetime_secs: u32) -> Issued {
    Issued {
        credential: Credential { subject: Subject::new("u-1").with_email("f@farm.test"), id_token: "tok-1".to_owned() },
        lifetime_secs,
    }
}

#[test]
fn issued_from_grant_keeps_subject_token_and_lifetime() {
    let grant = TokenGrant {
        local_id: "u-9".to_owned(),
        email: None,
        id_token: "t".to_owned(),
        expires_in: Some("120".to_owned()),
    };
    let issued = Issued::from(grant);
    assert_eq!(issued.credential.subject, Subject::new("u-9"));
    assert_eq!(issued.credential.id_token, "t");
    assert_eq!(issued.lifetime_secs, 120);
}

#[test]
fn persisted_credential_expires_after_lifetime() {
    let saved = PersistedCredential::new(&issued(60), 1_000.0);
    assert!((saved.expires_at - 61_000.0).abs() < f64::EPSILON);
    assert_eq!(saved.remaining_ms(1_000.0), Some(60_000));
    assert_eq!(saved.remaining_ms(61_000.0), None);
    assert_eq!(saved.remaining_ms(90_000.0), None);
}

#[test]
fn persisted_credential_restores_credential() {
    let saved = PersistedCredential::new(&issued(60), 0.0);
    assert_eq!(saved.credential(), issued(60).credential);
}

#[test]
fn persisted_credential_json_is_camel_case() {
    let saved = PersistedCredential::new(&issued(1), 0.0);
    let json = serde_json::to_value(&saved).expect("json");
    assert_eq!(json["idToken"], "tok-1");
    assert_eq!(json["uid"], "u-1");
    assert!(json.get("expiresAt").is_some());
}

#[test]
fn remaining_is_none_for_nan_expiry() {
    let mut saved = PersistedCredential::new(&issued(1), 0.0);
    saved.expires_at = f64::NAN;
    assert_eq!(saved.remaining_ms(0.0), None);
}

#[test]
fn commit_and_sign_out_drive_subscribers() {
    let identity = BrowserIdentity::new(Arc::new(ClientConfig::default()));
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = identity.subscribe(move |s| sink.lock().expect("lock").push(s.map(|s| s.uid.clone())));

    identity.commit(issued(60));
    assert_eq!(identity.current_subject(), Some(Subject::new("u-1").with_email("f@farm.test")));
    identity.sign_out();
    assert_eq!(identity.current_subject(), None);
    assert_eq!(*seen.lock().expect("lock"), vec![Some("u-1".to_owned()), None]);
}

#[test]
fn id_token_is_issued_for_the_signed_in_subject_only() {
    let identity = BrowserIdentity::new(Arc::new(ClientConfig::default()));
    identity.commit(issued(60));
    let token = futures::executor::block_on(identity.id_token(&Subject::new("u-1")));
    assert_eq!(token, Ok("tok-1".to_owned()));
    let other = futures::executor::block_on(identity.id_token(&Subject::new("u-2")));
    assert_eq!(other, Err(IdentityError::NotSignedIn));
}
