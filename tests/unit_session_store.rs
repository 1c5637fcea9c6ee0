use chrono::{Duration, Utc};
use facultydir_session::{
    AuthenticatedPrincipal, DEFAULT_TTL_SECONDS, MemorySessionStore, SessionRecord, SessionStore,
    generate_token,
};

fn admin_principal() -> AuthenticatedPrincipal {
    AuthenticatedPrincipal {
        username: "amara.okafor".to_string(),
        display_name: "Amara Okafor".to_string(),
        role_name: "admin".to_string(),
    }
}

#[tokio::test]
async fn read_your_writes_within_a_token() {
    let store = MemorySessionStore::new();
    let token = generate_token();

    let mut record = SessionRecord::new(DEFAULT_TTL_SECONDS);
    record.user = Some(admin_principal());
    store.save(&token, &record).await.unwrap();

    let resolved = store.resolve(&token).await.expect("record should resolve");
    assert_eq!(resolved.user, Some(admin_principal()));

    // A later save under the same token wins.
    let mut updated = resolved;
    updated.user = None;
    store.save(&token, &updated).await.unwrap();

    let resolved = store.resolve(&token).await.expect("record should resolve");
    assert!(resolved.user.is_none());
}

#[tokio::test]
async fn destroy_then_resolve_is_none() {
    let store = MemorySessionStore::new();
    let token = generate_token();

    store
        .save(&token, &SessionRecord::new(DEFAULT_TTL_SECONDS))
        .await
        .unwrap();
    store.destroy(&token).await.unwrap();

    assert!(store.resolve(&token).await.is_none());
}

#[tokio::test]
async fn expired_record_resolves_to_none() {
    let store = MemorySessionStore::new();
    let token = generate_token();

    let mut record = SessionRecord::new(60);
    record.user = Some(admin_principal());
    record.expires_at = Utc::now() - Duration::minutes(5);
    store.save(&token, &record).await.unwrap();

    assert!(store.resolve(&token).await.is_none());
    // Eviction is permanent, not a one-off.
    assert!(store.resolve(&token).await.is_none());
}

#[test]
fn record_round_trips_through_json() {
    let mut record = SessionRecord::new(DEFAULT_TTL_SECONDS);
    record.user = Some(admin_principal());
    record.push_flash("error", "User not found");

    let json = serde_json::to_string(&record).unwrap();
    let decoded: SessionRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded.user, Some(admin_principal()));
    assert_eq!(
        decoded.flash.get("error"),
        Some(&vec!["User not found".to_string()])
    );
}

#[test]
fn stored_principal_missing_role_fails_closed() {
    // A record written with an unexpected principal shape must deny, not
    // crash: the missing role decodes as "" and can never match a gate.
    let json = r#"{
        "user": {"username": "amara.okafor", "display_name": "Amara Okafor"},
        "flash": {},
        "created_at": "2026-01-01T00:00:00Z",
        "expires_at": "2099-01-01T00:00:00Z"
    }"#;

    let record: SessionRecord = serde_json::from_str(json).unwrap();
    let principal = record.user.expect("principal should decode");

    assert_eq!(principal.role_name, "");
    assert_ne!(principal.role_name, "admin");
}
