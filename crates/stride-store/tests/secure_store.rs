//! End-to-end scenarios for `SecureStore` over the in-memory backend.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use stride_crypto::DeviceFingerprint;
use stride_store::{MemoryBackend, SecureStore, StorageBackend, SECURE_KEY_PREFIX};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct AuthToken {
    token: String,
}

fn make_store() -> SecureStore<MemoryBackend> {
    let fingerprint =
        DeviceFingerprint::new("https://app.stride.run", "Mozilla/5.0 (integration)").unwrap();
    SecureStore::new(MemoryBackend::new(), &fingerprint).unwrap()
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap()
}

fn namespaced_key_count(store: &SecureStore<MemoryBackend>) -> usize {
    store
        .backend()
        .keys()
        .unwrap()
        .iter()
        .filter(|k| k.starts_with(SECURE_KEY_PREFIX))
        .count()
}

#[test]
fn auth_token_session_lifecycle() {
    let store = make_store();
    let token = AuthToken {
        token: "abc".to_string(),
    };

    store.set_secure_item_at("authToken", &token, 24.0, t0()).unwrap();
    let read: Option<AuthToken> = store.get_secure_item_at("authToken", t0()).unwrap();
    assert_eq!(read, Some(token));

    // 25 hours later the token reads absent and the store holds nothing.
    let later = t0() + Duration::hours(25);
    let read: Option<AuthToken> = store.get_secure_item_at("authToken", later).unwrap();
    assert_eq!(read, None);
    assert_eq!(namespaced_key_count(&store), 0);
}

#[test]
fn logout_purges_session_but_not_unrelated_data() {
    let store = make_store();
    store.set_secure_item("authToken", &json!({"token": "abc"}), 24.0).unwrap();
    store.set_secure_item("refreshToken", &json!({"token": "def"}), 720.0).unwrap();
    store
        .backend()
        .set("onboarding_complete", "true")
        .unwrap();

    store.clear_all_secure_data().unwrap();

    assert_eq!(namespaced_key_count(&store), 0);
    assert_eq!(
        store.backend().get("onboarding_complete").unwrap(),
        Some("true".to_string())
    );
}

#[test]
fn sequential_writes_leave_no_ghost() {
    let store = make_store();
    store.set_secure_item("profile", &json!({"name": "Ada"}), 24.0).unwrap();
    store.set_secure_item("profile", &json!({"name": "Grace"}), 24.0).unwrap();

    let read: Option<serde_json::Value> = store.get_secure_item("profile").unwrap();
    assert_eq!(read, Some(json!({"name": "Grace"})));
    assert_eq!(namespaced_key_count(&store), 1);
}

#[test]
fn tampered_record_reads_absent_and_disappears() {
    let store = make_store();
    store.set_secure_item("authToken", &json!({"token": "abc"}), 24.0).unwrap();

    // Flip the stored record to something undecodable in place.
    store.backend().set("secure_authToken", "dGFtcGVyZWQ").unwrap();

    let read: Option<serde_json::Value> = store.get_secure_item("authToken").unwrap();
    assert_eq!(read, None);
    assert_eq!(store.backend().get("secure_authToken").unwrap(), None);
}

#[test]
fn environment_change_degrades_to_logged_out() {
    // Seal a token under one install fingerprint.
    let old_fingerprint =
        DeviceFingerprint::new("https://app.stride.run", "Mozilla/5.0 (old build)").unwrap();
    let old_store = SecureStore::new(MemoryBackend::new(), &old_fingerprint).unwrap();
    old_store.set_secure_item("authToken", &json!({"token": "abc"}), 24.0).unwrap();
    let record = old_store.backend().get("secure_authToken").unwrap().unwrap();

    // A store keyed to a different environment cannot read it and heals it away.
    let store = make_store();
    store.backend().set("secure_authToken", &record).unwrap();
    let read: Option<serde_json::Value> = store.get_secure_item("authToken").unwrap();
    assert_eq!(read, None);
    assert_eq!(namespaced_key_count(&store), 0);
}

#[test]
fn sweep_preserves_live_session() {
    let store = make_store();
    store.set_secure_item_at("authToken", &json!({"token": "abc"}), 24.0, t0()).unwrap();
    store.set_secure_item_at("staleCache", &json!([1, 2, 3]), 1.0, t0()).unwrap();

    store.clean_expired_items_at(t0() + Duration::hours(2)).unwrap();

    let read: Option<serde_json::Value> = store
        .get_secure_item_at("authToken", t0() + Duration::hours(2))
        .unwrap();
    assert_eq!(read, Some(json!({"token": "abc"})));
    assert_eq!(namespaced_key_count(&store), 1);
}
