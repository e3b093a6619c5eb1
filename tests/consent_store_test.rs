mod common;

use common::RecordingAnalytics;
use lead_relay::adapters::consent::CONSENT_KEY;
use lead_relay::domain::model::ConsentDecision;
use lead_relay::domain::ports::ConsentStore;
use lead_relay::{CookieConsent, FileConsentStore};
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};

#[test]
fn test_missing_file_means_undecided() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileConsentStore::new(temp_dir.path().join("consent.json"));

    assert_eq!(assert_ok!(store.load()), None);
    assert!(CookieConsent::new(store).should_show_banner());
}

#[test]
fn test_accept_persists_and_grants_analytics() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state").join("consent.json");
    let analytics = RecordingAnalytics::default();

    let consent = CookieConsent::new(FileConsentStore::new(&path));
    assert_ok!(consent.accept(&analytics));
    assert!(analytics.granted());

    // a fresh store sees the decision, as a reload would
    let reloaded = CookieConsent::new(FileConsentStore::new(&path));
    assert_eq!(reloaded.decision(), Some(ConsentDecision::Accepted));
    assert!(!reloaded.should_show_banner());

    let raw = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[CONSENT_KEY], "accepted");
}

#[test]
fn test_decline_keeps_banner_and_analytics_off() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("consent.json");
    let consent = CookieConsent::new(FileConsentStore::new(&path));

    assert_ok!(consent.decline());
    assert_eq!(consent.decision(), Some(ConsentDecision::Declined));
    assert!(consent.should_show_banner());
}

#[test]
fn test_corrupt_file_is_undecided_and_overwritable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("consent.json");
    std::fs::write(&path, "{not json").unwrap();

    let store = FileConsentStore::new(&path);
    assert_err!(store.load());

    let consent = CookieConsent::new(store);
    assert_eq!(consent.decision(), None);
    assert!(consent.should_show_banner());

    // the unreadable file is replaced, not appended to
    assert_ok!(consent.decline());
    assert_eq!(consent.decision(), Some(ConsentDecision::Declined));
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({"cookieConsent": "declined"}));
}

#[test]
fn test_unknown_value_is_undecided() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("consent.json");
    std::fs::write(&path, r#"{"cookieConsent": "maybe", "theme": "dark"}"#).unwrap();

    let store = FileConsentStore::new(&path);
    assert_eq!(assert_ok!(store.load()), None);

    // other keys survive a save
    assert_ok!(store.save(ConsentDecision::Accepted));
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("theme"));
}
