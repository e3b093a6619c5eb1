mod common;

use common::{config_for, send_path, RecordingAnalytics, RecordingView};
use httpmock::prelude::*;
use lead_relay::domain::model::{Notification, NotificationKind, Tariff, TrackingEvent};
use lead_relay::{LandingPage, TelegramSink};

#[test]
fn test_open_modal_selects_tariff() {
    let sink = TelegramSink::new(&config_for("http://127.0.0.1:1")).unwrap();
    let mut page = LandingPage::new(sink, RecordingAnalytics::default());
    let view = RecordingView::empty();

    page.open_modal(&view, Tariff::Business);

    assert!(page.modal().is_open());
    assert_eq!(
        page.modal().title().as_deref(),
        Some("Обрати тариф: Business - $1990")
    );
    assert_eq!(view.value("selectedTariff"), "business");
    assert!(view.modal_open());
}

#[test]
fn test_escape_closes_and_resets() {
    let sink = TelegramSink::new(&config_for("http://127.0.0.1:1")).unwrap();
    let mut page = LandingPage::new(sink, RecordingAnalytics::default());
    let view = RecordingView::filled();

    page.open_modal(&view, Tariff::Start);
    view.set("email", "broken");
    let _ = page.controller().validate_on_blur(&view, "email");
    assert!(!view.errors().is_empty());

    page.on_escape(&view);

    assert!(!page.modal().is_open());
    assert!(!view.modal_open());
    assert_eq!(view.value("firstName"), "");
    assert!(view.errors().is_empty());

    // escape with nothing open is a no-op
    page.on_escape(&view);
    assert!(!page.modal().is_open());
}

#[tokio::test]
async fn test_submit_through_page_updates_modal_state() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path(send_path()).body_contains("build");
        then.status(200).json_body(serde_json::json!({"ok": true}));
    });

    let sink = TelegramSink::new(&config_for(&server.base_url())).unwrap();
    let mut page = LandingPage::new(sink, RecordingAnalytics::default());
    let view = RecordingView::filled();

    page.open_modal(&view, Tariff::Build);
    let outcome = page.submit(&view).await;

    api_mock.assert();
    assert!(outcome.is_delivered());
    assert!(!page.modal().is_open());
}

#[test]
fn test_global_api_calls_are_delegated() {
    let sink = TelegramSink::new(&config_for("http://127.0.0.1:1")).unwrap();
    let page = LandingPage::new(sink, RecordingAnalytics::default());
    let view = RecordingView::empty();

    page.scroll_to_section(&view, "#pricing");
    page.scroll_to_top(&view);
    page.play_video(&view);
    page.close_video(&view);
    assert_eq!(
        view.page_calls(),
        vec!["scroll:#pricing", "scroll:top", "video:play", "video:close"]
    );

    page.track_event(
        TrackingEvent::new("cta_click")
            .with("element", "button")
            .with("text", "Записатися"),
    );
    let events = page.analytics().events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "cta_click");
    assert_eq!(events[0].properties["element"], "button");

    page.show_notification(&view, Notification::info("Hello"));
    page.show_notification(&view, Notification::error("Oops"));
    let shown = view.notifications();
    assert_eq!(shown.len(), 2);
    assert_eq!(shown[1].kind, NotificationKind::Error);
    assert_eq!(shown[1].kind.color(), "#dc3545");
}
