#![allow(dead_code)]

use lead_relay::core::modal::ModalState;
use lead_relay::domain::model::{lead_fields, FieldInput, Notification, Tariff, TrackingEvent, SELECTED_TARIFF};
use lead_relay::domain::ports::{AnalyticsSink, FormView, PageView};
use lead_relay::RelayConfig;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

pub const TOKEN: &str = "TESTTOKEN";
pub const CHAT_ID: &str = "42";

pub fn config_for(api_base: &str) -> RelayConfig {
    let toml = format!(
        r#"
[telegram]
api_base = "{}"
bot_token = "{}"
chat_id = "{}"
timeout_seconds = 5

[message]
brand = "WIZA"
utc_offset_minutes = 180
"#,
        api_base, TOKEN, CHAT_ID
    );
    RelayConfig::from_toml_str(&toml).unwrap()
}

pub fn send_path() -> String {
    format!("/bot{}/sendMessage", TOKEN)
}

/// In-memory form that records everything the workflow does to it.
#[derive(Debug)]
pub struct RecordingView {
    fields: Mutex<Vec<FieldInput>>,
    errors: Mutex<BTreeMap<String, String>>,
    notifications: Mutex<Vec<Notification>>,
    submitting: AtomicBool,
    submitting_history: Mutex<Vec<bool>>,
    modal_open: AtomicBool,
    page_calls: Mutex<Vec<String>>,
}

impl RecordingView {
    pub fn empty() -> Self {
        Self {
            fields: Mutex::new(lead_fields()),
            errors: Mutex::new(BTreeMap::new()),
            notifications: Mutex::new(Vec::new()),
            submitting: AtomicBool::new(false),
            submitting_history: Mutex::new(Vec::new()),
            modal_open: AtomicBool::new(false),
            page_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn filled() -> Self {
        let view = Self::empty();
        view.set("firstName", "Olena");
        view.set("lastName", "Kovalenko");
        view.set("email", "olena@example.com");
        view.set("phone", "+380 (67) 123-45-67");
        view.set("country", "Ukraine");
        view.set("experience", "beginner");
        view.set("motivation", "Switching careers");
        view
    }

    pub fn set(&self, name: &str, value: &str) {
        let mut fields = self.fields.lock().unwrap();
        let field = fields.iter_mut().find(|f| f.name == name).unwrap();
        field.value = value.to_string();
    }

    pub fn value(&self, name: &str) -> String {
        let fields = self.fields.lock().unwrap();
        fields.iter().find(|f| f.name == name).unwrap().value.clone()
    }

    pub fn errors(&self) -> BTreeMap<String, String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn submitting_history(&self) -> Vec<bool> {
        self.submitting_history.lock().unwrap().clone()
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open.load(Ordering::SeqCst)
    }

    pub fn page_calls(&self) -> Vec<String> {
        self.page_calls.lock().unwrap().clone()
    }
}

impl FormView for RecordingView {
    fn values(&self) -> Vec<FieldInput> {
        self.fields.lock().unwrap().clone()
    }

    fn show_field_error(&self, field: &str, message: &str) {
        self.errors
            .lock()
            .unwrap()
            .insert(field.to_string(), message.to_string());
    }

    fn clear_field_error(&self, field: &str) {
        self.errors.lock().unwrap().remove(field);
    }

    fn clear_errors(&self) {
        self.errors.lock().unwrap().clear();
    }

    fn set_submitting(&self, submitting: bool) {
        self.submitting.store(submitting, Ordering::SeqCst);
        self.submitting_history.lock().unwrap().push(submitting);
    }

    fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    fn reset(&self) {
        for field in self.fields.lock().unwrap().iter_mut() {
            field.value.clear();
        }
    }

    fn select_tariff(&self, tariff: Tariff) {
        self.set(SELECTED_TARIFF, tariff.key());
    }

    fn render_modal(&self, modal: &ModalState) {
        self.modal_open.store(modal.is_open(), Ordering::SeqCst);
    }

    fn notify(&self, notification: &Notification) {
        self.notifications.lock().unwrap().push(notification.clone());
    }
}

impl PageView for RecordingView {
    fn scroll_to_section(&self, section_id: &str) {
        self.page_calls
            .lock()
            .unwrap()
            .push(format!("scroll:{}", section_id));
    }

    fn scroll_to_top(&self) {
        self.page_calls.lock().unwrap().push("scroll:top".to_string());
    }

    fn play_video(&self) {
        self.page_calls.lock().unwrap().push("video:play".to_string());
    }

    fn close_video(&self) {
        self.page_calls.lock().unwrap().push("video:close".to_string());
    }
}

#[derive(Debug, Default)]
pub struct RecordingAnalytics {
    events: Mutex<Vec<TrackingEvent>>,
    granted: AtomicBool,
}

impl RecordingAnalytics {
    pub fn events(&self) -> Vec<TrackingEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn granted(&self) -> bool {
        self.granted.load(Ordering::SeqCst)
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn track(&self, event: &TrackingEvent) {
        self.events.lock().unwrap().push(event.clone());
    }

    fn grant_consent(&self) {
        self.granted.store(true, Ordering::SeqCst);
    }
}
