use crate::core::modal::ModalState;
use crate::core::FormView;
use crate::domain::model::{lead_fields, FieldInput, Notification, Tariff, SELECTED_TARIFF};
use crate::domain::ports::PageView;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Headless form backed by values given on the command line.
#[derive(Debug)]
pub struct TerminalView {
    fields: Mutex<Vec<FieldInput>>,
    errors: Mutex<BTreeMap<String, String>>,
    notification: Mutex<Option<Notification>>,
    submitting: AtomicBool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            fields: Mutex::new(lead_fields()),
            errors: Mutex::new(BTreeMap::new()),
            notification: Mutex::new(None),
            submitting: AtomicBool::new(false),
        }
    }

    /// Sets a declared field; unknown names are ignored.
    pub fn set_value(&self, name: &str, value: &str) {
        let mut fields = self.fields.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(field) = fields.iter_mut().find(|f| f.name == name) {
            field.value = value.to_string();
        }
    }

    pub fn field_errors(&self) -> BTreeMap<String, String> {
        self.errors.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn last_notification(&self) -> Option<Notification> {
        self.notification
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView for TerminalView {
    fn values(&self) -> Vec<FieldInput> {
        self.fields.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn show_field_error(&self, field: &str, message: &str) {
        eprintln!("  ✗ {}: {}", field, message);
        self.errors
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(field.to_string(), message.to_string());
    }

    fn clear_field_error(&self, field: &str) {
        self.errors
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(field);
    }

    fn clear_errors(&self) {
        self.errors.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    fn set_submitting(&self, submitting: bool) {
        self.submitting.store(submitting, Ordering::SeqCst);
        if submitting {
            println!("⏳ Sending...");
        }
    }

    fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    fn reset(&self) {
        let mut fields = self.fields.lock().unwrap_or_else(|e| e.into_inner());
        for field in fields.iter_mut() {
            field.value.clear();
        }
    }

    fn select_tariff(&self, tariff: Tariff) {
        self.set_value(SELECTED_TARIFF, tariff.key());
    }

    fn render_modal(&self, modal: &ModalState) {
        match modal.title() {
            Some(title) => println!("{}", title),
            None => tracing::debug!("Modal closed"),
        }
    }

    fn notify(&self, notification: &Notification) {
        println!("[{:?}] {}", notification.kind, notification.message);
        *self.notification.lock().unwrap_or_else(|e| e.into_inner()) = Some(notification.clone());
    }
}

impl PageView for TerminalView {
    fn scroll_to_section(&self, section_id: &str) {
        tracing::info!("Scroll to section {}", section_id);
    }

    fn scroll_to_top(&self) {
        tracing::info!("Scroll to top");
    }

    fn play_video(&self) {
        tracing::info!("Video playback is not available in the terminal");
    }

    fn close_video(&self) {
        tracing::debug!("Close video");
    }
}
