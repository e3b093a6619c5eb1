use crate::core::modal::ModalState;
use crate::domain::model::{
    ConsentDecision, FieldInput, LeadForm, Notification, Tariff, TrackingEvent,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Capabilities the lead workflow needs from whatever renders the form.
///
/// Methods take `&self`; implementations keep their own interior state. The
/// submit control's disabled flag is the only in-flight marker the
/// controller relies on.
pub trait FormView {
    fn values(&self) -> Vec<FieldInput>;
    fn show_field_error(&self, field: &str, message: &str);
    fn clear_field_error(&self, field: &str);
    fn clear_errors(&self);
    fn set_submitting(&self, submitting: bool);
    fn is_submitting(&self) -> bool;
    /// Clears every field value.
    fn reset(&self);
    fn select_tariff(&self, tariff: Tariff);
    fn render_modal(&self, modal: &ModalState);
    /// Replaces any notification currently on screen.
    fn notify(&self, notification: &Notification);
}

/// Page-level effects with no return contract.
pub trait PageView {
    fn scroll_to_section(&self, section_id: &str);
    fn scroll_to_top(&self);
    fn play_video(&self);
    fn close_video(&self);
}

#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn deliver(&self, lead: &LeadForm) -> Result<()>;
}

pub trait ConsentStore: Send + Sync {
    /// `None` when nothing has been decided yet.
    fn load(&self) -> Result<Option<ConsentDecision>>;
    fn save(&self, decision: ConsentDecision) -> Result<()>;
}

pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &TrackingEvent);
    fn grant_consent(&self);
}

impl<T: AnalyticsSink + ?Sized> AnalyticsSink for Arc<T> {
    fn track(&self, event: &TrackingEvent) {
        (**self).track(event);
    }

    fn grant_consent(&self) {
        (**self).grant_consent();
    }
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn bot_token(&self) -> &str;
    fn chat_id(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn brand(&self) -> &str;
    fn utc_offset_minutes(&self) -> i32;
}
