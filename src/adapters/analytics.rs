use crate::core::AnalyticsSink;
use crate::domain::model::TrackingEvent;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes tracking events to the log. Events before consent are logged at debug only.
#[derive(Debug, Default)]
pub struct TracingAnalytics {
    consent_granted: AtomicBool,
}

impl TracingAnalytics {
    pub fn with_consent(granted: bool) -> Self {
        Self {
            consent_granted: AtomicBool::new(granted),
        }
    }

    pub fn consent_granted(&self) -> bool {
        self.consent_granted.load(Ordering::SeqCst)
    }
}

impl AnalyticsSink for TracingAnalytics {
    fn track(&self, event: &TrackingEvent) {
        let properties = serde_json::Value::Object(event.properties.clone());
        if self.consent_granted() {
            tracing::info!(event = %event.name, properties = %properties, "Event tracked");
        } else {
            tracing::debug!(event = %event.name, properties = %properties, "Event tracked without consent");
        }
    }

    fn grant_consent(&self) {
        self.consent_granted.store(true, Ordering::SeqCst);
        tracing::info!("Analytics storage granted");
    }
}
