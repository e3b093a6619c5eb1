use crate::core::AnalyticsSink;
use crate::domain::model::TrackingEvent;
use std::fmt::Display;
use std::panic::PanicHookInfo;
use std::sync::Arc;

pub const RUNTIME_ERROR_EVENT: &str = "runtime_error";
pub const UNHANDLED_REJECTION_EVENT: &str = "unhandled_rejection";

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

pub fn runtime_error_event(info: &PanicHookInfo<'_>) -> TrackingEvent {
    let mut event = TrackingEvent::new(RUNTIME_ERROR_EVENT).with("message", panic_message(info));
    if let Some(location) = info.location() {
        event = event
            .with("filename", location.file())
            .with("lineno", location.line())
            .with("colno", location.column());
    }
    event
}

/// Logs every panic and reports it to `sink`. The previous hook is not chained.
pub fn install_panic_reporter(sink: Arc<dyn AnalyticsSink>) {
    std::panic::set_hook(Box::new(move |info| {
        let event = runtime_error_event(info);
        tracing::error!("Runtime error: {}", panic_message(info));
        sink.track(&event);
    }));
}

/// Reports a failure nobody awaited; never re-raises it.
pub fn report_unhandled<A: AnalyticsSink + ?Sized>(sink: &A, reason: &dyn Display) {
    tracing::error!("Unhandled failure: {}", reason);
    sink.track(&TrackingEvent::new(UNHANDLED_REJECTION_EVENT).with("reason", reason.to_string()));
}
