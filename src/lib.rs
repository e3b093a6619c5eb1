pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::RelayConfig;

pub use crate::adapters::{
    analytics::TracingAnalytics,
    consent::{FileConsentStore, MemoryConsentStore},
    telegram::TelegramSink,
    terminal::TerminalView,
};
pub use crate::core::{
    consent::CookieConsent,
    controller::{SubmissionController, SubmissionPhase, SubmitOutcome},
    modal::ModalState,
    page::LandingPage,
};
pub use utils::error::{LeadError, Result};
