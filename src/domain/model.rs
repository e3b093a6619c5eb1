use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::error::LeadError;

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const COUNTRY: &str = "country";
pub const EXPERIENCE: &str = "experience";
pub const MOTIVATION: &str = "motivation";
pub const SELECTED_TARIFF: &str = "selectedTariff";

/// Input type of a form control, as far as validation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
}

/// One form control as reported by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl FieldInput {
    pub fn new(name: &str, kind: FieldKind, required: bool, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required,
            value: value.into(),
        }
    }
}

/// The declared controls of the lead form, with empty values.
pub fn lead_fields() -> Vec<FieldInput> {
    vec![
        FieldInput::new(FIRST_NAME, FieldKind::Text, true, ""),
        FieldInput::new(LAST_NAME, FieldKind::Text, true, ""),
        FieldInput::new(EMAIL, FieldKind::Email, true, ""),
        FieldInput::new(PHONE, FieldKind::Tel, true, ""),
        FieldInput::new(COUNTRY, FieldKind::Text, true, ""),
        FieldInput::new(EXPERIENCE, FieldKind::Text, true, ""),
        FieldInput::new(MOTIVATION, FieldKind::Text, false, ""),
        FieldInput::new(SELECTED_TARIFF, FieldKind::Text, false, ""),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub experience: String,
    pub motivation: String,
    pub selected_tariff: String,
    pub timestamp: DateTime<Utc>,
}

impl LeadForm {
    /// Builds a lead from field values. Missing fields become empty strings.
    pub fn from_fields(fields: &[FieldInput], timestamp: DateTime<Utc>) -> Self {
        let value = |name: &str| {
            fields
                .iter()
                .find(|f| f.name == name)
                .map(|f| f.value.trim().to_string())
                .unwrap_or_default()
        };

        Self {
            first_name: value(FIRST_NAME),
            last_name: value(LAST_NAME),
            email: value(EMAIL),
            phone: value(PHONE),
            country: value(COUNTRY),
            experience: value(EXPERIENCE),
            motivation: value(MOTIVATION),
            selected_tariff: value(SELECTED_TARIFF),
            timestamp,
        }
    }

    /// ISO-8601 with millisecond precision and a `Z` suffix.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    InvalidPhone,
    TooShort,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => "Це поле обов'язкове для заповнення",
            FieldError::InvalidEmail => "Введіть коректну email адресу",
            FieldError::InvalidPhone => "Введіть коректний номер телефону",
            FieldError::TooShort => "Мінімум 2 символи",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Field name to failure, rebuilt on every validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, FieldError>);

impl ValidationErrors {
    pub fn insert(&mut self, field: &str, error: FieldError) {
        self.0.insert(field.to_string(), error);
    }

    pub fn get(&self, field: &str) -> Option<FieldError> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldError)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tariff {
    Start,
    Build,
    Pro,
    Business,
}

impl Tariff {
    pub const ALL: [Tariff; 4] = [Tariff::Start, Tariff::Build, Tariff::Pro, Tariff::Business];

    pub fn key(&self) -> &'static str {
        match self {
            Tariff::Start => "start",
            Tariff::Build => "build",
            Tariff::Pro => "pro",
            Tariff::Business => "business",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tariff::Start => "Start",
            Tariff::Build => "Build",
            Tariff::Pro => "Pro",
            Tariff::Business => "Business",
        }
    }

    /// Price in whole US dollars.
    pub fn price_usd(&self) -> u32 {
        match self {
            Tariff::Start => 50,
            Tariff::Build => 490,
            Tariff::Pro => 790,
            Tariff::Business => 1990,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} - ${}", self.label(), self.price_usd())
    }
}

impl FromStr for Tariff {
    type Err = LeadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tariff::ALL
            .iter()
            .find(|t| t.key() == s.trim())
            .copied()
            .ok_or_else(|| LeadError::UnknownTariff(s.to_string()))
    }
}

impl fmt::Display for Tariff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fa-check-circle",
            NotificationKind::Error => "fa-exclamation-circle",
            NotificationKind::Warning => "fa-exclamation-triangle",
            NotificationKind::Info => "fa-info-circle",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#28a745",
            NotificationKind::Error => "#dc3545",
            NotificationKind::Warning => "#ffc107",
            NotificationKind::Info => "#17a2b8",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    /// How long a notification stays on screen before it is removed.
    pub const DISMISS_AFTER: Duration = Duration::from_secs(5);

    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentDecision {
    Accepted,
    Declined,
}

impl ConsentDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentDecision::Accepted => "accepted",
            ConsentDecision::Declined => "declined",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "accepted" => Some(ConsentDecision::Accepted),
            "declined" => Some(ConsentDecision::Declined),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub location: String,
    pub text: String,
    pub avatar: String,
    pub stars: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingEvent {
    pub name: String,
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl TrackingEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: serde_json::Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }
}
