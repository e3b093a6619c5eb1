use crate::utils::error::{LeadError, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

pub const DEFAULT_TARGET: &str = "2024-09-15T00:00:00";
const TARGET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStatus {
    Running(CountdownParts),
    Started,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<Utc>,
}

impl Countdown {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    /// Interprets `naive` in the machine's local time zone.
    pub fn from_local(naive: NaiveDateTime) -> Result<Self> {
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| Self::new(dt.with_timezone(&Utc)))
            .ok_or_else(|| LeadError::InvalidDate(format!("{} does not exist locally", naive)))
    }

    pub fn from_local_str(value: &str) -> Result<Self> {
        let naive = NaiveDateTime::parse_from_str(value, TARGET_FORMAT)
            .map_err(|e| LeadError::InvalidDate(format!("{}: {}", value, e)))?;
        Self::from_local(naive)
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> CountdownStatus {
        let remaining = self.target.signed_duration_since(now);
        if remaining.num_milliseconds() < 0 {
            return CountdownStatus::Started;
        }

        let total = remaining.num_seconds();
        CountdownStatus::Running(CountdownParts {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        })
    }

    pub fn status(&self) -> CountdownStatus {
        self.status_at(Utc::now())
    }
}
