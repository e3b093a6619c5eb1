use crate::core::countdown::{Countdown, DEFAULT_TARGET};
use crate::core::ConfigProvider;
use crate::domain::model::Review;
use crate::utils::error::{LeadError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const MAX_OFFSET_MINUTES: i32 = 14 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub message: MessageConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub consent: ConsentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    pub bot_token: String,
    pub chat_id: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageConfig {
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_countdown_target")]
    pub countdown_target: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentConfig {
    #[serde(default = "default_consent_path")]
    pub store_path: String,
}

fn default_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_brand() -> String {
    "WIZA".to_string()
}

fn default_countdown_target() -> String {
    DEFAULT_TARGET.to_string()
}

fn default_consent_path() -> String {
    "./consent.json".to_string()
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            utc_offset_minutes: 0,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            countdown_target: default_countdown_target(),
            reviews: Vec::new(),
        }
    }
}

impl Default for ConsentConfig {
    fn default() -> Self {
        Self {
            store_path: default_consent_path(),
        }
    }
}

impl RelayConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LeadError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LeadError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` from the environment. Unset variables are left as-is so validation can name them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LeadError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.validate_messaging()?;
        self.validate_local()
    }

    /// Endpoint and credentials; only needed by commands that send leads.
    pub fn validate_messaging(&self) -> Result<()> {
        validation::validate_url("telegram.api_base", &self.telegram.api_base)?;
        validation::validate_resolved_secret("telegram.bot_token", &self.telegram.bot_token)?;
        validation::validate_resolved_secret("telegram.chat_id", &self.telegram.chat_id)?;

        if let Some(timeout) = self.telegram.timeout_seconds {
            validation::validate_positive_number("telegram.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }

    /// Settings every command relies on.
    pub fn validate_local(&self) -> Result<()> {
        validation::validate_range(
            "message.utc_offset_minutes",
            self.message.utc_offset_minutes,
            -MAX_OFFSET_MINUTES,
            MAX_OFFSET_MINUTES,
        )?;

        Countdown::from_local_str(&self.page.countdown_target).map_err(|e| {
            LeadError::InvalidConfigValueError {
                field: "page.countdown_target".to_string(),
                value: self.page.countdown_target.clone(),
                reason: e.to_string(),
            }
        })?;

        for review in &self.page.reviews {
            validation::validate_range("page.reviews.stars", review.stars, 1, 5)?;
        }

        validation::validate_path("consent.store_path", &self.consent.store_path)?;

        Ok(())
    }

    pub fn countdown(&self) -> Result<Countdown> {
        Countdown::from_local_str(&self.page.countdown_target)
    }

    pub fn reviews(&self) -> &[Review] {
        &self.page.reviews
    }

    pub fn consent_path(&self) -> &str {
        &self.consent.store_path
    }
}

impl ConfigProvider for RelayConfig {
    fn api_base(&self) -> &str {
        &self.telegram.api_base
    }

    fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }

    fn chat_id(&self) -> &str {
        &self.telegram.chat_id
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.telegram.timeout_seconds.map(Duration::from_secs)
    }

    fn brand(&self) -> &str {
        &self.message.brand
    }

    fn utc_offset_minutes(&self) -> i32 {
        self.message.utc_offset_minutes
    }
}

impl Validate for RelayConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
