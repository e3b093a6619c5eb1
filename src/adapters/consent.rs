use crate::core::ConsentStore;
use crate::domain::model::ConsentDecision;
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const CONSENT_KEY: &str = "cookieConsent";

/// Key-value JSON file standing in for browser local storage.
#[derive(Debug, Clone)]
pub struct FileConsentStore {
    path: PathBuf,
}

impl FileConsentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let data = fs::read_to_string(&self.path)?;
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&data)?)
    }
}

impl ConsentStore for FileConsentStore {
    fn load(&self) -> Result<Option<ConsentDecision>> {
        let entries = self.read_entries()?;
        Ok(entries
            .get(CONSENT_KEY)
            .and_then(|v| ConsentDecision::parse(v)))
    }

    fn save(&self, decision: ConsentDecision) -> Result<()> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    "Consent file {} is unreadable, rewriting it without its other keys: {}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
        };
        entries.insert(CONSENT_KEY.to_string(), decision.as_str().to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryConsentStore {
    decision: Mutex<Option<ConsentDecision>>,
}

impl ConsentStore for MemoryConsentStore {
    fn load(&self) -> Result<Option<ConsentDecision>> {
        Ok(*self.decision.lock().unwrap_or_else(|e| e.into_inner()))
    }

    fn save(&self, decision: ConsentDecision) -> Result<()> {
        *self.decision.lock().unwrap_or_else(|e| e.into_inner()) = Some(decision);
        Ok(())
    }
}
