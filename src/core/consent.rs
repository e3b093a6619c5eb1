use crate::domain::model::ConsentDecision;
use crate::domain::ports::{AnalyticsSink, ConsentStore};
use crate::utils::error::Result;

/// Cookie consent flow over a persisted decision.
pub struct CookieConsent<C: ConsentStore> {
    store: C,
}

impl<C: ConsentStore> CookieConsent<C> {
    pub fn new(store: C) -> Self {
        Self { store }
    }

    /// Unreadable state counts as undecided.
    pub fn decision(&self) -> Option<ConsentDecision> {
        match self.store.load() {
            Ok(decision) => decision,
            Err(e) => {
                tracing::warn!("Could not read consent state, treating as undecided: {}", e);
                None
            }
        }
    }

    /// The banner keeps coming back until consent is accepted.
    pub fn should_show_banner(&self) -> bool {
        self.decision() != Some(ConsentDecision::Accepted)
    }

    pub fn accept<A: AnalyticsSink + ?Sized>(&self, analytics: &A) -> Result<()> {
        self.store.save(ConsentDecision::Accepted)?;
        analytics.grant_consent();
        tracing::info!("Cookie consent accepted");
        Ok(())
    }

    pub fn decline(&self) -> Result<()> {
        self.store.save(ConsentDecision::Declined)?;
        tracing::info!("Cookie consent declined");
        Ok(())
    }
}
