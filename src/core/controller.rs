use crate::core::modal::ModalState;
use crate::core::validator::{validate_field, validate_form};
use crate::domain::model::{FieldError, FieldInput, LeadForm, Notification, ValidationErrors};
use crate::domain::ports::{FormView, LeadSink};
use crate::utils::error::LeadError;
use chrono::Utc;
use std::sync::Mutex;

pub const SUCCESS_MESSAGE: &str =
    "Заявку успішно надіслано! Ми зв'яжемося з вами найближчим часом.";
pub const FAILURE_MESSAGE: &str = "Помилка при надсиланні заявки. Спробуйте ще раз.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    Submit,
    ValidationFailed,
    ValidationPassed,
    Delivered,
    DeliveryFailed,
    Settled,
}

impl SubmissionPhase {
    /// `None` when `event` is not accepted in this phase.
    pub fn next(self, event: SubmissionEvent) -> Option<SubmissionPhase> {
        use SubmissionEvent as E;
        use SubmissionPhase as P;

        match (self, event) {
            (P::Idle, E::Submit) => Some(P::Validating),
            (P::Validating, E::ValidationFailed) => Some(P::Idle),
            (P::Validating, E::ValidationPassed) => Some(P::Submitting),
            (P::Submitting, E::Delivered) => Some(P::Succeeded),
            (P::Submitting, E::DeliveryFailed) => Some(P::Failed),
            (P::Succeeded, E::Settled) | (P::Failed, E::Settled) => Some(P::Idle),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Delivered,
    Rejected(ValidationErrors),
    Failed(LeadError),
    /// A submission from the same form was still in flight.
    Ignored,
}

impl SubmitOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered)
    }
}

/// Re-enables the submit control however the submission ends, and puts an
/// abandoned submission back to `Idle`.
struct SubmittingGuard<'a, V: FormView> {
    view: &'a V,
    phase: &'a Mutex<SubmissionPhase>,
}

impl<'a, V: FormView> SubmittingGuard<'a, V> {
    fn engage(view: &'a V, phase: &'a Mutex<SubmissionPhase>) -> Self {
        view.set_submitting(true);
        Self { view, phase }
    }
}

impl<V: FormView> Drop for SubmittingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_submitting(false);
        let mut phase = self.phase.lock().unwrap_or_else(|e| e.into_inner());
        if *phase != SubmissionPhase::Idle {
            tracing::warn!("Submission dropped while {:?}, resetting to Idle", *phase);
            *phase = SubmissionPhase::Idle;
        }
    }
}

pub struct SubmissionController<S: LeadSink> {
    sink: S,
    phase: Mutex<SubmissionPhase>,
}

impl<S: LeadSink> SubmissionController<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            phase: Mutex::new(SubmissionPhase::Idle),
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        *self.phase.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn advance(&self, event: SubmissionEvent) {
        let mut phase = self.phase.lock().unwrap_or_else(|e| e.into_inner());
        match phase.next(event) {
            Some(next) => {
                tracing::debug!("Submission {:?} -> {:?} on {:?}", *phase, next, event);
                *phase = next;
            }
            None => tracing::warn!("Ignoring {:?} while {:?}", event, *phase),
        }
    }

    /// Runs one submission attempt and returns the modal as it should be shown afterwards.
    pub async fn submit<V: FormView>(
        &self,
        view: &V,
        modal: ModalState,
    ) -> (ModalState, SubmitOutcome) {
        if view.is_submitting() {
            tracing::debug!("Submit ignored: previous submission still in flight");
            return (modal, SubmitOutcome::Ignored);
        }

        self.advance(SubmissionEvent::Submit);
        let fields = view.values();

        if let Err(errors) = render_form_verdict(view, &fields) {
            tracing::info!("Lead rejected by validation: {}", errors);
            self.advance(SubmissionEvent::ValidationFailed);
            return (modal, SubmitOutcome::Rejected(errors));
        }
        self.advance(SubmissionEvent::ValidationPassed);

        let lead = LeadForm::from_fields(&fields, Utc::now());
        let _guard = SubmittingGuard::engage(view, &self.phase);
        tracing::info!("Submitting lead for tariff '{}'", lead.selected_tariff);

        match self.sink.deliver(&lead).await {
            Ok(()) => {
                self.advance(SubmissionEvent::Delivered);
                view.notify(&Notification::success(SUCCESS_MESSAGE));

                let modal = modal.close();
                view.render_modal(&modal);
                view.reset();
                view.clear_errors();

                self.advance(SubmissionEvent::Settled);
                tracing::info!("✅ Lead delivered");
                (modal, SubmitOutcome::Delivered)
            }
            Err(e) => {
                tracing::error!("❌ Error submitting form: {}", e);
                self.advance(SubmissionEvent::DeliveryFailed);
                view.notify(&Notification::error(FAILURE_MESSAGE));
                self.advance(SubmissionEvent::Settled);
                (modal, SubmitOutcome::Failed(e))
            }
        }
    }

    /// Validates a single control when it loses focus, required or not.
    pub fn validate_on_blur<V: FormView>(&self, view: &V, field: &str) -> Result<(), FieldError> {
        let Some(input) = view.values().into_iter().find(|f| f.name == field) else {
            return Ok(());
        };
        apply_verdict(view, &input, validate_field(&input))
    }

    pub fn on_input<V: FormView>(&self, view: &V, field: &str) {
        view.clear_field_error(field);
    }
}

fn apply_verdict<V: FormView>(
    view: &V,
    input: &FieldInput,
    verdict: Result<(), FieldError>,
) -> Result<(), FieldError> {
    match verdict {
        Ok(()) => view.clear_field_error(&input.name),
        Err(e) => view.show_field_error(&input.name, e.message()),
    }
    verdict
}

/// Shows or clears the error of every required control.
fn render_form_verdict<V: FormView>(
    view: &V,
    fields: &[FieldInput],
) -> Result<(), ValidationErrors> {
    let verdict = validate_form(fields);

    for input in fields.iter().filter(|f| f.required) {
        match verdict.as_ref().err().and_then(|errors| errors.get(&input.name)) {
            Some(e) => view.show_field_error(&input.name, e.message()),
            None => view.clear_field_error(&input.name),
        }
    }

    verdict
}
