use crate::core::controller::{SubmissionController, SubmitOutcome};
use crate::core::modal::ModalState;
use crate::domain::model::{Notification, Tariff, TrackingEvent};
use crate::domain::ports::{AnalyticsSink, FormView, LeadSink, PageView};

/// Entry points exposed to the page and to external hooks.
pub struct LandingPage<S: LeadSink, A: AnalyticsSink> {
    controller: SubmissionController<S>,
    analytics: A,
    modal: ModalState,
}

impl<S: LeadSink, A: AnalyticsSink> LandingPage<S, A> {
    pub fn new(sink: S, analytics: A) -> Self {
        Self {
            controller: SubmissionController::new(sink),
            analytics,
            modal: ModalState::closed(),
        }
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn controller(&self) -> &SubmissionController<S> {
        &self.controller
    }

    pub fn analytics(&self) -> &A {
        &self.analytics
    }

    pub fn open_modal<V: FormView>(&mut self, view: &V, tariff: Tariff) {
        self.modal = self.modal.open(tariff);
        view.select_tariff(tariff);
        view.render_modal(&self.modal);
        tracing::debug!("Modal opened for tariff {}", tariff);
    }

    /// Closing always discards what was typed.
    pub fn close_modal<V: FormView>(&mut self, view: &V) {
        self.modal = self.modal.close();
        view.render_modal(&self.modal);
        view.reset();
        view.clear_errors();
    }

    pub fn on_escape<V: FormView>(&mut self, view: &V) {
        if self.modal.is_open() {
            self.close_modal(view);
        }
    }

    pub async fn submit<V: FormView>(&mut self, view: &V) -> SubmitOutcome {
        let (modal, outcome) = self.controller.submit(view, self.modal).await;
        self.modal = modal;
        outcome
    }

    pub fn scroll_to_section<P: PageView>(&self, page: &P, section_id: &str) {
        page.scroll_to_section(section_id);
    }

    pub fn scroll_to_top<P: PageView>(&self, page: &P) {
        page.scroll_to_top();
    }

    pub fn play_video<P: PageView>(&self, page: &P) {
        page.play_video();
    }

    pub fn close_video<P: PageView>(&self, page: &P) {
        page.close_video();
    }

    pub fn track_event(&self, event: TrackingEvent) {
        tracing::debug!("Event tracked: {}", event.name);
        self.analytics.track(&event);
    }

    pub fn show_notification<V: FormView>(&self, view: &V, notification: Notification) {
        view.notify(&notification);
    }
}
