//! Demo-request form controller.
//!
//! Owns the form's retained values and the thank-you flag. A successful
//! dispatch clears the values and swaps the view to the confirmation panel;
//! a failed one keeps them so the visitor can retry.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use super::ports::{LeadCapture, LeadCaptureError, Notifier};
use super::{
    ContactForm, ContactRequest, Notification, SubmissionGate, SubmissionPhase, SubmitOutcome,
};

/// Outcome of [`ContactController::submit`].
pub type ContactOutcome = SubmitOutcome<(), LeadCaptureError>;

#[derive(Debug, Default)]
struct ContactView {
    draft: ContactForm,
    submitted: bool,
}

/// Drives one "Request a Demo" form.
pub struct ContactController {
    lead_capture: Arc<dyn LeadCapture>,
    notifier: Arc<dyn Notifier>,
    gate: SubmissionGate,
    view: Mutex<ContactView>,
}

impl ContactController {
    /// Build a controller with an empty form.
    pub fn new(lead_capture: Arc<dyn LeadCapture>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            lead_capture,
            notifier,
            gate: SubmissionGate::new(),
            view: Mutex::new(ContactView::default()),
        }
    }

    /// Current submission phase.
    pub fn phase(&self) -> SubmissionPhase {
        self.gate.phase()
    }

    /// Values currently held by the form.
    pub fn draft(&self) -> ContactForm {
        self.view().draft.clone()
    }

    /// Whether the thank-you panel is showing.
    pub fn is_submitted(&self) -> bool {
        self.view().submitted
    }

    /// "Submit Another Request": return from the thank-you panel to the form.
    pub fn start_another(&self) {
        self.view().submitted = false;
    }

    /// Submit the form.
    ///
    /// The submitted values become the retained draft unless the call is
    /// refused as [`SubmitOutcome::Busy`], or as [`SubmitOutcome::Closed`]
    /// while the thank-you panel is showing.
    pub async fn submit(&self, form: ContactForm) -> ContactOutcome {
        if !self.gate.phase().accepts_submissions() {
            debug!("contact submit ignored while in flight");
            return SubmitOutcome::Busy;
        }
        if self.is_submitted() {
            debug!("contact submit ignored while thank-you panel is showing");
            return SubmitOutcome::Closed;
        }

        let validated = ContactRequest::try_from_form(&form);
        self.view().draft = form;
        let request = match validated {
            Ok(request) => request,
            Err(errors) => {
                debug!(failing = errors.len(), "contact form rejected");
                return SubmitOutcome::Invalid(errors);
            }
        };

        let Some(ticket) = self.gate.try_begin() else {
            debug!("contact submit ignored while in flight");
            return SubmitOutcome::Busy;
        };
        debug!("contact submitting");

        match self.lead_capture.submit(&request).await {
            Ok(()) => {
                {
                    let mut view = self.view();
                    view.submitted = true;
                    view.draft = ContactForm::default();
                }
                self.notifier.notify(Notification::request_submitted());
                ticket.succeed();
                info!("demo request submitted");
                SubmitOutcome::Completed(())
            }
            Err(error) => {
                warn!(%error, "demo request failed");
                self.notifier.notify(Notification::request_failed());
                ticket.fail();
                SubmitOutcome::Failed(error)
            }
        }
    }

    fn view(&self) -> MutexGuard<'_, ContactView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
