//! Single-flight guard shared by both form controllers.
//!
//! A controller owns one [`SubmissionGate`]. Starting a submission takes a
//! [`SubmissionTicket`]; while the ticket is alive every further attempt is
//! refused, which is how the disabled submit button is modelled. Settling the
//! ticket records the outcome. Dropping it unsettled, for example when the
//! caller abandons the future, returns the gate to [`SubmissionPhase::Idle`].

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::validation::FieldErrors;

/// Lifecycle of a form submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Nothing in flight and nothing attempted yet.
    #[default]
    Idle,
    /// A dispatch is pending; new submissions are refused.
    Submitting,
    /// The last dispatch succeeded.
    Succeeded,
    /// The last dispatch failed.
    Failed,
}

impl SubmissionPhase {
    /// Whether a new submission may start.
    pub const fn accepts_submissions(self) -> bool {
        !matches!(self, Self::Submitting)
    }
}

/// What a call to a controller's `submit` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<T, E> {
    /// Validation failed; nothing was dispatched.
    Invalid(FieldErrors),
    /// Another submission was already in flight; this one was dropped.
    Busy,
    /// The form is not showing (modal closed or thank-you panel up); the
    /// submission was dropped.
    Closed,
    /// The dispatch succeeded.
    Completed(T),
    /// The dispatch failed; form state was kept for a retry.
    Failed(E),
}

impl<T, E> SubmitOutcome<T, E> {
    /// Whether the outcome is [`SubmitOutcome::Completed`].
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Inline field errors, if validation failed.
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Tracks the phase of one form and refuses overlapping submissions.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    phase: Mutex<SubmissionPhase>,
}

impl SubmissionGate {
    /// Create an idle gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> SubmissionPhase {
        *self.lock()
    }

    /// Enter [`SubmissionPhase::Submitting`], or `None` if already there.
    ///
    /// # Examples
    /// ```
    /// use landing::domain::{SubmissionGate, SubmissionPhase};
    ///
    /// let gate = SubmissionGate::new();
    /// let ticket = gate.try_begin().expect("idle gate admits a submission");
    /// assert!(gate.try_begin().is_none());
    /// ticket.succeed();
    /// assert_eq!(gate.phase(), SubmissionPhase::Succeeded);
    /// ```
    pub fn try_begin(&self) -> Option<SubmissionTicket<'_>> {
        let mut phase = self.lock();
        if !phase.accepts_submissions() {
            return None;
        }
        *phase = SubmissionPhase::Submitting;
        Some(SubmissionTicket {
            gate: self,
            settled: false,
        })
    }

    fn settle(&self, outcome: SubmissionPhase) {
        *self.lock() = outcome;
    }

    fn lock(&self) -> MutexGuard<'_, SubmissionPhase> {
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Proof that the holder owns the in-flight submission.
#[derive(Debug)]
#[must_use = "dropping the ticket immediately releases the gate"]
pub struct SubmissionTicket<'a> {
    gate: &'a SubmissionGate,
    settled: bool,
}

impl SubmissionTicket<'_> {
    /// Record success and release the gate.
    pub fn succeed(mut self) {
        self.settled = true;
        self.gate.settle(SubmissionPhase::Succeeded);
    }

    /// Record failure and release the gate.
    pub fn fail(mut self) {
        self.settled = true;
        self.gate.settle(SubmissionPhase::Failed);
    }
}

impl Drop for SubmissionTicket<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.gate.settle(SubmissionPhase::Idle);
        }
    }
}
