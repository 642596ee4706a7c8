//! Contact-form submission flow.
//!
//! [`SubmissionFlow`] owns the form input, its field errors and the
//! [`SubmissionState`]. Submitting validates, then hands the validated input to
//! a [`SubmitPort`] on a spawned task. The event loop calls
//! [`SubmissionFlow::poll`] every frame to drain the result and to end the
//! confirmation window; nothing here blocks the loop.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures_util::future::BoxFuture;
use hyperlink_types::{
    Field, FieldErrors, FormInput, NonEmptyStaticStr, SubmissionState, SubmitGuard, ToastKind,
    ValidatedInput, validate,
};
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use unicode_segmentation::UnicodeSegmentation;

use crate::notifications::Notifier;

pub const SUCCESS_TOAST: NonEmptyStaticStr =
    NonEmptyStaticStr::new("Thank you! We'll be in touch shortly.");
pub const CONFIRMATION_TITLE: NonEmptyStaticStr = NonEmptyStaticStr::new("Request Received!");
pub const CONFIRMATION_BODY: NonEmptyStaticStr =
    NonEmptyStaticStr::new("Our team will contact you within 24 hours.");

/// Acknowledgement from a submit port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub accepted_at: DateTime<Utc>,
}

impl Receipt {
    #[must_use]
    pub fn now() -> Self {
        Self {
            accepted_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("The request timed out. Please try again.")]
    Timeout,
    #[error("{message}")]
    Rejected { message: String },
    #[error("Couldn't reach the server ({message}). Please try again.")]
    Transport { message: String },
}

/// Where validated submissions go.
pub trait SubmitPort: Send + Sync {
    fn submit(&self, input: ValidatedInput) -> BoxFuture<'static, Result<Receipt, SubmitError>>;
}

/// Stands in for a backend: waits `latency`, then accepts.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmit {
    latency: Duration,
}

impl SimulatedSubmit {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl SubmitPort for SimulatedSubmit {
    fn submit(&self, _input: ValidatedInput) -> BoxFuture<'static, Result<Receipt, SubmitError>> {
        let latency = self.latency;
        Box::pin(async move {
            tokio::time::sleep(latency).await;
            Ok(Receipt::now())
        })
    }
}

/// Outcome of a submit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Input was valid and a submission is now in flight.
    Started,
    /// Validation failed; errors are available via [`SubmissionFlow::errors`].
    Invalid,
    /// The control is disabled in the current state.
    Ignored(SubmitGuard),
}

struct InFlight {
    task: JoinHandle<()>,
    result: oneshot::Receiver<Result<Receipt, SubmitError>>,
}

pub struct SubmissionFlow {
    port: Arc<dyn SubmitPort>,
    confirmation_window: Duration,
    state: SubmissionState,
    input: FormInput,
    errors: FieldErrors,
    in_flight: Option<InFlight>,
    confirm_until: Option<Instant>,
}

impl std::fmt::Debug for SubmissionFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionFlow")
            .field("state", &self.state)
            .field("errors", &self.errors.len())
            .field("in_flight", &self.in_flight.is_some())
            .finish_non_exhaustive()
    }
}

impl SubmissionFlow {
    #[must_use]
    pub fn new(port: Arc<dyn SubmitPort>, confirmation_window: Duration) -> Self {
        Self {
            port,
            confirmation_window,
            state: SubmissionState::Idle,
            input: FormInput::default(),
            errors: FieldErrors::default(),
            in_flight: None,
            confirm_until: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    #[must_use]
    pub fn input(&self) -> &FormInput {
        &self.input
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Whether fields accept edits (not while submitting or confirming).
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.state.accepts_submit()
    }

    /// Append a character to a text field. Clears that field's error.
    pub fn insert_char(&mut self, field: Field, c: char) {
        if !self.is_editable() || c.is_control() {
            return;
        }
        if let Some(text) = self.input.text_mut(field) {
            text.push(c);
            self.errors.clear_field(field);
        }
    }

    /// Delete the last grapheme of a text field.
    pub fn backspace(&mut self, field: Field) {
        if !self.is_editable() {
            return;
        }
        if let Some(text) = self.input.text_mut(field)
            && let Some((start, _)) = text.grapheme_indices(true).next_back()
        {
            text.truncate(start);
            self.errors.clear_field(field);
        }
    }

    pub fn toggle_consent(&mut self) {
        if !self.is_editable() {
            return;
        }
        self.input.toggle_consent();
        self.errors.clear_field(Field::Consent);
    }

    /// Validate and, if valid, start submitting.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> SubmitAttempt {
        if !self.state.accepts_submit() {
            let guard = match self.state {
                SubmissionState::Submitted => SubmitGuard::Confirming,
                _ => SubmitGuard::InFlight,
            };
            tracing::debug!(state = self.state.name(), "submit ignored");
            return SubmitAttempt::Ignored(guard);
        }

        let validated = match validate(&self.input) {
            Ok(validated) => validated,
            Err(errors) => {
                tracing::debug!(errors = errors.len(), "form validation failed");
                self.errors = errors;
                return SubmitAttempt::Invalid;
            }
        };
        self.errors = FieldErrors::default();

        if let Err(guard) = self.state.begin() {
            return SubmitAttempt::Ignored(guard);
        }
        tracing::info!(state = self.state.name(), "submission state changed");

        let (tx, rx) = oneshot::channel();
        let request = self.port.submit(validated);
        let task = tokio::spawn(async move {
            let _ = tx.send(request.await);
        });
        self.in_flight = Some(InFlight { task, result: rx });
        SubmitAttempt::Started
    }

    /// Drain a finished submission and expire the confirmation window.
    /// Returns whether the state changed.
    pub fn poll(&mut self, notifier: &mut dyn Notifier) -> bool {
        let mut changed = false;

        if let Some(in_flight) = self.in_flight.as_mut() {
            let outcome = match in_flight.result.try_recv() {
                Ok(outcome) => Some(outcome),
                Err(oneshot::error::TryRecvError::Empty) => None,
                Err(oneshot::error::TryRecvError::Closed) => Some(Err(SubmitError::Transport {
                    message: "submission task ended unexpectedly".to_string(),
                })),
            };
            if let Some(outcome) = outcome {
                self.in_flight = None;
                self.finish(outcome, notifier);
                changed = true;
            }
        }

        if let Some(deadline) = self.confirm_until
            && Instant::now() >= deadline
        {
            self.confirm_until = None;
            if self.state.reset().is_ok() {
                tracing::info!(state = self.state.name(), "submission state changed");
                changed = true;
            }
        }

        changed
    }

    fn finish(&mut self, outcome: Result<Receipt, SubmitError>, notifier: &mut dyn Notifier) {
        match outcome {
            Ok(receipt) => {
                if self.state.complete().is_err() {
                    return;
                }
                tracing::info!(
                    state = self.state.name(),
                    accepted_at = %receipt.accepted_at,
                    "submission state changed"
                );
                self.input.clear();
                self.confirm_until = Some(Instant::now() + self.confirmation_window);
                notifier.notify(SUCCESS_TOAST.as_str(), ToastKind::Success);
            }
            Err(err) => {
                let message = err.to_string();
                if self.state.fail(message.clone()).is_err() {
                    return;
                }
                tracing::warn!(state = self.state.name(), "submission failed: {err}");
                notifier.notify(&message, ToastKind::Error);
            }
        }
    }
}

impl Drop for SubmissionFlow {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
        }
    }
}
