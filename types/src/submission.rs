//! Submission lifecycle for the contact form.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──ok──▶ Submitted ──display window──▶ Idle
//!   ▲                  │
//!   └──── submit ── Failed ◀──err──┘
//! ```
//!
//! Transitions are strict: each method checks the source state and refuses
//! anything else, so a second submit while `Submitting` cannot slip through.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A submission is in flight. The submit control is disabled.
    Submitting,
    /// Confirmation is on screen until the display window elapses.
    Submitted,
    /// The submit port reported an error. Fields are preserved; retry allowed.
    Failed { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitGuard {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("confirmation is still on screen")]
    Confirming,
    #[error("no submission is in flight")]
    NotInFlight,
    #[error("no confirmation is on screen")]
    NotConfirming,
}

impl SubmissionState {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Submitted => "submitted",
            SubmissionState::Failed { .. } => "failed",
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionState::Submitted)
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed { .. })
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Label of the submit control for this state.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self {
            SubmissionState::Submitting => "Submitting...",
            _ => "Request Demo",
        }
    }

    /// `Idle | Failed -> Submitting`.
    pub fn begin(&mut self) -> Result<(), SubmitGuard> {
        match self {
            SubmissionState::Idle | SubmissionState::Failed { .. } => {
                *self = SubmissionState::Submitting;
                Ok(())
            }
            SubmissionState::Submitting => Err(SubmitGuard::InFlight),
            SubmissionState::Submitted => Err(SubmitGuard::Confirming),
        }
    }

    /// `Submitting -> Submitted`.
    pub fn complete(&mut self) -> Result<(), SubmitGuard> {
        if !self.is_submitting() {
            return Err(SubmitGuard::NotInFlight);
        }
        *self = SubmissionState::Submitted;
        Ok(())
    }

    /// `Submitting -> Failed`.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), SubmitGuard> {
        if !self.is_submitting() {
            return Err(SubmitGuard::NotInFlight);
        }
        *self = SubmissionState::Failed {
            message: message.into(),
        };
        Ok(())
    }

    /// `Submitted -> Idle`.
    pub fn reset(&mut self) -> Result<(), SubmitGuard> {
        if !self.is_submitted() {
            return Err(SubmitGuard::NotConfirming);
        }
        *self = SubmissionState::Idle;
        Ok(())
    }
}
