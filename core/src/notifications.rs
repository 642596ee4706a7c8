//! Transient toast notifications.
//!
//! The submission flow and the engine talk to a [`Notifier`]; the queue keeps
//! toasts on screen for [`TOAST_LIFETIME`] and then drops them.

use std::collections::VecDeque;
use std::time::Duration;

use hyperlink_types::ToastKind;
use tokio::time::Instant;

pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);
/// Older toasts are dropped once this many are on screen.
pub const MAX_VISIBLE: usize = 3;

/// Fire-and-forget notification sink.
pub trait Notifier {
    fn notify(&mut self, message: &str, kind: ToastKind);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
}

impl Toast {
    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }
}

/// Toasts currently on screen, oldest first.
#[derive(Debug)]
pub struct ToastQueue {
    visible: VecDeque<Toast>,
    lifetime: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(TOAST_LIFETIME)
    }
}

impl ToastQueue {
    #[must_use]
    pub fn new(lifetime: Duration) -> Self {
        Self {
            visible: VecDeque::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        if message.trim().is_empty() {
            return;
        }
        tracing::debug!(kind = kind.as_str(), "toast raised");
        self.visible.push_back(Toast {
            message,
            kind,
            shown_at: Instant::now(),
        });
        while self.visible.len() > MAX_VISIBLE {
            self.visible.pop_front();
        }
    }

    /// Drop expired toasts. Returns whether anything changed.
    pub fn prune(&mut self) -> bool {
        let now = Instant::now();
        let before = self.visible.len();
        let lifetime = self.lifetime;
        self.visible
            .retain(|toast| now.duration_since(toast.shown_at) < lifetime);
        before != self.visible.len()
    }

    /// Dismiss the newest toast.
    pub fn dismiss_latest(&mut self) -> Option<Toast> {
        self.visible.pop_back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.visible.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Toast> {
        self.visible.back()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, message: &str, kind: ToastKind) {
        self.push(message, kind);
    }
}
