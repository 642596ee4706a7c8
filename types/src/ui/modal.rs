//! Open animations for overlays (disclosure dialogs, toasts).

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEffectKind {
    /// Dialog grows from 60% to full size around its center.
    PopScale,
    /// Overlay rises into place from below.
    SlideUp,
}

#[derive(Debug, Clone)]
pub struct ModalEffect {
    kind: ModalEffectKind,
    timer: EffectTimer,
}

impl ModalEffect {
    #[must_use]
    pub fn pop_scale(duration: Duration) -> Self {
        Self {
            kind: ModalEffectKind::PopScale,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn slide_up(duration: Duration) -> Self {
        Self {
            kind: ModalEffectKind::SlideUp,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    #[must_use]
    pub fn kind(&self) -> ModalEffectKind {
        self.kind
    }
}
