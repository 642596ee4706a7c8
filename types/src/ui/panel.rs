//! Slide effects for menus that drop out of the navigation bar.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEffectKind {
    SlideDown,
}

#[derive(Debug, Clone)]
pub struct PanelEffect {
    kind: PanelEffectKind,
    timer: EffectTimer,
}

impl PanelEffect {
    #[must_use]
    pub fn slide_down(duration: Duration) -> Self {
        Self {
            kind: PanelEffectKind::SlideDown,
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
    pub fn kind(&self) -> PanelEffectKind {
        self.kind
    }
}
