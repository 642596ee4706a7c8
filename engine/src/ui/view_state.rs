//! View state for rendering.
//!
//! Groups the state that only affects presentation (page scroll, running
//! effects, display options) so it stays apart from the interaction state
//! the `App` drives.

use std::time::Duration;

use tokio::time::Instant;

use super::{ModalEffect, PanelEffect, RevealEffect, ScrollState, UiOptions};

pub const MODAL_POP_DURATION: Duration = Duration::from_millis(180);
pub const PANEL_SLIDE_DURATION: Duration = Duration::from_millis(160);
pub const REVEAL_STAGGER: Duration = Duration::from_millis(90);
pub const REVEAL_LINE_DURATION: Duration = Duration::from_millis(260);

#[derive(Debug)]
pub struct ViewState {
    /// Scroll position of the page body.
    pub scroll: ScrollState,
    /// Pop-in of the open disclosure dialog.
    pub modal_effect: Option<ModalEffect>,
    /// Slide-in of the mobile menu or contact panel.
    pub panel_effect: Option<PanelEffect>,
    /// Text reveal of the active hero slide.
    pub reveal: Option<RevealEffect>,
    pub ui_options: UiOptions,
    /// Timestamp of the last frame, for animation timing.
    pub last_frame: Instant,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scroll: ScrollState::default(),
            modal_effect: None,
            panel_effect: None,
            reveal: None,
            ui_options: UiOptions::default(),
            last_frame: Instant::now(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }

    pub(crate) fn start_modal_effect(&mut self) {
        self.modal_effect =
            (!self.ui_options.reduced_motion).then(|| ModalEffect::pop_scale(MODAL_POP_DURATION));
    }

    pub(crate) fn start_panel_effect(&mut self) {
        self.panel_effect = (!self.ui_options.reduced_motion)
            .then(|| PanelEffect::slide_down(PANEL_SLIDE_DURATION));
    }

    pub(crate) fn start_reveal(&mut self, lines: usize) {
        self.reveal = (!self.ui_options.reduced_motion)
            .then(|| RevealEffect::staggered(lines, REVEAL_STAGGER, REVEAL_LINE_DURATION));
    }

    /// Advance running effects by the time since the last frame and drop the
    /// finished ones. Returns whether anything is still animating.
    pub(crate) fn advance_effects(&mut self, now: Instant) -> bool {
        let delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        if let Some(effect) = self.modal_effect.as_mut() {
            effect.advance(delta);
            if effect.is_finished() {
                self.modal_effect = None;
            }
        }
        if let Some(effect) = self.panel_effect.as_mut() {
            effect.advance(delta);
            if effect.progress() >= 1.0 {
                self.panel_effect = None;
            }
        }
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.advance(delta);
            if reveal.is_finished() {
                self.reveal = None;
            }
        }

        self.is_animating()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.modal_effect.is_some() || self.panel_effect.is_some() || self.reveal.is_some()
    }
}
