//! UI-facing types for the engine.
//!
//! The animation and scroll primitives live in `hyperlink_types::ui`; this
//! module re-exports them next to the engine's own focus and view state.

mod focus;
mod view_state;

pub use focus::{Focus, FocusRegion, FormSlot, Overlay};
pub use view_state::{
    MODAL_POP_DURATION, PANEL_SLIDE_DURATION, REVEAL_LINE_DURATION, REVEAL_STAGGER, ViewState,
};

pub use hyperlink_types::ui::{
    AnimPhase, ModalEffect, ModalEffectKind, PanelEffect, PanelEffectKind, RevealEffect,
    ScrollState, UiOptions,
};
