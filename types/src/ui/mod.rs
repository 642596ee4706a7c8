//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod modal;
mod options;
mod panel;
mod reveal;
mod scroll;

pub use animation::AnimPhase;
pub use modal::{ModalEffect, ModalEffectKind};
pub use options::UiOptions;
pub use panel::{PanelEffect, PanelEffectKind};
pub use reveal::RevealEffect;
pub use scroll::ScrollState;
