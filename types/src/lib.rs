//! Core UI state types for Hyperlink.
//!
//! This crate contains pure state machines with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the application:
//! the engine owns these values, the TUI reads them to render.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod carousel;
mod disclosure;
pub mod form;
mod nav;
mod route;
mod submission;
mod text;
mod theme;
mod toast;
pub mod ui;

pub use carousel::CarouselState;
pub use disclosure::DisclosureHost;
pub use form::{Field, FieldErrors, FormInput, ValidatedInput, validate};
pub use nav::NavState;
pub use route::Route;
pub use submission::{SubmissionState, SubmitGuard};
pub use text::{truncate_to_fit, truncate_with_ellipsis};
pub use theme::{Theme, ThemeParseError};
pub use toast::ToastKind;

// ============================================================================
// Static string helpers
// ============================================================================

/// A compile-time checked non-empty static string.
///
/// Used for the fixed copy that the site guarantees is present (toast
/// messages, button labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonEmptyStaticStr(&'static str);

impl NonEmptyStaticStr {
    #[must_use]
    pub const fn new(value: &'static str) -> Self {
        assert!(!value.is_empty(), "NonEmptyStaticStr must not be empty");
        Self(value)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl AsRef<str> for NonEmptyStaticStr {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl std::fmt::Display for NonEmptyStaticStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
