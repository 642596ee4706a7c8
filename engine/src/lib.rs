//! Core engine for Hyperlink - state machine and orchestration.
//!
//! This crate contains the [`App`] state machine without terminal
//! dependencies:
//!
//! - **Routing**: the current [`Route`] and its page, rebuilt on navigation
//! - **Navigation shell**: header entries, services dropdown, mobile menu, footer
//! - **Focus**: keyboard focus regions standing in for pointer hover
//! - **Page interaction**: hero carousel, flow-step and legal dialogs, the
//!   contact form and its submission flow
//! - **Preferences**: the persisted theme and display options
//! - **Feedback**: toasts and per-frame animation ticks
//!
//! The TUI layer (`hyperlink_tui`) reads state from `App` and forwards input
//! back to it. No rendering logic lives in this crate.

mod app;
pub mod ui;

pub use app::{
    AddressBar, AddressBarAccess, AddressBarEditor, App, AppBuildParts, Direction,
    FLOW_GRID_COLUMNS, FooterLink, FormAccess, FormEditor, NAV_ITEMS, NavItem, PAGE_STEP,
    SCROLL_STEP, SERVICES_ITEM, copyright_notice, footer_links, mobile_menu_links,
    slide_reveal_lines,
};

// Re-export the domain crates for the TUI.
pub use hyperlink_core::content;
pub use hyperlink_core::{
    MemoryThemeStore, PageError, Receipt, SimulatedSubmit, SubmissionFlow, SubmitAttempt,
    SubmitError, SubmitPort, ThemePreference, Toast, ToastQueue,
};
pub use hyperlink_types::{
    CarouselState, DisclosureHost, Field, FieldErrors, FormInput, NavState, Route,
    SubmissionState, Theme, ToastKind, truncate_with_ellipsis,
};
