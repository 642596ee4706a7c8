//! Domain services for Hyperlink.
//!
//! - **`content`**: the compiled-in site catalog (pages, service flows, legal
//!   documents, navigation and contact links)
//! - **`submission`**: the contact-form submit flow and its `SubmitPort`
//! - **`theme`**: the persisted light/dark preference
//! - **`notifications`**: transient toasts

pub mod content;
pub mod notifications;
pub mod submission;
pub mod theme;

pub use content::{PageError, page};
pub use notifications::{Notifier, Toast, ToastQueue};
pub use submission::{
    Receipt, SimulatedSubmit, SubmissionFlow, SubmitAttempt, SubmitError, SubmitPort,
};
pub use theme::{FileThemeStore, MemoryThemeStore, ThemePreference, ThemeStore, ThemeStoreError};
