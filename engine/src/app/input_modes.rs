//! Borrow-scoped access to text entry.
//!
//! Typing only means something while a form field or the address bar has
//! focus. These guards are the only way to reach the editing operations, and
//! they hold `&mut App`, so focus can't move out from under an edit.

use hyperlink_core::SubmitAttempt;
use hyperlink_types::{Field, Route};

use super::App;
use crate::ui::{Focus, FormSlot};

/// Draft of the address bar (`:`), a path to navigate to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBar {
    text: String,
}

impl AddressBar {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

pub struct FormEditor<'a> {
    app: &'a mut App,
}

pub enum FormAccess<'a> {
    Active(FormEditor<'a>),
    Inactive,
}

pub struct AddressBarEditor<'a> {
    app: &'a mut App,
}

pub enum AddressBarAccess<'a> {
    Open(AddressBarEditor<'a>),
    Closed,
}

impl App {
    /// Editing access to the current page's contact form. Inactive when the
    /// page has no form or focus is elsewhere.
    pub fn form_mut(&mut self) -> FormAccess<'_> {
        if self.submission.is_some() && matches!(self.focus, Focus::Form(_)) {
            FormAccess::Active(FormEditor { app: self })
        } else {
            FormAccess::Inactive
        }
    }

    /// Open the address bar, prefilled with the current path.
    pub fn open_address_bar(&mut self) {
        self.address = Some(AddressBar {
            text: self.route.path().to_string(),
        });
    }

    pub fn address_bar_mut(&mut self) -> AddressBarAccess<'_> {
        if self.address.is_some() {
            AddressBarAccess::Open(AddressBarEditor { app: self })
        } else {
            AddressBarAccess::Closed
        }
    }
}

impl FormEditor<'_> {
    fn slot(&self) -> Option<FormSlot> {
        match self.app.focus {
            Focus::Form(slot) => Some(slot),
            _ => None,
        }
    }

    fn focused_text_field(&self) -> Option<Field> {
        self.slot().and_then(FormSlot::text_field)
    }

    /// Type into the focused text field.
    pub fn enter_char(&mut self, c: char) {
        let Some(field) = self.focused_text_field() else {
            return;
        };
        if let Some(flow) = self.app.submission.as_mut() {
            flow.insert_char(field, c);
        }
    }

    /// Paste into the focused text field. Line breaks are dropped.
    pub fn enter_text(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.enter_char(c);
        }
    }

    pub fn delete_char(&mut self) {
        let Some(field) = self.focused_text_field() else {
            return;
        };
        if let Some(flow) = self.app.submission.as_mut() {
            flow.backspace(field);
        }
    }

    pub fn toggle_consent(&mut self) {
        if let Some(flow) = self.app.submission.as_mut() {
            flow.toggle_consent();
        }
    }

    /// Validate and submit. On validation failure focus jumps to the first
    /// field with an error.
    pub fn submit(self) -> SubmitAttempt {
        let Some(flow) = self.app.submission.as_mut() else {
            return SubmitAttempt::Invalid;
        };
        let attempt = flow.submit();
        let first_error = flow.errors().fields().next();
        if attempt == SubmitAttempt::Invalid
            && let Some(field) = first_error
        {
            self.app.set_focus(Focus::Form(FormSlot::Field(field)));
        }
        attempt
    }
}

impl AddressBarEditor<'_> {
    fn text_mut(&mut self) -> Option<&mut String> {
        self.app.address.as_mut().map(|bar| &mut bar.text)
    }

    pub fn enter_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if let Some(text) = self.text_mut() {
            text.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(text) = self.text_mut() {
            text.pop();
        }
    }

    /// Navigate to the typed path and close the bar.
    pub fn go(self) {
        let Some(bar) = self.app.address.take() else {
            return;
        };
        let path = bar.text.trim();
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        self.app.navigate(Route::parse(&path));
    }

    pub fn cancel(self) {
        self.app.address = None;
    }
}
