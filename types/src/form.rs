//! Contact form model and its validation schema.
//!
//! Validation is declarative: every field carries its own rules, every field is
//! checked independently, and all violations are reported at once (keyed by
//! field) so the UI can show per-field messages together. Each field reports
//! only its first violated rule.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 255;
pub const PHONE_MIN: usize = 10;
pub const PHONE_MAX: usize = 20;
pub const COMPANY_MIN: usize = 2;
pub const COMPANY_MAX: usize = 100;

const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
const EMAIL_INVALID: &str = "Please enter a valid email address";
const PHONE_INVALID: &str = "Please enter a valid phone number";
const COMPANY_TOO_SHORT: &str = "Company name must be at least 2 characters";
const CONSENT_REQUIRED: &str = "You must agree to receive communications";

// Local part may not start with '.' and the address may not contain "..";
// both are checked outside the pattern because `regex` has no lookaround.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// A field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Consent,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::Consent,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::Consent => "consent",
        }
    }

    /// Placeholder shown in an empty input.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Full Name *",
            Field::Email => "Work Email *",
            Field::Phone => "Phone Number *",
            Field::Company => "Company Name *",
            Field::Consent => "I agree to receive communication from Hyperlink",
        }
    }

    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Field::Consent)
    }

    /// The next field in tab order, wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous field in tab order, wrapping at the start.
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, possibly invalid form contents. Mutated per keystroke/toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub consent: bool,
}

impl FormInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text value of a text field. `None` for the consent checkbox.
    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::Company => Some(&self.company),
            Field::Consent => None,
        }
    }

    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Phone => Some(&mut self.phone),
            Field::Company => Some(&mut self.company),
            Field::Consent => None,
        }
    }

    pub fn toggle_consent(&mut self) {
        self.consent = !self.consent;
    }

    /// Reset every field to its initial (empty, unchecked) value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Per-field validation messages. Never empty when returned from [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} form field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Drop the message for a single field (the user edited it).
    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }
}

/// Form contents that passed [`validate`].
///
/// Existence of this value is the proof of validity: the only constructor is
/// `validate`, so submission code cannot be handed unchecked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput(FormInput);

impl ValidatedInput {
    #[must_use]
    pub fn as_input(&self) -> &FormInput {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> FormInput {
        self.0
    }
}

/// Validate every field of `input`, collecting all violations.
pub fn validate(input: &FormInput) -> Result<ValidatedInput, FieldErrors> {
    let mut errors = FieldErrors::default();

    if let Some(msg) = check_length(&input.name, NAME_MIN, NAME_MAX, NAME_TOO_SHORT) {
        errors.insert(Field::Name, msg);
    }
    if !is_valid_email(&input.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    } else if input.email.chars().count() > EMAIL_MAX {
        errors.insert(Field::Email, too_long(EMAIL_MAX));
    }
    if let Some(msg) = check_length(&input.phone, PHONE_MIN, PHONE_MAX, PHONE_INVALID) {
        errors.insert(Field::Phone, msg);
    }
    if let Some(msg) = check_length(&input.company, COMPANY_MIN, COMPANY_MAX, COMPANY_TOO_SHORT) {
        errors.insert(Field::Company, msg);
    }
    if !input.consent {
        errors.insert(Field::Consent, CONSENT_REQUIRED);
    }

    if errors.is_empty() {
        Ok(ValidatedInput(input.clone()))
    } else {
        Err(errors)
    }
}

fn check_length(value: &str, min: usize, max: usize, too_short: &str) -> Option<String> {
    let len = value.chars().count();
    if len < min {
        Some(too_short.to_string())
    } else if len > max {
        Some(too_long(max))
    } else {
        None
    }
}

fn too_long(max: usize) -> String {
    format!("String must contain at most {max} character(s)")
}

fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}
