//! Keyboard focus and overlays.
//!
//! A terminal has no pointer, so focus stands in for hover: focusing the hero
//! region is a pointer-enter on the carousel and focusing the Services entry
//! is a pointer-enter on the dropdown.

use hyperlink_types::Field;

/// Focusable regions of a page, in Tab order. Pages only offer the regions
/// they have content for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRegion {
    Nav,
    Hero,
    Content,
    Flow,
    Form,
    Footer,
}

impl FocusRegion {
    /// Where focus lands when the region is entered with Tab.
    #[must_use]
    pub fn entry(self) -> Focus {
        match self {
            FocusRegion::Nav => Focus::Nav {
                item: 0,
                dropdown: None,
            },
            FocusRegion::Hero => Focus::Hero,
            FocusRegion::Content => Focus::Content,
            FocusRegion::Flow => Focus::Flow { step: 0 },
            FocusRegion::Form => Focus::Form(FormSlot::ALL[0]),
            FocusRegion::Footer => Focus::Footer { link: 0 },
        }
    }
}

/// A stop inside the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSlot {
    Field(Field),
    Submit,
}

impl FormSlot {
    pub const ALL: [FormSlot; 6] = [
        FormSlot::Field(Field::Name),
        FormSlot::Field(Field::Email),
        FormSlot::Field(Field::Phone),
        FormSlot::Field(Field::Company),
        FormSlot::Field(Field::Consent),
        FormSlot::Submit,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|slot| *slot == self).unwrap_or(0)
    }

    /// Next slot down, stopping at the submit control.
    #[must_use]
    pub fn below(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// Next slot up, stopping at the first field.
    #[must_use]
    pub fn above(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    #[must_use]
    pub fn text_field(self) -> Option<Field> {
        match self {
            FormSlot::Field(field) if field.is_text() => Some(field),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// A top navigation entry; `dropdown` is the highlighted service while
    /// the Services dropdown is being browsed.
    Nav {
        item: usize,
        dropdown: Option<usize>,
    },
    Hero,
    /// Page body; arrows scroll.
    #[default]
    Content,
    Flow {
        step: usize,
    },
    Form(FormSlot),
    Footer {
        link: usize,
    },
}

impl Focus {
    #[must_use]
    pub fn region(self) -> FocusRegion {
        match self {
            Focus::Nav { .. } => FocusRegion::Nav,
            Focus::Hero => FocusRegion::Hero,
            Focus::Content => FocusRegion::Content,
            Focus::Flow { .. } => FocusRegion::Flow,
            Focus::Form(_) => FocusRegion::Form,
            Focus::Footer { .. } => FocusRegion::Footer,
        }
    }

    /// Whether printable keys should be typed into a field.
    #[must_use]
    pub fn is_text_entry(self) -> bool {
        matches!(self, Focus::Form(slot) if slot.text_field().is_some())
    }
}

/// Layers drawn above the page. Listed topmost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    AddressBar,
    LegalModal,
    FlowModal,
    MobileMenu,
    ContactPanel,
}
