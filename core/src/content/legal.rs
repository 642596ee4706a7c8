//! Legal documents shown in the footer's legal dialog.

macro_rules! legal_asset {
    ($file:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/legal/", $file))
    };
}

const PRIVACY: &str = legal_asset!("privacy.md");
const TERMS: &str = legal_asset!("terms.md");
const DLT: &str = legal_asset!("dlt.md");
const GDPR: &str = legal_asset!("gdpr.md");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegalDoc {
    Privacy,
    Terms,
    Dlt,
    Gdpr,
}

impl LegalDoc {
    pub const ALL: [LegalDoc; 4] = [
        LegalDoc::Privacy,
        LegalDoc::Terms,
        LegalDoc::Dlt,
        LegalDoc::Gdpr,
    ];

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|doc| doc.id() == id)
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            LegalDoc::Privacy => "privacy",
            LegalDoc::Terms => "terms",
            LegalDoc::Dlt => "dlt",
            LegalDoc::Gdpr => "gdpr",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            LegalDoc::Privacy => "Privacy Policy",
            LegalDoc::Terms => "Terms of Service",
            LegalDoc::Dlt => "DLT Compliance",
            LegalDoc::Gdpr => "GDPR Compliance",
        }
    }

    /// Footer link text.
    #[must_use]
    pub fn link_label(self) -> &'static str {
        match self {
            LegalDoc::Gdpr => "GDPR",
            other => other.title(),
        }
    }

    /// Category shown next to the title.
    #[must_use]
    pub fn category(self) -> &'static str {
        match self {
            LegalDoc::Privacy => "Data protection",
            LegalDoc::Terms => "Agreement",
            LegalDoc::Dlt => "Regulatory",
            LegalDoc::Gdpr => "International",
        }
    }

    /// Markdown body.
    #[must_use]
    pub fn body(self) -> &'static str {
        match self {
            LegalDoc::Privacy => PRIVACY,
            LegalDoc::Terms => TERMS,
            LegalDoc::Dlt => DLT,
            LegalDoc::Gdpr => GDPR,
        }
    }
}
