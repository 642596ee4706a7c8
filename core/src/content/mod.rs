//! Compiled-in site content.
//!
//! Page copy lives in TOML sheets under `assets/`, embedded with
//! `include_str!` and parsed once on first use. A sheet that fails to parse
//! surfaces as a [`PageError`] for that page only; the rest of the site keeps
//! working.

mod legal;
mod page;
mod service;
mod site;

use std::sync::OnceLock;

use hyperlink_types::Route;
use thiserror::Error;

pub use legal::LegalDoc;
pub use page::{
    Card, FaqItem, HandledBy, HoursRow, Page, ProcessStep, Section, Slide, Stat,
};
pub use service::{FlowStep, StepStatus};
pub use site::{
    ADDRESS, BRAND_BLURB, CONTACT_CHANNELS, ContactChannel, EMAIL, FOOTER_COMPANY, NAV_LINKS,
    NavLink, QUICK_CONTACTS, SERVICE_LINKS, STATUS_LINE, copyright_line,
};

/// Failure to produce a page at the page boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("no page exists at {path}")]
    Missing { path: String },
    #[error("content sheet {asset} is malformed: {message}")]
    Malformed {
        asset: &'static str,
        message: String,
    },
}

type Parser = fn(&'static str) -> Result<Page, toml::de::Error>;

/// A lazily parsed content sheet.
pub(crate) struct Asset {
    name: &'static str,
    raw: &'static str,
    parse: Parser,
    parsed: OnceLock<Result<Page, PageError>>,
}

impl Asset {
    pub(crate) const fn new(name: &'static str, raw: &'static str, parse: Parser) -> Self {
        Self {
            name,
            raw,
            parse,
            parsed: OnceLock::new(),
        }
    }

    pub(crate) fn get(&self) -> Result<&Page, PageError> {
        self.parsed
            .get_or_init(|| {
                (self.parse)(self.raw).map_err(|err| {
                    tracing::warn!(asset = self.name, "Failed to parse content sheet: {err}");
                    PageError::Malformed {
                        asset: self.name,
                        message: err.to_string(),
                    }
                })
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

macro_rules! sheet {
    ($name:literal, $parse:expr) => {
        Asset::new(
            $name,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/", $name)),
            $parse,
        )
    };
}

fn parse_page(raw: &'static str) -> Result<Page, toml::de::Error> {
    toml::from_str(raw)
}

static HOME: Asset = sheet!("pages/home.toml", parse_page);
static SERVICES: Asset = sheet!("pages/services.toml", parse_page);
static HOW_IT_WORKS: Asset = sheet!("pages/how-it-works.toml", parse_page);
static DASHBOARD: Asset = sheet!("pages/dashboard.toml", parse_page);
static SECURITY: Asset = sheet!("pages/security.toml", parse_page);
static CONTACT: Asset = sheet!("pages/contact.toml", parse_page);
static BULK_SMS: Asset = sheet!("services/bulk-sms.toml", service::parse_service);
static RCS: Asset = sheet!("services/rcs.toml", service::parse_service);
static WHATSAPP: Asset = sheet!("services/whatsapp.toml", service::parse_service);
static VOICE: Asset = sheet!("services/voice.toml", service::parse_service);
static OTP: Asset = sheet!("services/otp.toml", service::parse_service);

/// Content for `route`.
///
/// [`Route::NotFound`] has no sheet and yields [`PageError::Missing`]; callers
/// render their own not-found view for it.
pub fn page(route: &Route) -> Result<&'static Page, PageError> {
    let asset = match route {
        Route::Home => &HOME,
        Route::Services => &SERVICES,
        Route::BulkSms => &BULK_SMS,
        Route::Rcs => &RCS,
        Route::WhatsApp => &WHATSAPP,
        Route::Voice => &VOICE,
        Route::Otp => &OTP,
        Route::HowItWorks => &HOW_IT_WORKS,
        Route::Dashboard => &DASHBOARD,
        Route::Security => &SECURITY,
        Route::Contact => &CONTACT,
        Route::NotFound(path) => {
            return Err(PageError::Missing { path: path.clone() });
        }
    };
    asset.get()
}
