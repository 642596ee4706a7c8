//! Site routes.

use std::fmt;

/// A page of the site, addressed by path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Services,
    BulkSms,
    Rcs,
    WhatsApp,
    Voice,
    Otp,
    HowItWorks,
    Dashboard,
    Security,
    Contact,
    /// Catch-all for any path without a page. Keeps the requested path.
    NotFound(String),
}

impl Route {
    /// Every routable page, in navigation order.
    pub const PAGES: [Route; 11] = [
        Route::Home,
        Route::Services,
        Route::BulkSms,
        Route::Rcs,
        Route::WhatsApp,
        Route::Voice,
        Route::Otp,
        Route::HowItWorks,
        Route::Dashboard,
        Route::Security,
        Route::Contact,
    ];

    /// Resolve a path. Matching ignores ASCII case, trailing slashes and
    /// `#fragment`/`?query` suffixes; anything unknown maps to
    /// [`Route::NotFound`] with the path as given.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path
            .split(['#', '?'])
            .next()
            .unwrap_or_default()
            .trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/".to_string(),
            other => other.to_ascii_lowercase(),
        };
        match normalized.as_str() {
            "/" => Route::Home,
            "/services" => Route::Services,
            "/services/bulk-sms" => Route::BulkSms,
            "/services/rcs" => Route::Rcs,
            "/services/whatsapp" => Route::WhatsApp,
            "/services/voice" => Route::Voice,
            "/services/otp" => Route::Otp,
            "/how-it-works" => Route::HowItWorks,
            "/dashboard" => Route::Dashboard,
            "/security" => Route::Security,
            "/contact" => Route::Contact,
            _ => Route::NotFound(path.to_string()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Services => "/services",
            Route::BulkSms => "/services/bulk-sms",
            Route::Rcs => "/services/rcs",
            Route::WhatsApp => "/services/whatsapp",
            Route::Voice => "/services/voice",
            Route::Otp => "/services/otp",
            Route::HowItWorks => "/how-it-works",
            Route::Dashboard => "/dashboard",
            Route::Security => "/security",
            Route::Contact => "/contact",
            Route::NotFound(path) => path,
        }
    }

    /// Pages under `/services/...` (not the index).
    #[must_use]
    pub fn is_service_page(&self) -> bool {
        matches!(
            self,
            Route::BulkSms | Route::Rcs | Route::WhatsApp | Route::Voice | Route::Otp
        )
    }

    /// Active-link rule: exact path match.
    #[must_use]
    pub fn is_active(&self, href: &str) -> bool {
        self.path() == href
    }

    /// Active rule for the Services menu entry: any path containing `/services`.
    #[must_use]
    pub fn in_services(&self) -> bool {
        self.path().contains("/services")
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
