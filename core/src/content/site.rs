//! Navigation, footer and contact links shared by every page.

use hyperlink_types::NonEmptyStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub description: Option<&'static str>,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink {
        label,
        href,
        description: None,
    }
}

const fn service(label: &'static str, href: &'static str, description: &'static str) -> NavLink {
    NavLink {
        label,
        href,
        description: Some(description),
    }
}

/// Top-level navigation. The Services entry sits between Home and How It Works.
pub const NAV_LINKS: [NavLink; 5] = [
    link("Home", "/"),
    link("How It Works", "/how-it-works"),
    link("Dashboard", "/dashboard"),
    link("Security", "/security"),
    link("Contact", "/contact"),
];

/// Services dropdown (and the footer's services column).
pub const SERVICE_LINKS: [NavLink; 5] = [
    service(
        "Bulk SMS",
        "/services/bulk-sms",
        "High-volume messaging at scale",
    ),
    service("RCS Messaging", "/services/rcs", "Rich, interactive messaging"),
    service(
        "WhatsApp Automation",
        "/services/whatsapp",
        "Business messaging automation",
    ),
    service("Voice & IVR", "/services/voice", "Automated voice solutions"),
    service(
        "OTP & Transactional",
        "/services/otp",
        "Secure verification messaging",
    ),
];

pub const FOOTER_COMPANY: [NavLink; 4] = [
    link("How It Works", "/how-it-works"),
    link("Dashboard Overview", "/dashboard"),
    link("Security & Compliance", "/security"),
    link("Contact", "/contact"),
];

pub const BRAND_BLURB: &str = "Enterprise messaging infrastructure for businesses of all sizes. \
                               Reliable, compliant, and built for scale.";
pub const EMAIL: &str = "hello@hyperlink.com";
pub const ADDRESS: &str = "Enterprise Tower, Tech District";
pub const STATUS_LINE: NonEmptyStaticStr = NonEmptyStaticStr::new("All Systems Operational");

/// An outbound contact link. `href` is `None` for plain text entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

/// Channels listed on the contact page and in the footer.
pub const CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        label: "Email",
        value: EMAIL,
        href: Some("mailto:hello@hyperlink.com"),
    },
    ContactChannel {
        label: "Phone",
        value: "+1 (234) 567-890",
        href: Some("tel:+1234567890"),
    },
    ContactChannel {
        label: "WhatsApp",
        value: "Chat with us",
        href: Some("https://wa.me/1234567890"),
    },
    ContactChannel {
        label: "Address",
        value: ADDRESS,
        href: None,
    },
];

/// Entries in the floating contact panel.
pub const QUICK_CONTACTS: [ContactChannel; 3] = [
    ContactChannel {
        label: "WhatsApp",
        value: "Chat with us instantly",
        href: Some("https://wa.me/919164933933"),
    },
    ContactChannel {
        label: "Call Us",
        value: "+919164933933",
        href: Some("tel:+919164933933"),
    },
    ContactChannel {
        label: "Email",
        value: EMAIL,
        href: Some("mailto:hello@hyperlink.com"),
    },
];

#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("© {year} Hyperlink. All rights reserved.")
}
