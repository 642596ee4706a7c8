//! Navigation shell: the header, mobile menu and footer link tables.

use hyperlink_core::content::{FOOTER_COMPANY, LegalDoc, NAV_LINKS, NavLink, SERVICE_LINKS};

pub const SERVICES_LABEL: &str = "Services";
pub const SERVICES_HREF: &str = "/services";

/// An entry of the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Link(NavLink),
    /// The Services entry: a link to the index with a dropdown of services.
    Services,
}

impl NavItem {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            NavItem::Link(link) => link.label,
            NavItem::Services => SERVICES_LABEL,
        }
    }

    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            NavItem::Link(link) => link.href,
            NavItem::Services => SERVICES_HREF,
        }
    }
}

/// Index of the Services entry in [`NAV_ITEMS`].
pub const SERVICES_ITEM: usize = 1;

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem::Link(NAV_LINKS[0]),
    NavItem::Services,
    NavItem::Link(NAV_LINKS[1]),
    NavItem::Link(NAV_LINKS[2]),
    NavItem::Link(NAV_LINKS[3]),
    NavItem::Link(NAV_LINKS[4]),
];

/// Mobile menu rows: the header entries with the services expanded inline.
#[must_use]
pub fn mobile_menu_links() -> Vec<NavLink> {
    let mut links = Vec::with_capacity(NAV_LINKS.len() + SERVICE_LINKS.len() + 1);
    links.push(NAV_LINKS[0]);
    links.push(NavLink {
        label: "All Services",
        href: SERVICES_HREF,
        description: None,
    });
    links.extend(SERVICE_LINKS);
    links.extend_from_slice(&NAV_LINKS[1..]);
    links
}

/// A focusable footer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterLink {
    Page(NavLink),
    /// Opens the legal dialog instead of navigating.
    Legal(LegalDoc),
}

impl FooterLink {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FooterLink::Page(link) => link.label,
            FooterLink::Legal(doc) => doc.link_label(),
        }
    }
}

/// Footer entries in column order: services, company, legal.
#[must_use]
pub fn footer_links() -> Vec<FooterLink> {
    SERVICE_LINKS
        .iter()
        .chain(FOOTER_COMPANY.iter())
        .copied()
        .map(FooterLink::Page)
        .chain(LegalDoc::ALL.into_iter().map(FooterLink::Legal))
        .collect()
}
