//! Application state machine for Hyperlink.
//!
//! The [`App`] owns every piece of interaction state the site has: the current
//! route and its page, the navigation shell, keyboard focus, the hero carousel,
//! both disclosure dialogs, the contact form's submission flow, the theme
//! preference and the toast queue. The TUI reads it to render and forwards
//! input back to it; nothing here touches the terminal.
//!
//! # Page lifetime
//!
//! Page-scoped state (carousel, form, dialogs, scroll) is rebuilt on every
//! navigation. Dropping the old [`SubmissionFlow`] aborts a submission that
//! was still in flight, so a late result can never land on a page that is no
//! longer shown.

use std::sync::Arc;
use std::time::Duration;

use chrono::Datelike;
use hyperlink_core::content::{FlowStep, LegalDoc, Page, SERVICE_LINKS, Slide, copyright_line};
use hyperlink_core::{
    Notifier, PageError, SubmissionFlow, SubmitPort, ThemePreference, ToastQueue, page,
};
use hyperlink_types::{CarouselState, DisclosureHost, NavState, Route, Theme, ToastKind};
use tokio::time::Instant;

use crate::ui::{Focus, FocusRegion, FormSlot, Overlay, ScrollState, UiOptions, ViewState};

pub(crate) mod init;
pub(crate) mod input_modes;
pub mod shell;

pub use init::AppBuildParts;
pub use input_modes::{AddressBar, AddressBarAccess, AddressBarEditor, FormAccess, FormEditor};
pub use shell::{FooterLink, NAV_ITEMS, NavItem, SERVICES_ITEM, footer_links, mobile_menu_links};

/// Lines scrolled per arrow press in the page body and dialogs.
pub const SCROLL_STEP: u16 = 1;
/// Lines scrolled per page key.
pub const PAGE_STEP: u16 = 10;
/// Columns of the implementation-flow grid; Up/Down move a full row.
pub const FLOW_GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub struct App {
    route: Route,
    page: Result<&'static Page, PageError>,
    nav: NavState,
    focus: Focus,
    mobile_cursor: usize,
    carousel: Option<CarouselState>,
    submission: Option<SubmissionFlow>,
    legal: DisclosureHost<LegalDoc>,
    flow_modal: DisclosureHost<String>,
    contact_panel_open: bool,
    address: Option<AddressBar>,
    pending_jump: bool,
    theme: ThemePreference,
    toasts: ToastQueue,
    view: ViewState,
    submit_port: Arc<dyn SubmitPort>,
    confirmation_window: Duration,
    should_quit: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("focus", &self.focus)
            .field("nav", &self.nav)
            .field("theme", &self.theme.get())
            .finish_non_exhaustive()
    }
}

/// Footer copyright line for the current year.
#[must_use]
pub fn copyright_notice() -> String {
    copyright_line(chrono::Local::now().year())
}

/// Number of reveal lines a slide renders: badge, title, body, each point and
/// the call to action.
#[must_use]
pub fn slide_reveal_lines(slide: &Slide) -> usize {
    4 + slide.points.len()
}

impl App {
    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The page for the current route, or why it can't be shown.
    pub fn page(&self) -> Result<&'static Page, &PageError> {
        self.page.as_ref().copied()
    }

    #[must_use]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn mobile_cursor(&self) -> usize {
        self.mobile_cursor
    }

    #[must_use]
    pub fn carousel(&self) -> Option<&CarouselState> {
        self.carousel.as_ref()
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&'static Slide> {
        let carousel = self.carousel.as_ref()?;
        let page: &'static Page = *self.page.as_ref().ok()?;
        page.slides().get(carousel.current_index())
    }

    #[must_use]
    pub fn submission(&self) -> Option<&SubmissionFlow> {
        self.submission.as_ref()
    }

    #[must_use]
    pub fn legal_modal(&self) -> &DisclosureHost<LegalDoc> {
        &self.legal
    }

    #[must_use]
    pub fn flow_modal(&self) -> &DisclosureHost<String> {
        &self.flow_modal
    }

    /// Detail record of the open flow step. `None` when the dialog is closed
    /// or its id isn't a step of this page.
    #[must_use]
    pub fn flow_step_detail(&self) -> Option<&'static FlowStep> {
        let id = self.flow_modal.current()?;
        let page: &'static Page = *self.page.as_ref().ok()?;
        page.flow_step(id)
    }

    #[must_use]
    pub fn contact_panel_open(&self) -> bool {
        self.contact_panel_open
    }

    #[must_use]
    pub fn address_bar(&self) -> Option<&AddressBar> {
        self.address.as_ref()
    }

    #[must_use]
    pub fn jump_pending(&self) -> bool {
        self.pending_jump
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    #[must_use]
    pub fn theme_preference(&self) -> &ThemePreference {
        &self.theme
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    /// Page-body scroll, for the renderer to record the scrollable range.
    pub fn page_scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.view.scroll
    }

    /// Scroll of whichever dialog is open.
    pub fn modal_scroll_mut(&mut self) -> Option<&mut ScrollState> {
        if self.legal.is_open() {
            Some(self.legal.scroll_mut())
        } else if self.flow_modal.is_open() {
            Some(self.flow_modal.scroll_mut())
        } else {
            None
        }
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// The topmost open overlay, which receives Esc and arrow keys.
    #[must_use]
    pub fn top_overlay(&self) -> Option<Overlay> {
        if self.address.is_some() {
            Some(Overlay::AddressBar)
        } else if self.legal.is_open() {
            Some(Overlay::LegalModal)
        } else if self.flow_modal.is_open() {
            Some(Overlay::FlowModal)
        } else if self.nav.mobile_menu_open() {
            Some(Overlay::MobileMenu)
        } else if self.contact_panel_open {
            Some(Overlay::ContactPanel)
        } else {
            None
        }
    }

    /// Focus regions offered by the current page, in Tab order.
    #[must_use]
    pub fn focus_regions(&self) -> Vec<FocusRegion> {
        let mut regions = vec![FocusRegion::Nav];
        if self.carousel.is_some() {
            regions.push(FocusRegion::Hero);
        }
        regions.push(FocusRegion::Content);
        if self.page.as_ref().is_ok_and(|page| !page.flow.is_empty()) {
            regions.push(FocusRegion::Flow);
        }
        if self.submission.is_some() {
            regions.push(FocusRegion::Form);
        }
        regions.push(FocusRegion::Footer);
        regions
    }

    /// Go to `route`, rebuilding page-scoped state.
    pub fn navigate(&mut self, route: Route) {
        tracing::info!(from = %self.route, to = %route, "route changed");
        self.route = route;
        self.nav.navigated();
        self.mobile_cursor = 0;
        self.pending_jump = false;
        self.legal.close();
        self.flow_modal.close();
        self.view.scroll.to_top();
        self.view.modal_effect = None;
        self.view.panel_effect = None;
        self.mount_page();
        self.set_focus(Focus::Content);
    }

    /// Navigate to a path as typed or linked. Unknown paths land on the
    /// not-found page.
    pub fn navigate_path(&mut self, path: &str) {
        self.navigate(Route::parse(path));
    }

    pub(crate) fn mount_page(&mut self) {
        self.page = page(&self.route);
        if let Err(PageError::Malformed { asset, message }) = &self.page {
            tracing::warn!(asset, "page content unavailable: {message}");
        }

        let content: Option<&'static Page> = self.page.as_ref().ok().copied();
        self.carousel = content.and_then(|page| CarouselState::new(page.slides().len()));
        // Replacing the flow drops the old one, aborting its pending submit.
        self.submission = content.and_then(|page| page.form()).map(|_| {
            SubmissionFlow::new(Arc::clone(&self.submit_port), self.confirmation_window)
        });
        self.view.reveal = None;
        self.restart_reveal();
    }

    /// Move focus to the next region (Tab).
    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    /// Move focus to the previous region (Shift-Tab).
    pub fn focus_prev(&mut self) {
        self.cycle_focus(-1);
    }

    fn cycle_focus(&mut self, step: isize) {
        let regions = self.focus_regions();
        let current = regions
            .iter()
            .position(|region| *region == self.focus.region())
            .unwrap_or(0);
        let len = regions.len() as isize;
        let next = regions[(current as isize + step).rem_euclid(len) as usize];
        self.set_focus(next.entry());
    }

    /// Focus a specific target, firing the hover transitions that focus
    /// stands in for.
    pub fn set_focus(&mut self, focus: Focus) {
        let was_hero = self.focus == Focus::Hero;
        let is_hero = focus == Focus::Hero;
        if let Some(carousel) = self.carousel.as_mut() {
            if is_hero && !was_hero {
                carousel.pointer_enter();
            } else if was_hero && !is_hero {
                carousel.pointer_leave();
            }
        }

        match focus {
            Focus::Nav { item, .. } if item == SERVICES_ITEM => self.nav.dropdown_enter(),
            _ => self.nav.dropdown_leave(),
        }

        self.focus = focus;
    }

    /// Arrow-key handling for the focused region or the top overlay.
    pub fn move_focus(&mut self, direction: Direction) {
        match self.top_overlay() {
            Some(Overlay::AddressBar) => return,
            Some(Overlay::LegalModal | Overlay::FlowModal) => {
                self.move_in_modal(direction);
                return;
            }
            Some(Overlay::MobileMenu) => {
                let len = mobile_menu_links().len();
                self.mobile_cursor = match direction {
                    Direction::Up | Direction::Left => self.mobile_cursor.saturating_sub(1),
                    Direction::Down | Direction::Right => (self.mobile_cursor + 1).min(len - 1),
                };
                return;
            }
            Some(Overlay::ContactPanel) | None => {}
        }

        match self.focus {
            Focus::Nav { item, dropdown } => self.move_in_nav(item, dropdown, direction),
            Focus::Hero => match direction {
                Direction::Left => self.carousel_prev(),
                Direction::Right => self.carousel_next(),
                Direction::Up => self.view.scroll.scroll_up(SCROLL_STEP),
                Direction::Down => self.view.scroll.scroll_down(SCROLL_STEP),
            },
            Focus::Content => match direction {
                Direction::Up => self.view.scroll.scroll_up(SCROLL_STEP),
                Direction::Down => self.view.scroll.scroll_down(SCROLL_STEP),
                Direction::Left | Direction::Right => {}
            },
            Focus::Flow { step } => {
                let len = self.page.as_ref().map_or(0, |page| page.flow.len());
                if len == 0 {
                    return;
                }
                let step = match direction {
                    Direction::Left => step.saturating_sub(1),
                    Direction::Right => (step + 1).min(len - 1),
                    Direction::Up => step.saturating_sub(FLOW_GRID_COLUMNS),
                    Direction::Down => (step + FLOW_GRID_COLUMNS).min(len - 1),
                };
                self.set_focus(Focus::Flow { step });
            }
            Focus::Form(slot) => {
                let slot = match direction {
                    Direction::Up => slot.above(),
                    Direction::Down => slot.below(),
                    Direction::Left | Direction::Right => slot,
                };
                self.set_focus(Focus::Form(slot));
            }
            Focus::Footer { link } => {
                let len = footer_links().len();
                let link = match direction {
                    Direction::Left | Direction::Up => (link + len - 1) % len,
                    Direction::Right | Direction::Down => (link + 1) % len,
                };
                self.set_focus(Focus::Footer { link });
            }
        }
    }

    fn move_in_nav(&mut self, item: usize, dropdown: Option<usize>, direction: Direction) {
        let len = NAV_ITEMS.len();
        let focus = match (direction, dropdown) {
            (Direction::Left, _) => Focus::Nav {
                item: (item + len - 1) % len,
                dropdown: None,
            },
            (Direction::Right, _) => Focus::Nav {
                item: (item + 1) % len,
                dropdown: None,
            },
            (Direction::Down, None) if item == SERVICES_ITEM => Focus::Nav {
                item,
                dropdown: Some(0),
            },
            (Direction::Down, Some(row)) => Focus::Nav {
                item,
                dropdown: Some((row + 1).min(SERVICE_LINKS.len() - 1)),
            },
            (Direction::Up, Some(row)) => Focus::Nav {
                item,
                dropdown: row.checked_sub(1),
            },
            (Direction::Up | Direction::Down, _) => return,
        };
        self.set_focus(focus);
    }

    fn move_in_modal(&mut self, direction: Direction) {
        match direction {
            Direction::Up => {
                if let Some(scroll) = self.modal_scroll_mut() {
                    scroll.scroll_up(SCROLL_STEP);
                }
            }
            Direction::Down => {
                if let Some(scroll) = self.modal_scroll_mut() {
                    scroll.scroll_down(SCROLL_STEP);
                }
            }
            Direction::Left | Direction::Right if self.flow_modal.is_open() => {
                self.step_flow_modal(direction == Direction::Right);
            }
            Direction::Left | Direction::Right => {}
        }
    }

    /// Open the neighboring flow step in place.
    fn step_flow_modal(&mut self, forward: bool) {
        let Ok(page) = self.page.as_ref() else {
            return;
        };
        let Some(current) = self.flow_modal.current() else {
            return;
        };
        let Some(index) = page.flow.iter().position(|step| &step.id == current) else {
            return;
        };
        let next = if forward {
            (index + 1).min(page.flow.len() - 1)
        } else {
            index.saturating_sub(1)
        };
        if next != index {
            self.flow_modal.open(page.flow[next].id.clone());
            self.set_focus(Focus::Flow { step: next });
        }
    }

    /// Page Up / Page Down.
    pub fn scroll_page(&mut self, down: bool) {
        let scroll = if self.legal.is_open() {
            self.legal.scroll_mut()
        } else if self.flow_modal.is_open() {
            self.flow_modal.scroll_mut()
        } else {
            &mut self.view.scroll
        };
        if down {
            scroll.scroll_down(PAGE_STEP);
        } else {
            scroll.scroll_up(PAGE_STEP);
        }
    }

    /// Enter: activate whatever has focus.
    pub fn activate(&mut self) {
        match self.top_overlay() {
            Some(Overlay::AddressBar) => {
                if let AddressBarAccess::Open(bar) = self.address_bar_mut() {
                    bar.go();
                }
                return;
            }
            Some(Overlay::LegalModal | Overlay::FlowModal) => {
                self.close_modal();
                return;
            }
            Some(Overlay::MobileMenu) => {
                if let Some(link) = mobile_menu_links().get(self.mobile_cursor) {
                    self.navigate_path(link.href);
                }
                return;
            }
            Some(Overlay::ContactPanel) | None => {}
        }

        match self.focus {
            Focus::Nav {
                dropdown: Some(row),
                ..
            } => {
                if let Some(link) = SERVICE_LINKS.get(row) {
                    self.navigate_path(link.href);
                }
            }
            Focus::Nav { item, .. } => {
                if let Some(entry) = NAV_ITEMS.get(item) {
                    self.navigate_path(entry.href());
                }
            }
            Focus::Hero => {
                if let Some(slide) = self.current_slide() {
                    self.navigate_path(&slide.link);
                }
            }
            Focus::Content => {
                if matches!(self.route, Route::NotFound(_)) {
                    self.navigate(Route::Home);
                }
            }
            Focus::Flow { step } => {
                let id = self
                    .page
                    .as_ref()
                    .ok()
                    .and_then(|page| page.flow.get(step))
                    .map(|step| step.id.clone());
                if let Some(id) = id {
                    self.open_flow_step(id);
                }
            }
            Focus::Form(FormSlot::Field(field)) if !field.is_text() => {
                if let FormAccess::Active(mut form) = self.form_mut() {
                    form.toggle_consent();
                }
            }
            Focus::Form(_) => {
                if let FormAccess::Active(form) = self.form_mut() {
                    form.submit();
                }
            }
            Focus::Footer { link } => match footer_links().get(link) {
                Some(FooterLink::Page(link)) => self.navigate_path(link.href),
                Some(FooterLink::Legal(doc)) => self.open_legal(*doc),
                None => {}
            },
        }
    }

    /// Esc: close the topmost overlay, or leave the focused region.
    pub fn escape(&mut self) {
        self.pending_jump = false;
        match self.top_overlay() {
            Some(Overlay::AddressBar) => self.address = None,
            Some(Overlay::LegalModal | Overlay::FlowModal) => self.close_modal(),
            Some(Overlay::MobileMenu) => self.nav.close_mobile_menu(),
            Some(Overlay::ContactPanel) => self.contact_panel_open = false,
            None => self.set_focus(Focus::Content),
        }
    }

    pub fn open_legal(&mut self, doc: LegalDoc) {
        tracing::debug!(doc = doc.id(), "legal dialog opened");
        self.flow_modal.close();
        self.legal.open(doc);
        self.view.start_modal_effect();
    }

    /// Open a flow step by id. The dialog renders nothing for ids the page
    /// doesn't have.
    pub fn open_flow_step(&mut self, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!(step = %id, "flow step dialog opened");
        self.legal.close();
        self.flow_modal.open(id);
        self.view.start_modal_effect();
    }

    pub fn close_modal(&mut self) {
        self.legal.close();
        self.flow_modal.close();
        self.view.modal_effect = None;
    }

    pub fn carousel_next(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.next();
            self.restart_reveal();
        }
    }

    pub fn carousel_prev(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.prev();
            self.restart_reveal();
        }
    }

    /// Jump to a slide (dot navigation). Out-of-range indices are ignored.
    pub fn carousel_go_to(&mut self, index: usize) -> bool {
        let moved = self
            .carousel
            .as_mut()
            .is_some_and(|carousel| carousel.go_to(index));
        if moved {
            self.restart_reveal();
        }
        moved
    }

    fn restart_reveal(&mut self) {
        if let Some(slide) = self.current_slide() {
            self.view.start_reveal(slide_reveal_lines(slide));
        }
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.nav.toggle_mobile_menu();
        self.mobile_cursor = 0;
        if self.nav.mobile_menu_open() {
            self.view.start_panel_effect();
        }
    }

    pub fn toggle_contact_panel(&mut self) {
        self.contact_panel_open = !self.contact_panel_open;
        if self.contact_panel_open {
            self.view.start_panel_effect();
        }
    }

    /// `g`: the next digit picks a header entry.
    pub fn start_jump(&mut self) {
        self.pending_jump = true;
    }

    pub fn cancel_jump(&mut self) {
        self.pending_jump = false;
    }

    /// Finish a `g` jump. Digits `1`..=`6` pick a header entry; anything else
    /// cancels. Returns whether a jump happened.
    pub fn finish_jump(&mut self, key: char) -> bool {
        self.pending_jump = false;
        let target = key
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .and_then(|index| NAV_ITEMS.get(index));
        match target {
            Some(item) => {
                self.navigate_path(item.href());
                true
            }
            None => false,
        }
    }

    pub fn toggle_theme(&mut self) {
        let (theme, saved) = self.theme.toggle();
        if let Err(err) = saved {
            self.toasts.notify(
                &format!("Switched to {theme} theme, but couldn't save it ({err})."),
                ToastKind::Error,
            );
        }
    }

    /// Advance animations, drain a finished submission and expire toasts.
    /// Returns whether anything visible changed.
    pub fn tick(&mut self) -> bool {
        let animating = self.view.advance_effects(Instant::now());
        let submitted = self
            .submission
            .as_mut()
            .is_some_and(|flow| flow.poll(&mut self.toasts));
        let pruned = self.toasts.prune();
        animating || submitted || pruned
    }

    /// Raise a toast.
    pub fn notify(&mut self, message: &str, kind: ToastKind) {
        self.toasts.notify(message, kind);
    }

    pub fn dismiss_toast(&mut self) {
        self.toasts.dismiss_latest();
    }
}

#[cfg(test)]
mod tests;
