//! TUI rendering for Hyperlink using ratatui.
//!
//! [`draw`] renders one frame from an [`App`]: the header, the scrolling page
//! with its footer, key hints, and every open overlay in stacking order.
//! [`handle_events`] feeds terminal input back into the app.

mod effects;
mod form;
mod input;
pub mod markdown;
mod overlays;
mod page;
mod shared;
mod shell;
mod theme;

pub use effects::{apply_modal_effect, apply_panel_effect};
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

pub use self::markdown::clear_render_cache;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};

use hyperlink_engine::App;

const NAV_HEIGHT: u16 = 2;
const HINTS_HEIGHT: u16 = 1;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let palette = palette(app.theme(), app.ui_options());
    let glyphs = glyphs(app.ui_options());
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(HINTS_HEIGHT),
        ])
        .split(frame.area());
    let (nav_area, page_area, hints_area) = (chunks[0], chunks[1], chunks[2]);

    let services_column = shell::draw_nav_bar(frame, app, nav_area, &palette, &glyphs);
    page::draw_page(frame, app, page_area, &palette, &glyphs);
    shell::draw_key_hints(frame, app, hints_area, &palette);

    // Overlays, bottom to top.
    if app.nav().services_dropdown_open() {
        let anchor = Rect {
            x: services_column,
            y: nav_area.y + nav_area.height,
            width: 0,
            height: 0,
        };
        shell::draw_services_dropdown(frame, app, anchor, &palette, &glyphs);
    }
    if app.contact_panel_open() {
        shell::draw_contact_panel(frame, app, page_area, &palette);
    }
    if app.nav().mobile_menu_open() {
        shell::draw_mobile_menu(frame, app, nav_area.y + nav_area.height, &palette, &glyphs);
    }
    if app.flow_modal().is_open() {
        overlays::draw_flow_modal(frame, app, &palette, &glyphs);
    }
    if app.legal_modal().is_open() {
        overlays::draw_legal_modal(frame, app, &palette);
    }
    overlays::draw_toasts(frame, app, page_area, &palette, &glyphs);
    if let Some(bar) = app.address_bar() {
        shell::draw_address_bar(frame, bar.text(), nav_area.union(page_area), &palette);
    }
}
