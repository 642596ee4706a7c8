//! The navigation shell: header bar, services dropdown, compact menu, footer,
//! contact panel, address bar and key hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use hyperlink_core::content::{
    ADDRESS, BRAND_BLURB, EMAIL, QUICK_CONTACTS, SERVICE_LINKS, STATUS_LINE,
};
use hyperlink_engine::ui::Focus;
use hyperlink_engine::{
    App, FooterLink, NAV_ITEMS, NavItem, copyright_notice, footer_links, mobile_menu_links,
};

use crate::effects::apply_panel_effect;
use crate::page::Doc;
use crate::shared::fit_cell;
use crate::theme::{Glyphs, Palette, styles};

const BRAND: &str = "Hyperlink";
const DROPDOWN_WIDTH: u16 = 44;
const MENU_WIDTH: u16 = 32;
const CONTACT_PANEL_WIDTH: u16 = 40;

fn nav_item_active(app: &App, item: NavItem) -> bool {
    match item {
        NavItem::Link(link) => app.route().is_active(link.href),
        NavItem::Services => app.route().in_services(),
    }
}

/// Draw the header bar. Returns the column where the Services entry starts,
/// which anchors the dropdown.
pub(crate) fn draw_nav_bar(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> u16 {
    let focused_item = match app.focus() {
        Focus::Nav { item, .. } => Some(item),
        _ => None,
    };

    let mut spans = vec![
        Span::styled(
            format!(" {BRAND} "),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    let mut column = area.x + 1 + u16::try_from(BRAND.width() + 4).unwrap_or(0);
    let mut services_column = column;

    for (index, item) in NAV_ITEMS.into_iter().enumerate() {
        let label = match item {
            NavItem::Services => format!(" {} {} ", item.label(), glyphs.dropdown),
            NavItem::Link(_) => format!(" {} ", item.label()),
        };
        let style = if focused_item == Some(index) {
            styles::focused(palette)
        } else if nav_item_active(app, item) {
            styles::active(palette)
        } else {
            styles::body(palette)
        };
        if item == NavItem::Services {
            services_column = column;
        }
        column = column.saturating_add(u16::try_from(label.width()).unwrap_or(0));
        spans.push(Span::styled(label, style));
    }

    let theme = app.theme();
    let right = format!("{} theme ", theme.as_str());
    let used: usize = spans.iter().map(|s| s.content.width()).sum();
    let gap = usize::from(area.width).saturating_sub(used + right.width() + 2);
    spans.push(Span::raw(" ".repeat(gap)));
    spans.push(Span::styled(right, Style::default().fg(palette.text_muted)));

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.bg_panel)),
    );
    frame.render_widget(bar, area);
    services_column
}

/// The services dropdown, hanging from the Services entry.
pub(crate) fn draw_services_dropdown(
    frame: &mut Frame,
    app: &App,
    anchor: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let selected = match app.focus() {
        Focus::Nav { dropdown, .. } => dropdown,
        _ => None,
    };

    let mut lines = Vec::with_capacity(SERVICE_LINKS.len() * 2);
    for (row, link) in SERVICE_LINKS.iter().enumerate() {
        let focused = selected == Some(row);
        let title_style = if focused {
            styles::focused(palette)
        } else if app.route().is_active(link.href) {
            styles::active(palette)
        } else {
            styles::heading(palette)
        };
        let marker = if focused { glyphs.selected } else { " " };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(palette.primary)),
            Span::styled(link.label, title_style),
        ]));
        if let Some(description) = link.description {
            lines.push(Line::from(Span::styled(
                format!("  {description}"),
                Style::default().fg(palette.text_muted),
            )));
        }
    }

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = frame.area();
    let x = anchor.x.min(area.width.saturating_sub(DROPDOWN_WIDTH));
    let rect = Rect {
        x,
        y: anchor.y,
        width: DROPDOWN_WIDTH.min(area.width),
        height: height.min(area.height.saturating_sub(anchor.y)),
    }
    .intersection(area);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(popup_block(palette, " Services ")),
        rect,
    );
}

/// The compact menu, dropping down from the right edge of the header.
pub(crate) fn draw_mobile_menu(
    frame: &mut Frame,
    app: &App,
    anchor_y: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let links = mobile_menu_links();
    let lines: Vec<Line> = links
        .iter()
        .enumerate()
        .map(|(row, link)| {
            let focused = row == app.mobile_cursor();
            let style = if focused {
                styles::focused(palette)
            } else if app.route().is_active(link.href) {
                styles::active(palette)
            } else {
                styles::body(palette)
            };
            let marker = if focused { glyphs.selected } else { " " };
            Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(palette.primary)),
                Span::styled(link.label, style),
            ])
        })
        .collect();

    let area = frame.area();
    let width = MENU_WIDTH.min(area.width);
    let height = u16::try_from(lines.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height.saturating_sub(anchor_y));
    let base = Rect {
        x: area.x + area.width - width,
        y: anchor_y,
        width,
        height,
    };
    let rect = app
        .view()
        .panel_effect
        .as_ref()
        .map_or(base, |effect| apply_panel_effect(effect, base))
        .intersection(area);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(popup_block(palette, " Menu ")),
        rect,
    );
}

/// The floating contact panel in the bottom-right corner.
pub(crate) fn draw_contact_panel(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let mut lines = Vec::with_capacity(QUICK_CONTACTS.len() * 3);
    for channel in QUICK_CONTACTS {
        lines.push(Line::from(Span::styled(channel.label, styles::heading(palette))));
        lines.push(Line::from(Span::styled(
            format!("  {}", channel.value),
            styles::body(palette),
        )));
        if let Some(href) = channel.href {
            lines.push(Line::from(Span::styled(
                format!("  {href}"),
                Style::default().fg(palette.text_muted),
            )));
        }
    }

    let width = CONTACT_PANEL_WIDTH.min(area.width);
    let height = u16::try_from(lines.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height);
    let base = Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    };
    let rect = app
        .view()
        .panel_effect
        .as_ref()
        .map_or(base, |effect| apply_panel_effect(effect, base))
        .intersection(frame.area());

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(popup_block(palette, " Contact Us ")),
        rect,
    );
}

/// The `:` address bar, over the header.
pub(crate) fn draw_address_bar(frame: &mut Frame, text: &str, area: Rect, palette: &Palette) {
    let width = area.width.min(60);
    let rect = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: 3.min(area.height),
    }
    .intersection(frame.area());
    let line = Line::from(vec![
        Span::styled(text.to_string(), Style::default().fg(palette.text_primary)),
        Span::styled("▏", Style::default().fg(palette.primary)),
    ]);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(line).block(popup_block(palette, " Go to ")),
        rect,
    );
}

fn popup_block<'a>(palette: &Palette, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.bg_popup))
        .title(Line::from(Span::styled(title, styles::heading(palette))))
}

/// One-line key hints along the bottom edge.
pub(crate) fn draw_key_hints(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints: &[(&str, &str)] = if app.jump_pending() {
        &[("1-6", "jump to page"), ("Esc", "cancel")]
    } else if app.address_bar().is_some() {
        &[("Enter", "go"), ("Esc", "cancel")]
    } else if app.focus().is_text_entry() {
        &[
            ("Tab", "next"),
            ("↑↓", "field"),
            ("Enter", "submit"),
            ("Esc", "leave form"),
        ]
    } else {
        &[
            ("Tab", "focus"),
            ("↑↓←→", "move"),
            ("Enter", "open"),
            ("t", "theme"),
            ("m", "menu"),
            ("c", "contact"),
            ("g", "jump"),
            (":", "go to"),
            ("q", "quit"),
        ]
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints {
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}  "), styles::key_hint(palette)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg_panel)),
        area,
    );
}

/// Footer lines appended to the page document.
pub(crate) fn footer_lines(doc: &mut Doc, app: &App) {
    let palette = doc.palette;
    let glyphs = doc.glyphs;
    let focused_link = match app.focus() {
        Focus::Footer { link } => Some(link),
        _ => None,
    };
    let links = footer_links();
    let services = SERVICE_LINKS.len();
    let pages = links
        .iter()
        .filter(|link| matches!(link, FooterLink::Page(_)))
        .count();

    let columns: [(&str, Vec<(Option<usize>, String)>); 4] = [
        (
            BRAND,
            vec![(None, EMAIL.to_string()), (None, ADDRESS.to_string())],
        ),
        ("Services", indexed(&links, 0..services)),
        ("Company", indexed(&links, services..pages)),
        ("Legal", indexed(&links, pages..links.len())),
    ];

    let width = usize::from(doc.width).max(40);
    let cell = (width / columns.len()).max(10);

    doc.blank();
    doc.push(Span::styled(
        "─".repeat(width),
        Style::default().fg(palette.border),
    ));
    doc.push(Line::from(
        columns
            .iter()
            .map(|(title, _)| Span::styled(fit_cell(title, cell), styles::heading(palette)))
            .collect::<Vec<_>>(),
    ));

    let rows = columns.iter().map(|(_, items)| items.len()).max().unwrap_or(0);
    for row in 0..rows {
        let mut spans = Vec::with_capacity(columns.len());
        let mut holds_focus = false;
        for (_, items) in &columns {
            let Some((index, label)) = items.get(row) else {
                spans.push(Span::raw(" ".repeat(cell)));
                continue;
            };
            let focused = index.is_some() && *index == focused_link;
            holds_focus |= focused;
            let style = match index {
                _ if focused => styles::focused(palette),
                Some(_) => styles::body(palette),
                None => Style::default().fg(palette.text_muted),
            };
            spans.push(Span::styled(fit_cell(label, cell), style));
        }
        if holds_focus {
            doc.anchor_here();
        }
        doc.push(Line::from(spans));
    }

    doc.blank();
    doc.muted(BRAND_BLURB);
    doc.push(Line::from(vec![
        Span::styled(copyright_notice(), Style::default().fg(palette.text_muted)),
        Span::raw("   "),
        Span::styled(
            format!("{} {STATUS_LINE}", glyphs.status_ok),
            Style::default().fg(palette.success),
        ),
    ]));
}

fn indexed(links: &[FooterLink], range: std::ops::Range<usize>) -> Vec<(Option<usize>, String)> {
    range
        .filter_map(|index| {
            links
                .get(index)
                .map(|link| (Some(index), link.label().to_string()))
        })
        .collect()
}
