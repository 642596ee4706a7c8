//! Disclosure dialogs (legal documents, flow-step details) and toasts.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Wrap,
    },
};

use hyperlink_core::content::FlowStep;
use hyperlink_engine::{App, ToastKind};

use crate::effects::apply_modal_effect;
use crate::markdown::render_markdown;
use crate::shared::{centered_rect, update_scroll, wrapped_line_rows};
use crate::theme::{Glyphs, Palette, styles};

const MODAL_MAX_WIDTH: u16 = 96;
const TOAST_WIDTH: u16 = 48;
const TOAST_MAX_ROWS: u16 = 4;

/// The open legal document, if any.
pub(crate) fn draw_legal_modal(frame: &mut Frame, app: &mut App, palette: &Palette) {
    let Some(doc) = app.legal_modal().current().copied() else {
        return;
    };
    let mut lines = vec![
        Line::from(Span::styled(
            doc.category(),
            Style::default().fg(palette.accent),
        )),
        Line::from(""),
    ];
    lines.extend(render_markdown(doc.body(), palette));
    draw_modal(frame, app, palette, doc.title(), lines);
}

/// The open flow step's details. Nothing is drawn for an id the page
/// doesn't define.
pub(crate) fn draw_flow_modal(
    frame: &mut Frame,
    app: &mut App,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let Some(step) = app.flow_step_detail() else {
        return;
    };
    let lines = flow_step_lines(step, palette, glyphs);
    draw_modal(frame, app, palette, &step.title, lines);
}

fn flow_step_lines(step: &FlowStep, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            step.subtitle.clone(),
            Style::default().fg(palette.text_muted),
        )),
        Line::from(vec![
            Span::styled(format!(" {} ", step.status.label()), styles::badge(palette)),
            Span::raw("  "),
            Span::styled(
                step.handled_by.label(),
                Style::default().fg(palette.accent),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(step.description.clone(), styles::body(palette))),
    ];

    let mut section = |title: &str, body: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            title.to_string(),
            styles::heading(palette),
        )));
        lines.push(Line::from(Span::styled(body.to_string(), styles::body(palette))));
    };
    section("What is this?", &step.what_is_this);
    section("Why it exists", &step.why_it_exists);
    section("Before", &step.before);
    section("After", &step.after);

    let mut list = |title: &str, items: &[String], marker: &str, color: Color| {
        if items.is_empty() {
            return;
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            title.to_string(),
            styles::heading(palette),
        )));
        for item in items {
            lines.push(Line::from(vec![
                Span::styled(format!("  {marker} "), Style::default().fg(color)),
                Span::styled(item.clone(), styles::body(palette)),
            ]));
        }
    };
    list(
        "Hyperlink handles",
        &step.hyperlink_handles,
        glyphs.check,
        palette.success,
    );
    list(
        "You handle",
        &step.customer_handles,
        glyphs.bullet,
        palette.primary,
    );
    list("Compliance", &step.compliance, glyphs.info, palette.warning);

    for (title, body) in [
        ("Timeline", &step.timeline),
        ("If something goes wrong", &step.failures),
    ] {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(title, styles::heading(palette))));
        lines.push(Line::from(Span::styled(body.clone(), styles::body(palette))));
    }
    lines
}

fn draw_modal(
    frame: &mut Frame,
    app: &mut App,
    palette: &Palette,
    title: &str,
    lines: Vec<Line<'static>>,
) {
    let viewport = frame.area();
    let width = viewport.width.saturating_sub(8).min(MODAL_MAX_WIDTH);
    let height = viewport.height.saturating_sub(4);
    let base = centered_rect(viewport, width, height);
    let rect = app
        .view()
        .modal_effect
        .as_ref()
        .map_or(base, |effect| apply_modal_effect(effect, base, viewport))
        .intersection(viewport);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.bg_popup))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )))
        .title_bottom(Line::from(vec![
            Span::styled(" Esc", styles::key_highlight(palette)),
            Span::styled(" close  ", styles::key_hint(palette)),
            Span::styled("↑↓", styles::key_highlight(palette)),
            Span::styled(" scroll ", styles::key_hint(palette)),
        ]));
    let inner = block.inner(rect);

    let Some(scroll) = app.modal_scroll_mut() else {
        return;
    };
    let offset = update_scroll(scroll, &lines, inner, None);
    let max_scroll = scroll.max();

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0)),
        rect,
    );

    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .style(Style::default().fg(palette.text_muted));
        let mut state = ScrollbarState::new(usize::from(max_scroll)).position(usize::from(offset));
        frame.render_stateful_widget(
            scrollbar,
            rect.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut state,
        );
    }
}

/// Toasts stacked in the bottom-right corner of `area`, newest at the bottom.
pub(crate) fn draw_toasts(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let width = TOAST_WIDTH.min(area.width);
    let text_width = width.saturating_sub(2);
    let mut bottom = area.y + area.height;
    for toast in app.toasts().iter().rev() {
        let (icon, color) = match toast.kind {
            ToastKind::Success => (glyphs.check, palette.success),
            ToastKind::Error => (glyphs.cross, palette.error),
            ToastKind::Info => (glyphs.info, palette.primary),
        };
        let line = Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(color)),
            Span::styled(
                toast.message.clone(),
                Style::default().fg(palette.text_primary),
            ),
        ]);
        let rows = wrapped_line_rows(std::slice::from_ref(&line), text_width)
            .first()
            .copied()
            .unwrap_or(1);
        let height = u16::try_from(rows).unwrap_or(u16::MAX).min(TOAST_MAX_ROWS) + 2;
        if bottom < area.y + height {
            break;
        }
        let rect = Rect {
            x: area.x + area.width - width,
            y: bottom - height,
            width,
            height,
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(line).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(palette.bg_popup)),
            ),
            rect,
        );
        bottom -= height;
    }
}
