//! Page body: the current route's sections, the contact form and the footer,
//! laid out as one scrolling document.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use hyperlink_core::content::{
    CONTACT_CHANNELS, Card, FaqItem, FlowStep, HoursRow, Page, ProcessStep, Section, Slide, Stat,
    StepStatus,
};
use hyperlink_engine::{App, FLOW_GRID_COLUMNS, PageError};
use hyperlink_engine::ui::{Focus, FocusRegion};

use crate::effects::{RevealStage, reveal_stage};
use crate::shared::{fit_cell, update_scroll};
use crate::theme::{Glyphs, Palette, styles};
use crate::{form, shell};

/// Lines of the page document plus the line that holds keyboard focus.
pub(crate) struct Doc<'a> {
    pub(crate) lines: Vec<Line<'static>>,
    pub(crate) anchor: Option<usize>,
    pub(crate) palette: &'a Palette,
    pub(crate) glyphs: &'a Glyphs,
    pub(crate) width: u16,
}

impl<'a> Doc<'a> {
    pub(crate) fn new(palette: &'a Palette, glyphs: &'a Glyphs, width: u16) -> Self {
        Self {
            lines: Vec::new(),
            anchor: None,
            palette,
            glyphs,
            width,
        }
    }

    pub(crate) fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    /// Mark the next pushed line as the focus anchor.
    pub(crate) fn anchor_here(&mut self) {
        self.anchor = Some(self.lines.len());
    }

    pub(crate) fn heading(&mut self, text: &str) {
        self.blank();
        self.push(Span::styled(text.to_string(), styles::heading(self.palette)));
    }

    pub(crate) fn body(&mut self, text: &str) {
        self.push(Span::styled(text.to_string(), styles::body(self.palette)));
    }

    pub(crate) fn muted(&mut self, text: &str) {
        self.push(Span::styled(
            text.to_string(),
            Style::default().fg(self.palette.text_muted),
        ));
    }

    fn bullet(&mut self, marker: &str, style: Style, text: &str) {
        self.push(Line::from(vec![
            Span::styled(format!("  {marker} "), style),
            Span::styled(text.to_string(), styles::body(self.palette)),
        ]));
    }

    fn check(&mut self, text: &str) {
        let style = Style::default().fg(self.palette.success);
        let marker = self.glyphs.check;
        self.bullet(marker, style, text);
    }
}

pub(crate) fn draw_page(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = Block::default()
        .padding(Padding::horizontal(2))
        .style(Style::default().bg(palette.bg));
    let inner = block.inner(area);

    let mut doc = Doc::new(palette, glyphs, inner.width);
    match app.page() {
        Ok(page) => page_lines(&mut doc, app, page),
        Err(PageError::Missing { path }) => not_found_lines(&mut doc, app, path),
        Err(PageError::Malformed { asset, message }) => {
            malformed_lines(&mut doc, asset, message);
        }
    }
    shell::footer_lines(&mut doc, app);

    let follow_focus = !matches!(app.focus().region(), FocusRegion::Content | FocusRegion::Nav);
    let anchor = doc.anchor.filter(|_| follow_focus);
    let offset = update_scroll(app.page_scroll_mut(), &doc.lines, inner, anchor);

    let paragraph = Paragraph::new(doc.lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

fn page_lines(doc: &mut Doc, app: &App, page: &Page) {
    doc.blank();
    doc.push(Span::styled(
        page.title.clone(),
        Style::default()
            .fg(doc.palette.primary)
            .add_modifier(Modifier::BOLD),
    ));
    doc.body(&page.intro);

    for section in &page.sections {
        match section {
            Section::Carousel { .. } => hero_lines(doc, app),
            Section::Cards { title, intro, items } => {
                section_header(doc, title, intro.as_deref());
                cards(doc, items);
            }
            Section::Steps { title, intro, items } => {
                section_header(doc, title, intro.as_deref());
                steps(doc, items);
            }
            Section::Stats { title, intro, items } => {
                if let Some(title) = title {
                    section_header(doc, title, intro.as_deref());
                } else {
                    doc.blank();
                }
                stats(doc, items);
            }
            Section::Checklist { title, intro, items } => {
                section_header(doc, title, intro.as_deref());
                for item in items {
                    doc.check(item);
                }
            }
            Section::Callout {
                title,
                body,
                points,
                link_label,
                ..
            } => {
                section_header(doc, title, Some(body.as_str()));
                for point in points {
                    doc.check(point);
                }
                if let Some(label) = link_label {
                    doc.push(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(
                            format!("{label} {}", doc.glyphs.arrow_right),
                            styles::link(doc.palette),
                        ),
                    ]));
                }
            }
            Section::Flow { title, intro } => {
                section_header(doc, title, Some(intro.as_str()));
                flow_grid(doc, app, &page.flow);
            }
            Section::Contacts {
                title,
                intro,
                hours,
                note,
            } => {
                section_header(doc, title, Some(intro.as_str()));
                contacts(doc, hours, note.as_deref());
            }
            Section::Faq { title, intro, items } => {
                section_header(doc, title, intro.as_deref());
                faq(doc, items);
            }
            Section::Form { title, subtitle } => {
                section_header(doc, title, Some(subtitle.as_str()));
                if let Some(flow) = app.submission() {
                    form::form_lines(doc, flow, app.focus());
                }
            }
        }
    }
}

fn section_header(doc: &mut Doc, title: &str, intro: Option<&str>) {
    doc.heading(title);
    if let Some(intro) = intro {
        doc.body(intro);
    }
    doc.blank();
}

fn hero_lines(doc: &mut Doc, app: &App) {
    let (Some(carousel), Some(slide)) = (app.carousel(), app.current_slide()) else {
        return;
    };
    let palette = doc.palette;
    let glyphs = doc.glyphs;
    let focused = app.focus() == Focus::Hero;

    doc.blank();
    if focused {
        doc.anchor_here();
    }
    let revealed = slide_lines(slide, palette, glyphs, focused);
    let dim = Style::default().fg(palette.text_muted);
    for (i, line) in revealed.into_iter().enumerate() {
        let progress = app
            .view()
            .reveal
            .as_ref()
            .map_or(1.0, |reveal| reveal.line_progress(i));
        match reveal_stage(progress) {
            RevealStage::Hidden => doc.blank(),
            RevealStage::Fading => doc.push(line.patch_style(dim)),
            RevealStage::Shown => doc.push(line),
        }
    }

    let mut controls = vec![Span::raw("  ")];
    let arrow_style = Style::default().fg(palette.primary);
    if carousel.arrows_visible() {
        controls.push(Span::styled(format!("{} ", glyphs.prev), arrow_style));
    }
    for i in 0..carousel.len() {
        let (dot, style) = if i == carousel.current_index() {
            (glyphs.dot_active, Style::default().fg(palette.primary))
        } else {
            (glyphs.dot_inactive, Style::default().fg(palette.text_muted))
        };
        controls.push(Span::styled(format!("{dot} "), style));
    }
    if carousel.arrows_visible() {
        controls.push(Span::styled(glyphs.next.to_string(), arrow_style));
    }
    controls.push(Span::styled(
        format!("  {}/{}", carousel.current_index() + 1, carousel.len()),
        Style::default().fg(palette.text_muted),
    ));
    doc.push(Line::from(controls));
}

/// The revealable lines of a slide, in reveal order.
fn slide_lines(
    slide: &Slide,
    palette: &Palette,
    glyphs: &Glyphs,
    focused: bool,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(4 + slide.points.len());
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!(" {} ", slide.badge), styles::badge(palette)),
    ]));
    lines.push(Line::from(Span::styled(
        format!("  {}", slide.title),
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        format!("  {}", slide.body),
        styles::body(palette),
    )));
    for point in &slide.points {
        lines.push(Line::from(vec![
            Span::styled(format!("    {} ", glyphs.check), Style::default().fg(palette.success)),
            Span::styled(point.clone(), styles::body(palette)),
        ]));
    }
    let link_style = if focused {
        styles::focused(palette)
    } else {
        styles::link(palette)
    };
    let marker = if focused { glyphs.selected } else { " " };
    lines.push(Line::from(vec![
        Span::styled(format!(" {marker} "), Style::default().fg(palette.primary)),
        Span::styled(
            format!("{} {}", slide.link_label, glyphs.arrow_right),
            link_style,
        ),
    ]));
    lines
}

fn cards(doc: &mut Doc, items: &[Card]) {
    for card in items {
        let mut title = vec![
            Span::styled(
                format!("  {} ", doc.glyphs.bullet),
                Style::default().fg(doc.palette.primary),
            ),
            Span::styled(card.title.clone(), styles::heading(doc.palette)),
        ];
        if let Some(badge) = &card.badge {
            title.push(Span::raw("  "));
            title.push(Span::styled(format!(" {badge} "), styles::badge(doc.palette)));
        }
        doc.push(Line::from(title));
        doc.push(Span::styled(
            format!("    {}", card.description),
            styles::body(doc.palette),
        ));
        for point in &card.points {
            let style = Style::default().fg(doc.palette.success);
            doc.push(Line::from(vec![
                Span::styled(format!("      {} ", doc.glyphs.check), style),
                Span::styled(point.clone(), styles::body(doc.palette)),
            ]));
        }
        doc.blank();
    }
}

fn steps(doc: &mut Doc, items: &[ProcessStep]) {
    for step in items {
        let mut header = vec![
            Span::styled(
                format!("  {}  ", step.number),
                Style::default()
                    .fg(doc.palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(step.title.clone(), styles::heading(doc.palette)),
        ];
        if let Some(owner) = step.handled_by {
            header.push(Span::styled(
                format!("  [{}]", owner.label()),
                Style::default().fg(doc.palette.accent),
            ));
        }
        doc.push(Line::from(header));
        doc.push(Span::styled(
            format!("      {}", step.description),
            styles::body(doc.palette),
        ));
        for detail in &step.details {
            doc.push(Span::styled(
                format!("      {} {detail}", doc.glyphs.bullet),
                Style::default().fg(doc.palette.text_muted),
            ));
        }
        doc.blank();
    }
}

fn stats(doc: &mut Doc, items: &[Stat]) {
    let value_width = items.iter().map(|s| s.value.width()).max().unwrap_or(0);
    for stat in items {
        let mut line = vec![
            Span::styled(
                format!("  {}  ", fit_cell(&stat.value, value_width)),
                Style::default()
                    .fg(doc.palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(stat.label.clone(), styles::body(doc.palette)),
        ];
        if let Some(change) = &stat.change {
            line.push(Span::styled(
                format!("  {change}"),
                Style::default().fg(doc.palette.success),
            ));
        }
        doc.push(Line::from(line));
    }
}

fn status_style(status: StepStatus, palette: &Palette) -> Style {
    match status {
        StepStatus::Completed => Style::default().fg(palette.success),
        StepStatus::Active => Style::default().fg(palette.primary),
        StepStatus::Pending => Style::default().fg(palette.text_muted),
    }
}

fn flow_grid(doc: &mut Doc, app: &App, flow: &[FlowStep]) {
    let focused_step = match app.focus() {
        Focus::Flow { step } => Some(step),
        _ => None,
    };
    let cell_width = usize::from(doc.width.saturating_sub(2)) / FLOW_GRID_COLUMNS;
    let cell_width = cell_width.max(12);

    for (row, chunk) in flow.chunks(FLOW_GRID_COLUMNS).enumerate() {
        let first = row * FLOW_GRID_COLUMNS;
        if focused_step.is_some_and(|step| (first..first + chunk.len()).contains(&step)) {
            doc.anchor_here();
        }
        let mut titles = vec![Span::raw(" ")];
        let mut subtitles = vec![Span::raw(" ")];
        let mut statuses = vec![Span::raw(" ")];
        for (col, step) in chunk.iter().enumerate() {
            let index = first + col;
            let focused = focused_step == Some(index);
            let marker = if focused { doc.glyphs.selected } else { " " };
            let title_style = if focused {
                styles::focused(doc.palette)
            } else {
                styles::heading(doc.palette)
            };
            titles.push(Span::styled(
                fit_cell(&format!("{marker} {:02} {}", index + 1, step.title), cell_width),
                title_style,
            ));
            subtitles.push(Span::styled(
                fit_cell(&format!("     {}", step.subtitle), cell_width),
                styles::body(doc.palette),
            ));
            statuses.push(Span::styled(
                fit_cell(&format!("     {}", step.status.label()), cell_width),
                status_style(step.status, doc.palette),
            ));
        }
        doc.push(Line::from(titles));
        doc.push(Line::from(subtitles));
        doc.push(Line::from(statuses));
        doc.blank();
    }
    if focused_step.is_some() {
        doc.muted("  Enter opens the step details");
    }
}

fn contacts(doc: &mut Doc, hours: &[HoursRow], note: Option<&str>) {
    let label_width = CONTACT_CHANNELS
        .iter()
        .map(|c| c.label.width())
        .max()
        .unwrap_or(0);
    for channel in CONTACT_CHANNELS {
        doc.push(Line::from(vec![
            Span::styled(
                format!("  {}  ", fit_cell(channel.label, label_width)),
                Style::default().fg(doc.palette.text_muted),
            ),
            Span::styled(channel.value, styles::heading(doc.palette)),
        ]));
    }
    if !hours.is_empty() {
        doc.blank();
        for row in hours {
            doc.push(Line::from(vec![
                Span::styled(format!("  {}: ", row.days), styles::body(doc.palette)),
                Span::styled(row.time.clone(), Style::default().fg(doc.palette.text_primary)),
            ]));
        }
    }
    if let Some(note) = note {
        doc.blank();
        doc.muted(&format!("  {note}"));
    }
}

fn faq(doc: &mut Doc, items: &[FaqItem]) {
    for item in items {
        doc.push(Span::styled(
            format!("  {}", item.question),
            styles::heading(doc.palette),
        ));
        doc.push(Span::styled(
            format!("  {}", item.answer),
            styles::body(doc.palette),
        ));
        doc.blank();
    }
}

fn not_found_lines(doc: &mut Doc, app: &App, path: &str) {
    let focused = app.focus() == Focus::Content;
    doc.blank();
    doc.push(Span::styled(
        "404",
        Style::default()
            .fg(doc.palette.primary)
            .add_modifier(Modifier::BOLD),
    ));
    doc.heading("Page not found");
    doc.body(&format!("Nothing lives at {path}."));
    doc.blank();
    let style = if focused {
        styles::button(doc.palette)
    } else {
        styles::link(doc.palette)
    };
    doc.push(Line::from(vec![Span::raw("  "), Span::styled(" Go Home ", style)]));
}

fn malformed_lines(doc: &mut Doc, asset: &str, message: &str) {
    doc.blank();
    doc.push(Span::styled(
        "This page couldn't be loaded.",
        Style::default()
            .fg(doc.palette.error)
            .add_modifier(Modifier::BOLD),
    ));
    doc.muted(&format!("{asset}: {message}"));
}
