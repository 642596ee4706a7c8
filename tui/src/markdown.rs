//! Markdown to ratatui rendering for the legal dialog.
//!
//! Includes a small render cache so scrolling a document doesn't re-parse it
//! every frame.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Palette;

/// Maximum number of cached renders before eviction.
const CACHE_MAX_ENTRIES: usize = 32;

const INDENT: &str = "  ";
const CHECK_MARK: char = '✓';

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    content_hash: u64,
    palette_hash: u64,
}

impl CacheKey {
    fn new(content: &str, palette: &Palette) -> Self {
        let mut content_hasher = DefaultHasher::new();
        content.hash(&mut content_hasher);

        let mut palette_hasher = DefaultHasher::new();
        palette.hash(&mut palette_hasher);

        Self {
            content_hash: content_hasher.finish(),
            palette_hash: palette_hasher.finish(),
        }
    }
}

thread_local! {
    static RENDER_CACHE: RefCell<HashMap<CacheKey, Vec<Line<'static>>>> = RefCell::new(HashMap::new());
}

/// Clear the render cache.
pub fn clear_render_cache() {
    RENDER_CACHE.with(|cache| cache.borrow_mut().clear());
}

/// Render markdown content to ratatui lines styled with `palette`.
pub fn render_markdown(content: &str, palette: &Palette) -> Vec<Line<'static>> {
    let key = CacheKey::new(content, palette);

    let cached = RENDER_CACHE.with(|cache| cache.borrow().get(&key).cloned());
    if let Some(lines) = cached {
        return lines;
    }

    let lines = MarkdownRenderer::new(*palette).render(content);

    RENDER_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.len() >= CACHE_MAX_ENTRIES {
            cache.clear();
        }
        cache.insert(key, lines.clone());
    });

    lines
}

struct MarkdownRenderer {
    palette: Palette,
    lines: Vec<Line<'static>>,
    current_spans: Vec<Span<'static>>,

    // Counters, not booleans, so `## Heading with **bold**` stays bold after
    // the inner strong ends.
    bold_count: usize,
    italic_count: usize,
    heading: Option<HeadingLevel>,

    in_table: bool,
    table_rows: Vec<Vec<String>>,
    current_row: Vec<String>,
    current_cell: String,

    list_stack: Vec<Option<u64>>,
}

impl MarkdownRenderer {
    fn new(palette: Palette) -> Self {
        Self {
            palette,
            lines: Vec::new(),
            current_spans: Vec::new(),
            bold_count: 0,
            italic_count: 0,
            heading: None,
            in_table: false,
            table_rows: Vec::new(),
            current_row: Vec::new(),
            current_cell: String::new(),
            list_stack: Vec::new(),
        }
    }

    fn render(mut self, content: &str) -> Vec<Line<'static>> {
        let parser = Parser::new_ext(content, Options::ENABLE_TABLES);
        for event in parser {
            self.handle_event(event);
        }
        self.flush_line();
        while self.lines.last().is_some_and(|line| line.width() == 0) {
            self.lines.pop();
        }
        self.lines
    }

    fn base_style(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) | Event::Code(text) => self.handle_text(&text),
            Event::SoftBreak | Event::HardBreak => self.flush_line(),
            Event::Html(html) | Event::InlineHtml(html) => self.handle_text(&html),
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_line();
                if !self.lines.is_empty() {
                    self.lines.push(Line::from(""));
                }
                self.heading = Some(level);
                self.bold_count += 1;
            }
            Tag::Strong => self.bold_count += 1,
            Tag::Emphasis => self.italic_count += 1,
            Tag::List(start) => {
                self.flush_line();
                self.list_stack.push(start);
            }
            Tag::Item => {
                let indent = INDENT.repeat(self.list_stack.len().saturating_sub(1));
                let marker = match self.list_stack.last_mut() {
                    Some(Some(idx)) => {
                        let marker = format!("{indent}{idx}. ");
                        *idx += 1;
                        marker
                    }
                    _ => format!("{indent}• "),
                };
                self.current_spans
                    .push(Span::styled(marker, Style::default().fg(self.palette.primary)));
            }
            Tag::Table(_) => {
                self.flush_line();
                self.in_table = true;
                self.table_rows.clear();
            }
            Tag::TableHead | Tag::TableRow => self.current_row.clear(),
            Tag::TableCell => self.current_cell.clear(),
            Tag::Paragraph => {
                if !self.lines.is_empty() && self.list_stack.is_empty() {
                    self.lines.push(Line::from(""));
                }
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.flush_line();
                self.heading = None;
                self.bold_count = self.bold_count.saturating_sub(1);
            }
            TagEnd::Strong => self.bold_count = self.bold_count.saturating_sub(1),
            TagEnd::Emphasis => self.italic_count = self.italic_count.saturating_sub(1),
            TagEnd::List(_) => {
                self.list_stack.pop();
            }
            TagEnd::Item | TagEnd::Paragraph => self.flush_line(),
            TagEnd::Table => {
                self.in_table = false;
                self.render_table();
            }
            TagEnd::TableHead | TagEnd::TableRow => {
                if !self.current_row.is_empty() {
                    self.table_rows.push(std::mem::take(&mut self.current_row));
                }
            }
            TagEnd::TableCell => {
                self.current_row.push(std::mem::take(&mut self.current_cell));
            }
            _ => {}
        }
    }

    fn handle_text(&mut self, text: &str) {
        if self.in_table {
            self.current_cell.push_str(text);
            return;
        }
        let style = self.current_style(text);
        self.current_spans.push(Span::styled(text.to_string(), style));
    }

    fn current_style(&self, text: &str) -> Style {
        let mut style = match self.heading {
            Some(HeadingLevel::H1 | HeadingLevel::H2) => Style::default().fg(self.palette.primary),
            Some(_) => Style::default().fg(self.palette.text_primary),
            None if self.current_spans.is_empty() && text.starts_with(CHECK_MARK) => {
                Style::default().fg(self.palette.success)
            }
            None => self.base_style(),
        };
        if self.bold_count > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic_count > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    fn flush_line(&mut self) {
        if !self.current_spans.is_empty() {
            let mut spans = vec![Span::raw(INDENT)];
            spans.append(&mut self.current_spans);
            self.lines.push(Line::from(spans));
        }
    }

    fn render_table(&mut self) {
        if self.table_rows.is_empty() {
            return;
        }

        let num_cols = self.table_rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut col_widths = vec![3usize; num_cols];
        for row in &self.table_rows {
            for (i, cell) in row.iter().enumerate() {
                col_widths[i] = col_widths[i].max(cell.trim().width());
            }
        }

        let border_style = Style::default().fg(self.palette.border);
        let header_style = Style::default()
            .fg(self.palette.text_primary)
            .add_modifier(Modifier::BOLD);
        let cell_style = self.base_style();

        let top = make_table_border(&col_widths, '┌', '┬', '┐');
        self.lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(top, border_style),
        ]));

        let rows = std::mem::take(&mut self.table_rows);
        for (row_idx, row) in rows.iter().enumerate() {
            let style = if row_idx == 0 { header_style } else { cell_style };
            self.lines
                .push(Line::from(make_table_row(row, &col_widths, style, border_style)));
            if row_idx == 0 {
                let sep = make_table_border(&col_widths, '├', '┼', '┤');
                self.lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(sep, border_style),
                ]));
            }
        }

        let bottom = make_table_border(&col_widths, '└', '┴', '┘');
        self.lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(bottom, border_style),
        ]));
    }
}

fn make_table_border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut border = String::new();
    border.push(left);
    for (i, &w) in widths.iter().enumerate() {
        border.push_str(&"─".repeat(w + 2));
        border.push(if i + 1 < widths.len() { mid } else { right });
    }
    border
}

fn make_table_row(
    cells: &[String],
    widths: &[usize],
    style: Style,
    border_style: Style,
) -> Vec<Span<'static>> {
    let mut spans = vec![Span::raw(INDENT), Span::styled("│", border_style)];
    for (i, &w) in widths.iter().enumerate() {
        let cell = cells.get(i).map_or("", |c| c.trim());
        let pad = w.saturating_sub(cell.width());
        spans.push(Span::styled(
            format!(" {cell}{} ", " ".repeat(pad)),
            style,
        ));
        spans.push(Span::styled("│", border_style));
    }
    spans
}
