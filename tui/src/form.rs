//! The contact form: inputs with inline errors, the consent checkbox, the
//! submit control and the confirmation view.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use hyperlink_core::submission::{CONFIRMATION_BODY, CONFIRMATION_TITLE};
use hyperlink_engine::ui::{Focus, FormSlot};
use hyperlink_engine::{Field, SubmissionFlow};

use crate::page::Doc;
use crate::theme::styles;

const CURSOR: &str = "▏";

pub(crate) fn form_lines(doc: &mut Doc, flow: &SubmissionFlow, focus: Focus) {
    let state = flow.state();
    if state.is_submitted() {
        if matches!(focus, Focus::Form(_)) {
            doc.anchor_here();
        }
        confirmation(doc);
        return;
    }

    let focused_slot = match focus {
        Focus::Form(slot) => Some(slot),
        _ => None,
    };

    for field in Field::ALL {
        let focused = focused_slot == Some(FormSlot::Field(field));
        if focused {
            doc.anchor_here();
        }
        if field.is_text() {
            text_input(doc, flow, field, focused);
        } else {
            consent(doc, flow, focused);
        }
        if let Some(message) = flow.error(field) {
            doc.push(Span::styled(
                format!("      {} {message}", doc.glyphs.cross),
                Style::default().fg(doc.palette.error),
            ));
        }
    }

    doc.blank();
    let focused = focused_slot == Some(FormSlot::Submit);
    if focused {
        doc.anchor_here();
    }
    let button_style = if state.accepts_submit() {
        styles::button(doc.palette)
    } else {
        styles::button_disabled(doc.palette)
    };
    let marker = if focused { doc.glyphs.selected } else { " " };
    doc.push(Line::from(vec![
        Span::styled(
            format!("  {marker} "),
            Style::default().fg(doc.palette.primary),
        ),
        Span::styled(format!(" {} ", state.submit_label()), button_style),
    ]));

    if let Some(message) = state.failure() {
        doc.push(Span::styled(
            format!("    {message}"),
            Style::default().fg(doc.palette.error),
        ));
    }
}

fn marker_span(doc: &Doc, focused: bool) -> Span<'static> {
    let marker = if focused { doc.glyphs.selected } else { " " };
    Span::styled(
        format!("  {marker} "),
        Style::default().fg(doc.palette.primary),
    )
}

fn text_input(doc: &mut Doc, flow: &SubmissionFlow, field: Field, focused: bool) {
    let value = flow.input().text(field).unwrap_or_default();
    let invalid = flow.error(field).is_some();
    let border = if invalid {
        doc.palette.error
    } else if focused {
        doc.palette.primary
    } else {
        doc.palette.border
    };

    let mut spans = vec![marker_span(doc, focused), Span::styled("[ ", Style::default().fg(border))];
    if value.is_empty() && !focused {
        spans.push(Span::styled(
            field.placeholder(),
            Style::default().fg(doc.palette.text_muted),
        ));
    } else {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(doc.palette.text_primary),
        ));
        if value.is_empty() {
            spans.push(Span::styled(
                format!(" {}", field.placeholder()),
                Style::default().fg(doc.palette.text_muted),
            ));
        }
    }
    if focused && flow.is_editable() {
        spans.push(Span::styled(
            CURSOR,
            Style::default()
                .fg(doc.palette.primary)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    spans.push(Span::styled(" ]", Style::default().fg(border)));
    doc.push(Line::from(spans));
}

fn consent(doc: &mut Doc, flow: &SubmissionFlow, focused: bool) {
    let checked = flow.input().consent;
    let (box_glyph, box_style) = if checked {
        (doc.glyphs.checkbox_on, Style::default().fg(doc.palette.success))
    } else {
        (doc.glyphs.checkbox_off, Style::default().fg(doc.palette.text_muted))
    };
    let label_style = if focused {
        styles::focused(doc.palette)
    } else {
        styles::body(doc.palette)
    };
    doc.push(Line::from(vec![
        marker_span(doc, focused),
        Span::styled(format!("{box_glyph} "), box_style),
        Span::styled(Field::Consent.placeholder(), label_style),
    ]));
}

fn confirmation(doc: &mut Doc) {
    doc.blank();
    doc.push(Line::from(vec![
        Span::styled(
            format!("  {} ", doc.glyphs.check),
            Style::default().fg(doc.palette.success),
        ),
        Span::styled(
            CONFIRMATION_TITLE.as_str(),
            Style::default()
                .fg(doc.palette.success)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    doc.push(Span::styled(
        format!("    {CONFIRMATION_BODY}"),
        styles::body(doc.palette),
    ));
}
