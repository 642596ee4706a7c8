//! Animation effects for overlays and the hero reveal.

use ratatui::layout::Rect;

use hyperlink_engine::ui::{ModalEffect, ModalEffectKind, PanelEffect, PanelEffectKind};

/// Apply a modal effect to transform the base rectangle.
#[must_use]
pub fn apply_modal_effect(effect: &ModalEffect, base: Rect, viewport: Rect) -> Rect {
    match effect.kind() {
        ModalEffectKind::PopScale => {
            let t = ease_out_cubic(effect.progress());
            let scale = 0.6 + 0.4 * t;
            scale_rect(base, scale)
        }
        ModalEffectKind::SlideUp => {
            let t = ease_out_cubic(effect.progress());
            let viewport_bottom = viewport.y.saturating_add(viewport.height);
            let base_bottom = base.y.saturating_add(base.height);
            let max_offset = viewport_bottom.saturating_sub(base_bottom);
            let offset = max_offset.min(base.height.saturating_div(2)).min(6);
            let y_offset = ((1.0 - t) * f32::from(offset)).round() as u16;
            Rect {
                y: base.y.saturating_add(y_offset),
                ..base
            }
        }
    }
}

/// Clip a menu dropping out of the navigation bar to its visible height.
#[must_use]
pub fn apply_panel_effect(effect: &PanelEffect, base: Rect) -> Rect {
    match effect.kind() {
        PanelEffectKind::SlideDown => {
            let t = ease_out_cubic(effect.progress());
            let height = (f32::from(base.height) * t).round() as u16;
            Rect {
                height: height.clamp(1, base.height.max(1)),
                ..base
            }
        }
    }
}

/// How far a hero line is through its reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStage {
    /// Not started; the line keeps its row but stays blank.
    Hidden,
    Fading,
    Shown,
}

#[must_use]
pub fn reveal_stage(progress: f32) -> RevealStage {
    if progress <= 0.0 {
        RevealStage::Hidden
    } else if progress < 0.5 {
        RevealStage::Fading
    } else {
        RevealStage::Shown
    }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
