//! Colors and glyphs for the Hyperlink TUI.
//!
//! Light and dark palettes follow the site's brand blues; the high-contrast
//! option overrides either with terminal base colors.

use ratatui::style::{Color, Modifier, Style};

use hyperlink_engine::Theme;
use hyperlink_engine::ui::UiOptions;

/// Brand palette constants.
mod colors {
    use super::Color;

    // === Dark (navy) ===
    pub const NAVY_0: Color = Color::Rgb(10, 15, 30);
    pub const NAVY_1: Color = Color::Rgb(17, 24, 43);
    pub const NAVY_2: Color = Color::Rgb(27, 37, 62);
    pub const NAVY_3: Color = Color::Rgb(36, 49, 80);
    pub const NAVY_BORDER: Color = Color::Rgb(62, 78, 112);
    pub const SNOW: Color = Color::Rgb(236, 241, 250);
    pub const MIST: Color = Color::Rgb(182, 193, 214);
    pub const SLATE: Color = Color::Rgb(118, 131, 158);

    // === Light (paper) ===
    pub const PAPER_0: Color = Color::Rgb(250, 251, 254);
    pub const PAPER_1: Color = Color::Rgb(241, 244, 250);
    pub const PAPER_2: Color = Color::Rgb(226, 232, 243);
    pub const PAPER_3: Color = Color::Rgb(255, 255, 255);
    pub const PAPER_BORDER: Color = Color::Rgb(188, 198, 218);
    pub const INK: Color = Color::Rgb(17, 24, 39);
    pub const INK_SOFT: Color = Color::Rgb(55, 65, 81);
    pub const INK_MUTED: Color = Color::Rgb(107, 114, 128);

    // === Brand ===
    pub const BLUE: Color = Color::Rgb(37, 99, 235);
    pub const BLUE_BRIGHT: Color = Color::Rgb(96, 165, 250);
    pub const BLUE_DIM: Color = Color::Rgb(59, 91, 170);
    pub const CYAN: Color = Color::Rgb(34, 211, 238);
    pub const TEAL: Color = Color::Rgb(13, 148, 136);

    // === Status ===
    pub const GREEN: Color = Color::Rgb(34, 197, 94);
    pub const GREEN_DEEP: Color = Color::Rgb(21, 128, 61);
    pub const AMBER: Color = Color::Rgb(245, 158, 11);
    pub const AMBER_DEEP: Color = Color::Rgb(180, 83, 9);
    pub const RED: Color = Color::Rgb(248, 113, 113);
    pub const RED_DEEP: Color = Color::Rgb(185, 28, 28);
}

/// Resolved palette used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_popup: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: colors::NAVY_0,
            bg_panel: colors::NAVY_1,
            bg_highlight: colors::NAVY_2,
            bg_popup: colors::NAVY_3,
            border: colors::NAVY_BORDER,
            text_primary: colors::SNOW,
            text_secondary: colors::MIST,
            text_muted: colors::SLATE,
            primary: colors::BLUE_BRIGHT,
            primary_dim: colors::BLUE_DIM,
            accent: colors::CYAN,
            success: colors::GREEN,
            warning: colors::AMBER,
            error: colors::RED,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: colors::PAPER_0,
            bg_panel: colors::PAPER_1,
            bg_highlight: colors::PAPER_2,
            bg_popup: colors::PAPER_3,
            border: colors::PAPER_BORDER,
            text_primary: colors::INK,
            text_secondary: colors::INK_SOFT,
            text_muted: colors::INK_MUTED,
            primary: colors::BLUE,
            primary_dim: colors::BLUE_DIM,
            accent: colors::TEAL,
            success: colors::GREEN_DEEP,
            warning: colors::AMBER_DEEP,
            error: colors::RED_DEEP,
        }
    }

    #[must_use]
    pub fn high_contrast(theme: Theme) -> Self {
        let (bg, fg) = if theme.is_dark() {
            (Color::Black, Color::White)
        } else {
            (Color::White, Color::Black)
        };
        Self {
            bg,
            bg_panel: bg,
            bg_highlight: Color::DarkGray,
            bg_popup: bg,
            border: fg,
            text_primary: fg,
            text_secondary: fg,
            text_muted: Color::Gray,
            primary: Color::Blue,
            primary_dim: Color::Blue,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

#[must_use]
pub fn palette(theme: Theme, options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast(theme)
    } else if theme.is_dark() {
        Palette::dark()
    } else {
        Palette::light()
    }
}

/// ASCII/Unicode glyphs for icons and indicators.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bullet: &'static str,
    pub check: &'static str,
    pub cross: &'static str,
    pub selected: &'static str,
    pub prev: &'static str,
    pub next: &'static str,
    pub dot_active: &'static str,
    pub dot_inactive: &'static str,
    pub checkbox_on: &'static str,
    pub checkbox_off: &'static str,
    pub dropdown: &'static str,
    pub status_ok: &'static str,
    pub info: &'static str,
    pub arrow_right: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            bullet: "*",
            check: "+",
            cross: "x",
            selected: ">",
            prev: "<",
            next: ">",
            dot_active: "o",
            dot_inactive: ".",
            checkbox_on: "[x]",
            checkbox_off: "[ ]",
            dropdown: "v",
            status_ok: "*",
            info: "i",
            arrow_right: "->",
        }
    } else {
        Glyphs {
            bullet: "•",
            check: "✓",
            cross: "✗",
            selected: "▸",
            prev: "‹",
            next: "›",
            dot_active: "●",
            dot_inactive: "○",
            checkbox_on: "☑",
            checkbox_off: "☐",
            dropdown: "▾",
            status_ok: "●",
            info: "ℹ",
            arrow_right: "→",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn badge(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn link(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// The entry matching the current route.
    #[must_use]
    pub fn active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// The element holding keyboard focus.
    #[must_use]
    pub fn focused(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_disabled(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_muted)
            .bg(palette.bg_highlight)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use hyperlink_engine::Theme;
    use hyperlink_engine::ui::UiOptions;

    use super::{Palette, glyphs, palette};

    #[test]
    fn palette_follows_theme() {
        let options = UiOptions::default();
        assert_eq!(palette(Theme::Dark, options), Palette::dark());
        assert_eq!(palette(Theme::Light, options), Palette::light());
        assert_ne!(Palette::dark().bg, Palette::light().bg);
    }

    #[test]
    fn high_contrast_overrides_both_themes() {
        let options = UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        };
        assert_eq!(
            palette(Theme::Light, options),
            Palette::high_contrast(Theme::Light)
        );
        assert_ne!(
            palette(Theme::Light, options).bg,
            palette(Theme::Dark, options).bg
        );
    }

    #[test]
    fn ascii_glyphs_stay_ascii() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let g = glyphs(options);
        for glyph in [
            g.bullet,
            g.check,
            g.cross,
            g.selected,
            g.prev,
            g.next,
            g.dot_active,
            g.dot_inactive,
            g.checkbox_on,
            g.checkbox_off,
            g.dropdown,
            g.status_ok,
            g.info,
            g.arrow_right,
        ] {
            assert!(glyph.is_ascii(), "{glyph} is not ascii");
        }
    }
}
