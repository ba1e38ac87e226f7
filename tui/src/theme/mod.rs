//! Theme and Colors
//!
//! Two palettes, dark and light, picked from [`folio_core::Theme`]. Widgets
//! never hard-code colors; they take a [`Palette`].

use ratatui::style::{Color, Modifier, Style};

use folio_core::Theme;

// ============================================================================
// Dark Palette
// ============================================================================

const DARK_BACKGROUND: Color = Color::Rgb(12, 12, 16);
const DARK_TEXT: Color = Color::Rgb(235, 235, 240);
const DARK_MUTED: Color = Color::Rgb(140, 140, 155);
const DARK_ACCENT: Color = Color::Rgb(129, 140, 248); // indigo
const DARK_TRACK: Color = Color::Rgb(45, 45, 58);
const DARK_SURFACE: Color = Color::Rgb(28, 28, 36);

// ============================================================================
// Light Palette
// ============================================================================

const LIGHT_BACKGROUND: Color = Color::Rgb(250, 250, 252);
const LIGHT_TEXT: Color = Color::Rgb(20, 20, 28);
const LIGHT_MUTED: Color = Color::Rgb(105, 105, 120);
const LIGHT_ACCENT: Color = Color::Rgb(79, 70, 229);
const LIGHT_TRACK: Color = Color::Rgb(220, 220, 232);
const LIGHT_SURFACE: Color = Color::Rgb(238, 238, 244);

// ============================================================================
// Shared
// ============================================================================

/// Success toasts
pub const SUCCESS_GREEN: Color = Color::Rgb(120, 230, 120);

/// Error toasts and validation messages
pub const ERROR_RED: Color = Color::Rgb(255, 80, 80);

/// Resolved colors for one theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Page background
    pub background: Color,
    /// Body text
    pub text: Color,
    /// Secondary text (descriptions, hints)
    pub muted: Color,
    /// Headings, typed text, focus markers
    pub accent: Color,
    /// Empty part of skill bars
    pub track: Color,
    /// Panels drawn over the page (menu, modal, header)
    pub surface: Color,
}

impl Palette {
    /// Palette for a theme
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: DARK_BACKGROUND,
                text: DARK_TEXT,
                muted: DARK_MUTED,
                accent: DARK_ACCENT,
                track: DARK_TRACK,
                surface: DARK_SURFACE,
            },
            Theme::Light => Self {
                background: LIGHT_BACKGROUND,
                text: LIGHT_TEXT,
                muted: LIGHT_MUTED,
                accent: LIGHT_ACCENT,
                track: LIGHT_TRACK,
                surface: LIGHT_SURFACE,
            },
        }
    }

    /// Body text
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Secondary text
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Section headings
    #[must_use]
    pub fn heading_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Accent text
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Panel background
    #[must_use]
    pub fn surface_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(dark, light);
        assert_ne!(dark.text, dark.background);
        assert_ne!(light.text, light.background);
    }
}
