//! Parrot/neon theme tokens for the Cauldron form.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, the count input)
//! - **Positive**: Neon green (well-filled sliders)
//! - **Negative**: Hot pink (errors)
//! - **Warning**: Neon orange (ignored counts)
//! - **Neutral**: Cool purple (bounds sliders)
//! - **Muted**: Steel blue (unfocused text, hints)

use ratatui::style::{Color, Modifier, Style};

/// Parrot/neon theme for the Cauldron form.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Neon green (high weights)
    pub positive: Color,
    /// Hot pink (errors)
    pub negative: Color,
    /// Neon orange (warnings)
    pub warning: Color,
    /// Cool purple (bounds, secondary)
    pub neutral: Color,
    /// Steel blue (muted text)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    /// Create the default Parrot/neon theme
    pub const fn parrot_neon() -> Self {
        Self {
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
        }
    }

    /// Bar color for a slider's fill ratio (empty -> muted, full -> positive).
    pub fn fill_color(&self, ratio: f64) -> Color {
        match ratio {
            r if r >= 0.75 => self.positive,
            r if r >= 0.4 => self.accent,
            r if r > 0.0 => self.neutral,
            _ => self.muted,
        }
    }
}

const THEME: Theme = Theme::parrot_neon();

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

/// Style for a slider bar with the given fill ratio.
pub fn fill(ratio: f64) -> Style {
    Style::default().fg(THEME.fill_color(ratio))
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        neutral()
    }
}

/// Reverse-video highlight for the focused row.
pub fn focused() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.positive, Color::Rgb(0, 255, 128));
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_fill_color() {
        let theme = Theme::default();
        assert_eq!(theme.fill_color(1.0), theme.positive);
        assert_eq!(theme.fill_color(0.5), theme.accent);
        assert_eq!(theme.fill_color(0.1), theme.neutral);
        assert_eq!(theme.fill_color(0.0), theme.muted);
    }

    #[test]
    fn test_panel_styles() {
        assert_eq!(panel_border(true), accent());
        assert_eq!(panel_border(false), muted());
    }
}
