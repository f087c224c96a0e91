//! # Theme System
//!
//! Centralized colors for the scorecard TUI. Rendering code references
//! [`Theme`] fields instead of hardcoding `ratatui::style::Color` values;
//! the active theme is chosen by name via config or the `--theme` flag.
//!
//! Band badges reuse the semantic colors: Excellent is `success`, Good is
//! `accent`, Average is `secondary`, Below Avg is `error`.

use crate::form::ScoreBand;
use ratatui::style::Color;

/// All colors used by the TUI, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name matched against config / `--theme`.
    pub name: &'static str,

    /// Main background color for panels.
    pub bg: Color,
    /// Primary text color.
    pub fg: Color,
    /// Muted/secondary text (hints, footer, blurred borders).
    pub fg_dim: Color,

    /// Primary accent: focused borders, the focus glow, headings.
    pub accent: Color,
    /// Secondary accent: the Average band, the submit control.
    pub secondary: Color,

    /// Success / green indicator (Excellent band, progress fill).
    pub success: Color,
    /// Error / red indicator (validation messages, Below Avg band).
    pub error: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// Color for a band badge.
    pub fn band_color(&self, band: ScoreBand) -> Color {
        match band {
            ScoreBand::Excellent => self.success,
            ScoreBand::Good => self.accent,
            ScoreBand::Average => self.secondary,
            ScoreBand::BelowAvg => self.error,
        }
    }
}

static BUILT_IN_THEMES: [Theme; 4] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
        success: Color::Rgb(166, 227, 161),   // green
        error: Color::Rgb(243, 139, 168),     // red
    },
    // 1 - Catppuccin Macchiato
    Theme {
        name: "Catppuccin Macchiato",
        bg: Color::Rgb(36, 39, 58),           // base
        fg: Color::Rgb(202, 211, 245),        // text
        fg_dim: Color::Rgb(110, 115, 141),    // overlay0
        accent: Color::Rgb(138, 173, 244),    // blue
        secondary: Color::Rgb(238, 212, 159), // yellow
        success: Color::Rgb(166, 218, 149),   // green
        error: Color::Rgb(237, 135, 150),     // red
    },
    // 2 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),    // cyan
        secondary: Color::Rgb(241, 250, 140), // yellow
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
    },
    // 3 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(235, 203, 139), // yellow
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
    },
];

// Verify Catppuccin themes use the actual palette values.
#[cfg(test)]
mod tests {
    use super::*;

    /// Convert a catppuccin color to a ratatui Color via its RGB values.
    fn ctp(color: catppuccin::Color) -> Color {
        Color::Rgb(color.rgb.r, color.rgb.g, color.rgb.b)
    }

    #[test]
    fn test_all_themes_count() {
        assert_eq!(Theme::all().len(), 4);
    }

    #[test]
    fn test_default_is_mocha() {
        assert_eq!(Theme::default_theme().name, "Catppuccin Mocha");
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert!(Theme::by_name("catppuccin mocha").is_some());
        assert!(Theme::by_name("DRACULA").is_some());
        assert!(Theme::by_name("nonexistent").is_none());
    }

    #[test]
    fn test_catppuccin_mocha_matches_palette() {
        let mocha = catppuccin::PALETTE.mocha.colors;
        let theme = Theme::default_theme();
        assert_eq!(theme.bg, ctp(mocha.base));
        assert_eq!(theme.fg, ctp(mocha.text));
        assert_eq!(theme.accent, ctp(mocha.blue));
        assert_eq!(theme.secondary, ctp(mocha.yellow));
        assert_eq!(theme.success, ctp(mocha.green));
        assert_eq!(theme.error, ctp(mocha.red));
    }

    #[test]
    fn test_catppuccin_macchiato_matches_palette() {
        let macchiato = catppuccin::PALETTE.macchiato.colors;
        let theme = Theme::by_name("Catppuccin Macchiato").expect("theme exists");
        assert_eq!(theme.bg, ctp(macchiato.base));
        assert_eq!(theme.fg, ctp(macchiato.text));
        assert_eq!(theme.accent, ctp(macchiato.blue));
    }

    #[test]
    fn test_band_colors_are_semantic() {
        let theme = Theme::default_theme();
        assert_eq!(theme.band_color(ScoreBand::Excellent), theme.success);
        assert_eq!(theme.band_color(ScoreBand::Good), theme.accent);
        assert_eq!(theme.band_color(ScoreBand::Average), theme.secondary);
        assert_eq!(theme.band_color(ScoreBand::BelowAvg), theme.error);
    }

    #[test]
    fn test_all_themes_have_distinct_names() {
        let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len(), "duplicate theme names found");
    }
}
