//! Color themes for the site
//!
//! Three fixed palettes selected by name from `unveil.toml`. Only the tokens
//! the sections actually consume are modeled; this is not a general design
//! token system.

use serde::{Deserialize, Serialize};
use unveil_core::Color;

/// Named palette selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    /// Deep blue-black with cyan accents
    #[default]
    Midnight,
    /// Dark teal with green accents
    Aurora,
    /// Warm charcoal with orange accents
    Ember,
}

/// Resolved colors for one theme
#[derive(Clone, Copy, Debug)]
pub struct ThemeTokens {
    pub background: Color,
    pub surface: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
}

impl ColorTheme {
    pub fn tokens(&self) -> ThemeTokens {
        match self {
            ColorTheme::Midnight => ThemeTokens {
                background: Color::hex(0x05070F),
                surface: Color::hex(0x0C1120),
                accent: Color::hex(0x4FD1FF),
                accent_soft: Color::hex(0x4FD1FF).with_alpha(0.12),
                text_primary: Color::hex(0xF2F5FA),
                text_secondary: Color::hex(0x8A93A8),
                border: Color::rgba(1.0, 1.0, 1.0, 0.08),
            },
            ColorTheme::Aurora => ThemeTokens {
                background: Color::hex(0x04100C),
                surface: Color::hex(0x0A1A14),
                accent: Color::hex(0x3BE8A0),
                accent_soft: Color::hex(0x3BE8A0).with_alpha(0.12),
                text_primary: Color::hex(0xEDFAF4),
                text_secondary: Color::hex(0x7FA294),
                border: Color::rgba(1.0, 1.0, 1.0, 0.07),
            },
            ColorTheme::Ember => ThemeTokens {
                background: Color::hex(0x120B08),
                surface: Color::hex(0x1E1310),
                accent: Color::hex(0xFF8A4C),
                accent_soft: Color::hex(0xFF8A4C).with_alpha(0.14),
                text_primary: Color::hex(0xFBF3EE),
                text_secondary: Color::hex(0xA88E80),
                border: Color::rgba(1.0, 1.0, 1.0, 0.08),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parses_by_lowercase_name() {
        #[derive(Deserialize)]
        struct Probe {
            theme: ColorTheme,
        }

        let probe: Probe = toml::from_str("theme = \"aurora\"").unwrap();
        assert_eq!(probe.theme, ColorTheme::Aurora);
    }

    #[test]
    fn test_default_theme_is_midnight() {
        assert_eq!(ColorTheme::default(), ColorTheme::Midnight);
    }

    #[test]
    fn test_each_theme_has_distinct_accent() {
        let accents = [
            ColorTheme::Midnight.tokens().accent,
            ColorTheme::Aurora.tokens().accent,
            ColorTheme::Ember.tokens().accent,
        ];
        assert_ne!(accents[0], accents[1]);
        assert_ne!(accents[1], accents[2]);
    }
}
