//! The two theme color triples.

use serde::Serialize;

use super::mode::ColorMode;

/// Background, foreground and arrow colors shared by every bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub background: &'static str,
    pub foreground: &'static str,
    pub arrow_color: &'static str,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        background: "#FFFFFF",
        foreground: "#000000",
        arrow_color: "#000000",
    };

    pub const DARK: Theme = Theme {
        background: "#000000",
        foreground: "#FFFFFF",
        arrow_color: "#9BA7B6",
    };

    /// The triple for `mode`.
    pub const fn for_mode(mode: ColorMode) -> Theme {
        match mode {
            ColorMode::Light => Theme::LIGHT,
            ColorMode::Dark => Theme::DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode() {
        assert_eq!(Theme::for_mode(ColorMode::Light), Theme::LIGHT);
        assert_eq!(Theme::for_mode(ColorMode::Dark), Theme::DARK);
    }

    #[test]
    fn test_variants_differ_everywhere() {
        assert_ne!(Theme::LIGHT.background, Theme::DARK.background);
        assert_ne!(Theme::LIGHT.foreground, Theme::DARK.foreground);
        assert_ne!(Theme::LIGHT.arrow_color, Theme::DARK.arrow_color);
    }
}
