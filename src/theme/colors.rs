//! Colors - AH Theme Colors

use gpui::{Rgba, rgb};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed colors that do not change with the theme
pub struct AhColors;

impl AhColors {
    /// Normal button background
    pub fn button_normal_bg() -> Rgba { rgb(0xeeeeee) }
    /// White, used for text on colored buttons and the default module background
    pub fn white() -> Rgba { rgb(0xffffff) }
    /// Field error message
    pub fn error_text() -> Rgba { rgb(0xef4444) }
    /// Field border when an error is shown
    pub fn input_border_error() -> Rgba { rgb(0xef4444) }
}

/// Light or dark base palette
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Resolved theme handed to each component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Module background; white when unset
    pub base_color: Option<Rgba>,
    /// Text on light backgrounds
    pub dark_text: Rgba,
    /// Text on dark backgrounds
    pub light_text: Rgba,
    /// Subdued text, also the important button background
    pub washed_text: Rgba,
    /// Negative button background
    pub negative_color: Rgba,
    /// Positive button background
    pub positive_color: Rgba,
    /// Submit button background
    pub accent: Rgba,
}

impl Theme {
    /// Light theme with no module background override
    pub fn light() -> Self {
        Self {
            base_color: None,
            dark_text: rgb(0x1f2937),
            light_text: rgb(0xffffff),
            washed_text: rgb(0x9ca3af),
            negative_color: rgb(0xef4444),
            positive_color: rgb(0x22c55e),
            accent: rgb(0x2cb3b8),
        }
    }

    /// Dark theme
    pub fn dark() -> Self {
        Self {
            base_color: Some(rgb(0x1a2332)),
            washed_text: rgb(0x6b7280),
            ..Self::light()
        }
    }

    /// Theme for a mode
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Override the module background
    pub fn with_base_color(mut self, color: Rgba) -> Self {
        self.base_color = Some(color);
        self
    }

    /// Module background
    pub fn module_bg(&self) -> Rgba {
        self.base_color.unwrap_or_else(AhColors::white)
    }

    /// Text color readable on the module background
    pub fn module_text(&self) -> Rgba {
        if is_light(self.module_bg()) {
            self.dark_text
        } else {
            self.light_text
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Whether a color counts as light (YIQ brightness of at least 128)
pub fn is_light(color: Rgba) -> bool {
    let yiq = (color.r * 299.0 + color.g * 587.0 + color.b * 114.0) / 1000.0 * 255.0;
    yiq >= 128.0
}

/// Parse a `#RRGGBB` color
pub fn parse_hex_color(value: &str) -> Result<Rgba> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return Err(Error::Invalid {
            message: format!("Expected #RRGGBB color, got {value:?}"),
        });
    }
    let parsed = u32::from_str_radix(hex, 16).map_err(|e| Error::Invalid {
        message: format!("Invalid color {value:?}: {e}"),
    })?;
    Ok(rgb(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_light() {
        assert!(is_light(rgb(0xffffff)));
        assert!(is_light(rgb(0xeeeeee)));
        assert!(!is_light(rgb(0x000000)));
        assert!(!is_light(rgb(0x1a2332)));
    }

    #[test]
    fn test_module_colors_follow_base() {
        let light = Theme::light();
        assert_eq!(light.module_bg(), rgb(0xffffff));
        assert_eq!(light.module_text(), light.dark_text);

        let dark = Theme::dark();
        assert_eq!(dark.module_text(), dark.light_text);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#2cb3b8").ok(), Some(rgb(0x2cb3b8)));
        assert_eq!(parse_hex_color("ffffff").ok(), Some(rgb(0xffffff)));
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
    }
}
