//! UI Settings
//!
//! Persisted theme and locale selection for the gallery, stored as TOML in the
//! platform config directory.

use std::path::PathBuf;

use locale_config::Locale as SystemLocale;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::SETTINGS_FILE;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;
use crate::theme::{Theme, ThemeMode, parse_hex_color};

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(SETTINGS_FILE);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted UI settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    theme: Option<ThemeMode>,
    locale: Option<String>,
    /// Module background override, `#RRGGBB`
    base_color: Option<String>,
}

impl UiSettings {
    /// Load settings from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(&path)?;

        let mut settings = Self::from_toml(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })?;

        // Detect system locale if not set
        if settings.locale.as_ref().is_none_or(|l| l.is_empty()) {
            if let Some((lang, _)) = SystemLocale::current().to_string().split_once('-') {
                settings.locale = Some(lang.to_string());
            }
        }

        Ok(settings)
    }

    /// Parse settings; an empty document yields defaults
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(toml::from_str(value)?)
    }

    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.unwrap_or_default()
    }

    pub fn locale(&self) -> Locale {
        self.locale
            .as_deref()
            .map(Locale::from_code)
            .unwrap_or_default()
    }

    /// Build the theme, applying the base color override
    pub fn resolve_theme(&self) -> Result<Theme> {
        let theme = Theme::for_mode(self.theme_mode());
        match self.base_color.as_deref() {
            Some(hex) => Ok(theme.with_base_color(parse_hex_color(hex)?)),
            None => Ok(theme),
        }
    }

    // ==================== Setters ====================

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme = Some(mode);
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale.code().to_string());
    }

    pub fn set_base_color(&mut self, base_color: Option<String>) {
        self.base_color = base_color;
    }
}

/// Save settings to disk
pub fn save_settings(settings: &UiSettings) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(settings)?;
    std::fs::write(path, value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::rgb;

    #[test]
    fn test_empty_document_yields_defaults() {
        let settings = UiSettings::from_toml("  \n").ok();
        assert_eq!(settings, Some(UiSettings::new()));
    }

    #[test]
    fn test_parse_settings() {
        let settings = UiSettings::from_toml(
            r##"
theme = "dark"
locale = "en"
base_color = "#203040"
"##,
        );
        let Ok(settings) = settings else {
            panic!("settings should parse");
        };
        assert_eq!(settings.theme_mode(), ThemeMode::Dark);
        assert_eq!(settings.locale(), Locale::EnUS);
        let theme = settings.resolve_theme().ok();
        assert_eq!(theme.and_then(|t| t.base_color), Some(rgb(0x203040)));
    }

    #[test]
    fn test_invalid_base_color_is_an_error() {
        let mut settings = UiSettings::new();
        settings.set_base_color(Some("blue".to_string()));
        assert!(settings.resolve_theme().is_err());
    }

    #[test]
    fn test_settings_roundtrip_through_toml() {
        let mut settings = UiSettings::new();
        settings.set_theme_mode(ThemeMode::Dark);
        settings.set_locale(Locale::SvSE);
        let Ok(value) = toml::to_string(&settings) else {
            panic!("settings should serialize");
        };
        assert_eq!(UiSettings::from_toml(&value).ok(), Some(settings));
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(UiSettings::from_toml("theme = [").is_err());
    }
}
