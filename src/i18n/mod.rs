//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    EnUS,
    /// Swedish
    #[default]
    SvSE,
}

impl Locale {
    /// Resolve a language code such as `en`, `sv` or `sv-SE`
    pub fn from_code(code: &str) -> Self {
        let lang = code.split(['-', '_']).next().unwrap_or_default();
        if lang.eq_ignore_ascii_case("en") {
            Locale::EnUS
        } else {
            Locale::SvSE
        }
    }

    /// Short language code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::SvSE => "sv",
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, sv))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("AH Kit", "AH Kit"));

    // Module error panel
    map.insert("module-error", ("An error occurred.", "Ett fel inträffade."));
    map.insert(
        "module-error-hint",
        ("Check your internet connection.", "Kontrollera internetanslutning."),
    );
    map.insert("module-retry", ("Reload", "Ladda om"));

    // Error boundary fallback
    map.insert("fallback-title", ("Oops!", "Hoppsan!"));
    map.insert(
        "fallback-subtitle",
        (
            "Something went wrong, hope you can forgive me.",
            "Där gick något fel, hoppas du förlåter mig.",
        ),
    );
    map.insert("fallback-reload", ("Reload page", "Ladda om sidan"));

    // Gallery
    map.insert("gallery-buttons", ("Buttons", "Knappar"));
    map.insert("gallery-fields", ("Fields", "Fält"));
    map.insert("gallery-modules", ("Modules", "Moduler"));
    map.insert("gallery-toggle-loading", ("Toggle loading", "Växla laddning"));
    map.insert("gallery-toggle-error", ("Toggle error", "Växla fel"));
    map.insert("gallery-toggle-print", ("Print preview", "Förhandsgranska utskrift"));
    map.insert("gallery-break-render", ("Break render", "Krascha rendering"));
    map.insert("gallery-toggle-theme", ("Dark mode", "Mörkt läge"));
    map.insert("gallery-toggle-locale", ("Svenska", "English"));
    map.insert("gallery-submit", ("Submit", "Skicka"));
    map.insert("gallery-name", ("Name", "Namn"));
    map.insert("gallery-name-required", ("Name is required", "Namn krävs"));
    map.insert("gallery-notes", ("Notes", "Anteckningar"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, sv)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::SvSE => SharedString::from(sv),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}
