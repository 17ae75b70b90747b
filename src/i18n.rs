//! Localized strings for the interface.
//!
//! - pl.rs: Polish translations (default, matches the server's audience)
//! - en.rs: English translations

mod en;
mod pl;

use std::collections::HashMap;
use std::str::FromStr;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Polish,
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Polish => "pl",
            Language::English => "en",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::Polish, Language::English]
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::all()
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| format!("unsupported language '{}'", s.trim()))
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    AppName,

    // Search bar
    SearchTitle,
    SearchButton,

    // Results area
    ResultsTitle,
    IdlePrompt,
    Searching,
    NoResults,
    /// Contains a single `{}` placeholder for the failure message.
    ErrorTemplate,
    ServerError,

    // Modal
    CloseModal,

    // Key hints
    HintSearchBar,
    HintResults,
    HintModal,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::Polish => pl::translations(),
        Language::English => en::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }

    /// Error placeholder with `detail` substituted into the template.
    pub fn error(&self, detail: &str) -> String {
        self.get(Key::ErrorTemplate).replacen("{}", detail, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[Key] = &[
        Key::AppName,
        Key::SearchTitle,
        Key::SearchButton,
        Key::ResultsTitle,
        Key::IdlePrompt,
        Key::Searching,
        Key::NoResults,
        Key::ErrorTemplate,
        Key::ServerError,
        Key::CloseModal,
        Key::HintSearchBar,
        Key::HintResults,
        Key::HintModal,
    ];

    #[test]
    fn test_every_key_is_translated() {
        for lang in Language::all() {
            for key in ALL_KEYS {
                assert_ne!(t(*lang, *key), "???", "{:?} missing for {:?}", key, lang);
            }
        }
    }

    #[test]
    fn test_error_templates_have_one_placeholder() {
        for lang in Language::all() {
            assert_eq!(t(*lang, Key::ErrorTemplate).matches("{}").count(), 1);
        }
    }

    #[test]
    fn test_error_interpolation() {
        let locale = Locale::new(Language::Polish);
        assert_eq!(locale.error("Błąd serwera"), "Wystąpił błąd: Błąd serwera");

        let locale = Locale::new(Language::English);
        assert_eq!(locale.error("boom"), "An error occurred: boom");
    }

    #[test]
    fn test_error_detail_braces_are_kept_verbatim() {
        let locale = Locale::new(Language::English);
        assert_eq!(locale.error("{}"), "An error occurred: {}");
    }

    #[test]
    fn test_language_from_code() {
        assert_eq!("pl".parse::<Language>(), Ok(Language::Polish));
        assert_eq!(" EN ".parse::<Language>(), Ok(Language::English));
        assert!("de".parse::<Language>().is_err());
    }
}
