//! Polish translations

use super::Key;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref TRANSLATIONS: HashMap<Key, &'static str> = {
        let mut m = HashMap::new();

        m.insert(Key::AppName, "Wyszukiwarka tekstów");

        m.insert(Key::SearchTitle, "Szukaj");
        m.insert(Key::SearchButton, "Szukaj");

        m.insert(Key::ResultsTitle, "Wyniki");
        m.insert(Key::IdlePrompt, "Wpisz fragment tekstu piosenki i naciśnij Enter");
        m.insert(Key::Searching, "Wyszukiwanie...");
        m.insert(Key::NoResults, "Nie znaleziono wyników");
        m.insert(Key::ErrorTemplate, "Wystąpił błąd: {}");
        m.insert(Key::ServerError, "Błąd serwera");

        m.insert(Key::CloseModal, "Zamknij");

        m.insert(Key::HintSearchBar, "Enter: szukaj · Tab: wyniki · Ctrl+C: wyjście");
        m.insert(Key::HintResults, "↑↓: wybór · Enter: tekst · /: szukaj · q: wyjście");
        m.insert(Key::HintModal, "↑↓ PgUp PgDn: przewijanie · Esc: zamknij");

        m
    };
}

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
