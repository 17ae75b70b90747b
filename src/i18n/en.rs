//! English translations

use super::Key;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref TRANSLATIONS: HashMap<Key, &'static str> = {
        let mut m = HashMap::new();

        m.insert(Key::AppName, "Lyrics Search");

        m.insert(Key::SearchTitle, "Search");
        m.insert(Key::SearchButton, "Search");

        m.insert(Key::ResultsTitle, "Results");
        m.insert(Key::IdlePrompt, "Type a line from a song and press Enter");
        m.insert(Key::Searching, "Searching...");
        m.insert(Key::NoResults, "No results found");
        m.insert(Key::ErrorTemplate, "An error occurred: {}");
        m.insert(Key::ServerError, "Server error");

        m.insert(Key::CloseModal, "Close");

        m.insert(Key::HintSearchBar, "Enter: search · Tab: results · Ctrl+C: quit");
        m.insert(Key::HintResults, "↑↓: select · Enter: lyrics · /: search · q: quit");
        m.insert(Key::HintModal, "↑↓ PgUp PgDn: scroll · Esc: close");

        m
    };
}

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
