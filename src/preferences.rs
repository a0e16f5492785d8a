use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{COOKIE_STORAGE_KEY, LANGUAGE_STORAGE_KEY, THEME_STORAGE_KEY};
use crate::i18n::Language;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not read {0}")]
    Read(String),
    #[error("could not write {0}")]
    Write(String),
    #[error("stored value is not valid: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    /// Succeeds only when the browser actually exposes local storage.
    pub fn open() -> Result<Self, PreferenceError> {
        Self::storage().map(|_| Self)
    }

    fn storage() -> Result<web_sys::Storage, PreferenceError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(PreferenceError::Unavailable)
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| PreferenceError::Read(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| PreferenceError::Write(key.to_string()))
    }
}

/// In-memory store, used when the browser has storage disabled. Choices
/// then last for the session only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Falls back to a [`MemoryStore`] when `primary` could not be opened.
pub fn store_or_memory(primary: Result<Rc<dyn PreferenceStore>, PreferenceError>) -> Rc<dyn PreferenceStore> {
    match primary {
        Ok(store) => store,
        Err(e) => {
            warn!("{}; preferences will not outlive this session", e);
            Rc::new(MemoryStore::default())
        }
    }
}

/// The browser's preference store: local storage when available, memory
/// otherwise.
pub fn open_preference_store() -> Rc<dyn PreferenceStore> {
    store_or_memory(LocalStorageStore::open().map(|store| Rc::new(store) as Rc<dyn PreferenceStore>))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookieChoice {
    Accepted,
    Declined,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieConsent {
    pub choice: CookieChoice,
    pub analytics: bool,
    pub marketing: bool,
}

impl CookieConsent {
    /// Accepts the JSON record as well as a bare `accepted`/`declined`
    /// string left by older builds.
    pub fn decode(raw: &str) -> Result<CookieConsent, PreferenceError> {
        match raw {
            "accepted" => Ok(CookieConsent { choice: CookieChoice::Accepted, analytics: true, marketing: true }),
            "declined" => Ok(CookieConsent { choice: CookieChoice::Declined, analytics: false, marketing: false }),
            _ => Ok(serde_json::from_str(raw)?),
        }
    }
}

/// Everything the site remembers about a visitor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
    pub cookie_consent: Option<CookieConsent>,
}

impl Preferences {
    /// Reads every preference, falling back to defaults for anything missing
    /// or unreadable. `fallback_language` is used when no language is stored.
    pub fn load(store: &dyn PreferenceStore, fallback_language: Language) -> Preferences {
        let theme = read(store, THEME_STORAGE_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        let language = read(store, LANGUAGE_STORAGE_KEY)
            .and_then(|raw| Language::from_code(&raw))
            .unwrap_or(fallback_language);
        let cookie_consent = read(store, COOKIE_STORAGE_KEY).and_then(|raw| {
            CookieConsent::decode(&raw)
                .map_err(|e| warn!("ignoring stored cookie consent: {}", e))
                .ok()
        });

        Preferences {
            theme,
            language,
            cookie_consent,
        }
    }

    pub fn save_theme(store: &dyn PreferenceStore, theme: Theme) -> Result<(), PreferenceError> {
        store.set(THEME_STORAGE_KEY, theme.as_str())
    }

    pub fn save_language(store: &dyn PreferenceStore, language: Language) -> Result<(), PreferenceError> {
        store.set(LANGUAGE_STORAGE_KEY, language.code())
    }

    pub fn save_cookie_consent(
        store: &dyn PreferenceStore,
        consent: &CookieConsent,
    ) -> Result<(), PreferenceError> {
        store.set(COOKIE_STORAGE_KEY, &serde_json::to_string(consent)?)
    }
}

fn read(store: &dyn PreferenceStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("preference {} unavailable: {}", key, e);
            None
        }
    }
}

/// Preferences plus the store they persist to, shared through a
/// `ContextProvider`. Setters write through and re-render consumers.
#[derive(Clone)]
pub struct PreferencesContext {
    current: yew::UseStateHandle<Preferences>,
    store: Rc<dyn PreferenceStore>,
}

impl PartialEq for PreferencesContext {
    fn eq(&self, other: &Self) -> bool {
        *self.current == *other.current && Rc::ptr_eq(&self.store, &other.store)
    }
}

impl PreferencesContext {
    pub fn new(current: yew::UseStateHandle<Preferences>, store: Rc<dyn PreferenceStore>) -> Self {
        Self { current, store }
    }

    pub fn get(&self) -> Preferences {
        *self.current
    }

    pub fn set_theme(&self, theme: Theme) {
        if let Err(e) = Preferences::save_theme(self.store.as_ref(), theme) {
            warn!("theme not persisted: {}", e);
        }
        self.current.set(Preferences { theme, ..*self.current });
    }

    pub fn set_language(&self, language: Language) {
        if let Err(e) = Preferences::save_language(self.store.as_ref(), language) {
            warn!("language not persisted: {}", e);
        }
        self.current.set(Preferences { language, ..*self.current });
    }

    pub fn set_cookie_consent(&self, consent: CookieConsent) {
        if let Err(e) = Preferences::save_cookie_consent(self.store.as_ref(), &consent) {
            warn!("cookie consent not persisted: {}", e);
        }
        self.current.set(Preferences {
            cookie_consent: Some(consent),
            ..*self.current
        });
    }
}

/// Mirrors the theme and language onto `<html>`.
pub fn apply_to_document(preferences: &Preferences) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root
        .class_list()
        .toggle_with_force("dark", preferences.theme == Theme::Dark);
    let _ = root.set_attribute("lang", preferences.language.code());
    let _ = root.set_attribute("dir", preferences.language.dir());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_gives_defaults() {
        let store = MemoryStore::default();
        let prefs = Preferences::load(&store, Language::En);
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn unavailable_storage_falls_back_to_memory() {
        let store = store_or_memory(Err(PreferenceError::Unavailable));
        Preferences::save_theme(store.as_ref(), Theme::Light).unwrap();
        assert_eq!(Preferences::load(store.as_ref(), Language::En).theme, Theme::Light);
    }

    #[test]
    fn available_store_is_kept() {
        let primary: Rc<dyn PreferenceStore> = Rc::new(MemoryStore::default());
        primary.set(LANGUAGE_STORAGE_KEY, "zh").unwrap();
        let store = store_or_memory(Ok(primary.clone()));
        assert!(Rc::ptr_eq(&store, &primary));
        assert_eq!(Preferences::load(store.as_ref(), Language::En).language, Language::Zh);
    }

    #[test]
    fn fallback_language_used_when_nothing_stored() {
        let store = MemoryStore::default();
        assert_eq!(Preferences::load(&store, Language::Fr).language, Language::Fr);
    }

    #[test]
    fn saved_values_load_back() {
        let store = MemoryStore::default();
        let consent = CookieConsent {
            choice: CookieChoice::Accepted,
            analytics: false,
            marketing: true,
        };
        Preferences::save_theme(&store, Theme::Light).unwrap();
        Preferences::save_language(&store, Language::Ar).unwrap();
        Preferences::save_cookie_consent(&store, &consent).unwrap();

        let prefs = Preferences::load(&store, Language::En);
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.language, Language::Ar);
        assert_eq!(prefs.cookie_consent, Some(consent));
    }

    #[test]
    fn last_write_wins() {
        let store = MemoryStore::default();
        Preferences::save_theme(&store, Theme::Light).unwrap();
        Preferences::save_theme(&store, Theme::Dark).unwrap();
        assert_eq!(Preferences::load(&store, Language::En).theme, Theme::Dark);
    }

    #[test]
    fn garbage_values_are_ignored() {
        let store = MemoryStore::default();
        store.set(THEME_STORAGE_KEY, "sepia").unwrap();
        store.set(LANGUAGE_STORAGE_KEY, "klingon").unwrap();
        store.set(COOKIE_STORAGE_KEY, "{not json").unwrap();
        let prefs = Preferences::load(&store, Language::Es);
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.language, Language::Es);
        assert_eq!(prefs.cookie_consent, None);
    }

    #[test]
    fn bare_choice_strings_still_decode() {
        let consent = CookieConsent::decode("declined").unwrap();
        assert_eq!(consent.choice, CookieChoice::Declined);
        assert!(!consent.analytics);
    }

    #[test]
    fn consent_serializes_lowercase_choice() {
        let consent = CookieConsent {
            choice: CookieChoice::Declined,
            analytics: false,
            marketing: false,
        };
        let json = serde_json::to_string(&consent).unwrap();
        assert!(json.contains("\"declined\""));
    }

    #[test]
    fn theme_toggle_flips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
