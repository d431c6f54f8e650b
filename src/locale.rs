//! Active display language, its persistence, and the load gate.
//!
//! The store starts in `LoadState::Loading` with English selected. The
//! provider hydrates it once the page is painted by reading the persisted
//! tag; only then does it become `Ready`. Renderers branch on readiness so
//! the wrong language never flashes on screen.

use crate::config::LOCALE_STORAGE_KEY;
use crate::dictionary::{dictionary_for, Dictionary};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Id,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Id];

    /// The tag persisted to storage (`"en"` / `"id"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }

    /// Short label shown in the language switcher.
    pub const fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Id => "ID",
        }
    }

    /// Parse a tag, falling back to English for anything unsupported.
    pub fn resolve(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|e| {
            warn!("{}, using {}", e, Locale::En);
            Locale::En
        })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "en" => Ok(Locale::En),
            "id" => Ok(Locale::Id),
            other => Err(LocaleError::Unsupported(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    Unsupported(String),
    StorageUnavailable,
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::Unsupported(tag) => write!(f, "Unsupported locale tag '{}'", tag),
            LocaleError::StorageUnavailable => write!(f, "Local storage is not available"),
        }
    }
}

impl std::error::Error for LocaleError {}

/// Durable key-value storage holding the persisted locale tag.
pub trait LocaleStorage {
    fn read(&self) -> Result<Option<String>, LocaleError>;
    fn write(&self, tag: &str) -> Result<(), LocaleError>;
}

/// `window.localStorage`, under the `"locale"` key.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, LocaleError> {
        gloo_utils::window()
            .local_storage()
            .ok()
            .flatten()
            .ok_or(LocaleError::StorageUnavailable)
    }
}

impl LocaleStorage for BrowserStorage {
    fn read(&self) -> Result<Option<String>, LocaleError> {
        Self::storage()?
            .get_item(LOCALE_STORAGE_KEY)
            .map_err(|_| LocaleError::StorageUnavailable)
    }

    fn write(&self, tag: &str) -> Result<(), LocaleError> {
        Self::storage()?
            .set_item(LOCALE_STORAGE_KEY, tag)
            .map_err(|_| LocaleError::StorageUnavailable)
    }
}

/// In-memory storage. Clones share the same map, so a clone handed to a
/// fresh store behaves like the same browser after a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(tag: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(LOCALE_STORAGE_KEY.to_string(), tag.to_string());
        storage
    }
}

impl LocaleStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, LocaleError> {
        Ok(self.entries.borrow().get(LOCALE_STORAGE_KEY).cloned())
    }

    fn write(&self, tag: &str) -> Result<(), LocaleError> {
        self.entries
            .borrow_mut()
            .insert(LOCALE_STORAGE_KEY.to_string(), tag.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// Session-wide locale state.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleStore {
    locale: Locale,
    state: LoadState,
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleStore {
    pub fn new() -> Self {
        Self {
            locale: Locale::En,
            state: LoadState::Loading,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    /// Translations for the current locale.
    pub fn dictionary(&self) -> &'static Dictionary {
        dictionary_for(self.locale)
    }

    /// Read the persisted tag and mark the store ready. Only the first call
    /// reads storage; a missing, unreadable or unsupported value leaves
    /// English selected.
    pub fn hydrate(&mut self, storage: &dyn LocaleStorage) {
        if self.is_ready() {
            return;
        }

        self.locale = match storage.read() {
            Ok(Some(tag)) => Locale::resolve(&tag),
            Ok(None) => Locale::En,
            Err(e) => {
                warn!("{}, using {}", e, Locale::En);
                Locale::En
            }
        };
        self.state = LoadState::Ready;
        debug!("Locale store ready with '{}'", self.locale);
    }

    /// Switch language and persist the choice. A storage failure is logged;
    /// the in-session switch still happens.
    pub fn set_locale(&mut self, locale: Locale, storage: &dyn LocaleStorage) {
        info!("Locale changed: {} -> {}", self.locale, locale);
        self.locale = locale;
        if let Err(e) = storage.write(locale.as_str()) {
            warn!("Could not persist locale '{}': {}", locale, e);
        }
    }

    /// Switch by raw tag. Unsupported tags are ignored: neither the state
    /// nor storage is touched.
    pub fn set_locale_tag(
        &mut self,
        tag: &str,
        storage: &dyn LocaleStorage,
    ) -> Result<Locale, LocaleError> {
        let locale = tag.parse::<Locale>().map_err(|e| {
            warn!("Ignoring locale change: {}", e);
            e
        })?;
        self.set_locale(locale, storage);
        Ok(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_is_loading_english() {
        let store = LocaleStore::new();
        assert_eq!(store.locale(), Locale::En);
        assert_eq!(store.state(), LoadState::Loading);
        assert!(!store.is_ready());
    }

    #[test]
    fn hydrate_without_persisted_value_defaults_to_english() {
        let mut store = LocaleStore::new();
        store.hydrate(&MemoryStorage::new());
        assert_eq!(store.locale(), Locale::En);
        assert!(store.is_ready());
    }

    #[test]
    fn choice_survives_reload() {
        let storage = MemoryStorage::new();
        let mut session = LocaleStore::new();
        session.hydrate(&storage);
        session.set_locale(Locale::Id, &storage);
        assert_eq!(session.locale(), Locale::Id);

        let mut reloaded = LocaleStore::new();
        assert_eq!(reloaded.locale(), Locale::En);
        reloaded.hydrate(&storage);
        assert!(reloaded.is_ready());
        assert_eq!(reloaded.locale(), Locale::Id);
    }

    #[test]
    fn garbage_persisted_value_hydrates_as_english() {
        let mut store = LocaleStore::new();
        store.hydrate(&MemoryStorage::with_locale("fr"));
        assert_eq!(store.locale(), Locale::En);
        assert!(store.is_ready());
    }

    #[test]
    fn hydrate_reads_storage_once() {
        let storage = MemoryStorage::with_locale("id");
        let mut store = LocaleStore::new();
        store.hydrate(&storage);
        store.set_locale(Locale::En, &MemoryStorage::new());

        store.hydrate(&storage);
        assert_eq!(store.locale(), Locale::En);
    }

    #[test]
    fn unsupported_tag_is_ignored() {
        let storage = MemoryStorage::with_locale("id");
        let mut store = LocaleStore::new();
        store.hydrate(&storage);

        let err = store.set_locale_tag("de", &storage).unwrap_err();
        assert_eq!(err, LocaleError::Unsupported("de".to_string()));
        assert_eq!(store.locale(), Locale::Id);
        assert_eq!(storage.read().unwrap().as_deref(), Some("id"));

        assert_eq!(store.set_locale_tag("en", &storage), Ok(Locale::En));
        assert_eq!(storage.read().unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn dictionary_follows_locale() {
        let storage = MemoryStorage::new();
        let mut store = LocaleStore::new();
        store.hydrate(&storage);
        assert_eq!(store.dictionary(), dictionary_for(Locale::En));

        store.set_locale(Locale::Id, &storage);
        assert_eq!(store.dictionary(), dictionary_for(Locale::Id));
        assert_eq!(store.dictionary().nav.projects, "proyek");
    }

    #[test]
    fn tags_round_trip_and_resolve() {
        for locale in Locale::ALL {
            assert_eq!(locale.as_str().parse::<Locale>(), Ok(locale));
        }
        assert_eq!(Locale::resolve("id"), Locale::Id);
        assert_eq!(Locale::resolve("ID"), Locale::En);
        assert_eq!(Locale::resolve(""), Locale::En);
    }
}
