use thiserror::Error;

use crate::i18n::Language;

/// Local storage key holding the preferred language tag.
pub const PREFERENCE_KEY: &str = "preferredLang";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("couldn't read the stored preference")]
    Read,
    #[error("couldn't write the preference")]
    Write,
}

/// Durable storage for the language preference.
///
/// `load` returns the raw stored tag; validating it is up to the caller.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, lang: Language) -> Result<(), StorageError>;
}

/// Store used where no browser storage exists (server rendering).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStorage;

impl PreferenceStore for NoStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn save(&self, _lang: Language) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// In-memory store for driving `AppState` in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: std::cell::RefCell::new(Some(value.into())),
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, lang: Language) -> Result<(), StorageError> {
        *self.value.borrow_mut() = Some(lang.tag().to_string());
        Ok(())
    }
}

/// `window.localStorage`, checked on every access since private browsing
/// modes can throw on read or write.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        leptos::prelude::window()
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for BrowserStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(PREFERENCE_KEY)
            .map_err(|_| StorageError::Read)
    }

    fn save(&self, lang: Language) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(PREFERENCE_KEY, lang.tag())
            .map_err(|_| StorageError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::default();
        assert_eq!(store.load(), Ok(None));
        store.save(Language::En).unwrap();
        assert_eq!(store.load(), Ok(Some("en".to_string())));
        store.save(Language::Es).unwrap();
        assert_eq!(store.value().as_deref(), Some("es"));
    }

    #[test]
    fn test_no_storage_reports_unavailable() {
        assert_eq!(NoStorage.load(), Err(StorageError::Unavailable));
        assert_eq!(NoStorage.save(Language::Es), Err(StorageError::Unavailable));
    }
}
