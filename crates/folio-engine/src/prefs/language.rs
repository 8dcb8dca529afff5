use std::fmt;

/// Storage key for the language preference.
pub const LANGUAGE_KEY: &str = "site-lang";

/// Display language of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// Parse a stored or attribute code. Anything but `"en"`/`"zh"` is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A persistence failure reported by a [`PreferenceStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError(pub String);

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "preference store: {}", self.0)
    }
}

impl std::error::Error for StoreError {}

/// String key-value store for user preferences (browser `localStorage`).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The active language plus its persistence.
///
/// Reads happen once at construction. Writes happen on every change and
/// their failures never affect the in-memory language.
#[derive(Debug)]
pub struct LanguagePreference<S: PreferenceStore> {
    store: S,
    current: Language,
}

impl<S: PreferenceStore> LanguagePreference<S> {
    /// Restore the saved language, falling back to [`Language::default`].
    pub fn load(store: S) -> Self {
        Self::load_or(store, Language::default())
    }

    /// Restore the saved language, falling back to `fallback` when the value
    /// is missing, unreadable or unrecognised.
    pub fn load_or(store: S, fallback: Language) -> Self {
        let current = match store.get(LANGUAGE_KEY) {
            Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|| {
                log::debug!("ignoring unrecognised stored language '{}'", code);
                fallback
            }),
            Ok(None) => fallback,
            Err(err) => {
                log::debug!("{}; using {}", err, fallback);
                fallback
            }
        };
        Self { store, current }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Switch to `language` and persist it.
    pub fn set(&mut self, language: Language) {
        self.current = language;
        if let Err(err) = self.store.set(LANGUAGE_KEY, language.code()) {
            log::debug!("{}; language '{}' not saved", err, language);
        }
    }

    /// Flip between the two languages. Returns the new one.
    pub fn toggle(&mut self) -> Language {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: HashMap<String, String>,
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.values.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.values.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError("access denied".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError("quota exceeded".into()))
        }
    }

    fn store_with(value: &str) -> MemoryStore {
        let mut store = MemoryStore::default();
        store.values.insert(LANGUAGE_KEY.into(), value.into());
        store
    }

    #[test]
    fn codes() {
        assert_eq!(Language::from_code("zh"), Some(Language::Zh));
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::Zh.toggled().code(), "en");
    }

    #[test]
    fn restores_saved_language() {
        let pref = LanguagePreference::load(store_with("zh"));
        assert_eq!(pref.current(), Language::Zh);
    }

    #[test]
    fn unknown_or_missing_value_falls_back() {
        assert_eq!(LanguagePreference::load(store_with("fr")).current(), Language::En);
        assert_eq!(LanguagePreference::load(MemoryStore::default()).current(), Language::En);
        assert_eq!(LanguagePreference::load(BrokenStore).current(), Language::En);
    }

    #[test]
    fn nothing_saved_keeps_page_language() {
        let pref = LanguagePreference::load_or(MemoryStore::default(), Language::Zh);
        assert_eq!(pref.current(), Language::Zh);
        assert!(pref.store().values.is_empty());
        assert_eq!(LanguagePreference::load_or(store_with("fr"), Language::Zh).current(), Language::Zh);
        assert_eq!(LanguagePreference::load_or(BrokenStore, Language::Zh).current(), Language::Zh);
    }

    #[test]
    fn saved_language_beats_page_language() {
        let pref = LanguagePreference::load_or(store_with("en"), Language::Zh);
        assert_eq!(pref.current(), Language::En);
    }

    #[test]
    fn toggle_persists() {
        let mut pref = LanguagePreference::load(MemoryStore::default());
        assert_eq!(pref.toggle(), Language::Zh);
        assert_eq!(pref.store().values.get(LANGUAGE_KEY).map(String::as_str), Some("zh"));
        assert_eq!(pref.toggle(), Language::En);
        assert_eq!(pref.store().values.get(LANGUAGE_KEY).map(String::as_str), Some("en"));
    }

    #[test]
    fn write_failure_keeps_in_memory_state() {
        let mut pref = LanguagePreference::load(BrokenStore);
        assert_eq!(pref.toggle(), Language::Zh);
        assert_eq!(pref.current(), Language::Zh);
    }
}
