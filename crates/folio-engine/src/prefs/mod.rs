pub mod language;

pub use language::{Language, LanguagePreference, PreferenceStore, StoreError, LANGUAGE_KEY};
