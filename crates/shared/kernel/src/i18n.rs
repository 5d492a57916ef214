//! Label translation seam.
//!
//! The sidebar never resolves strings itself; it asks a [`Translator`] and
//! renders an empty label when the answer is `None`.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Maps an untranslated label key to its localized text, if known.
pub trait Translator {
    fn translate(&self, key: &str) -> Option<Cow<'_, str>>;

    /// Resolves `key`, falling back to an empty string.
    fn label(&self, key: &str) -> String {
        self.translate(key).map(Cow::into_owned).unwrap_or_default()
    }
}

impl<F> Translator for F
where
    F: Fn(&str) -> Option<String>,
{
    fn translate(&self, key: &str) -> Option<Cow<'_, str>> {
        self(key).map(Cow::Owned)
    }
}

/// A translator that knows no strings; every label resolves to `""`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTranslation;

impl Translator for NoTranslation {
    fn translate(&self, _key: &str) -> Option<Cow<'_, str>> {
        None
    }
}

/// An in-memory key → text table, usually deserialized from a config section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: FxHashMap<String, String>,
}

impl Catalog {
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self { entries: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    /// Inserts or replaces a translation, returning the previous text.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), text.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(Cow::Borrowed)
    }
}

/// Catalogs per locale with a selected active locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Translations {
    pub locale: String,
    pub catalogs: FxHashMap<String, Catalog>,
}

impl Translations {
    /// The catalog for the active locale, if one was loaded.
    #[must_use]
    pub fn active(&self) -> Option<&Catalog> {
        self.catalogs.get(&self.locale)
    }

    /// The active catalog cloned out, or an empty one when the locale is unknown.
    #[must_use]
    pub fn active_or_empty(&self) -> Catalog {
        self.active().cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_translators() {
        let upper = |key: &str| (!key.is_empty()).then(|| key.to_uppercase());
        assert_eq!(upper.label("undo"), "UNDO");
        assert_eq!(upper.label(""), "");
    }

    #[test]
    fn missing_entries_fall_back_to_empty_labels() {
        let catalog = Catalog::from_pairs([("Add blocks", "Blöcke hinzufügen")]);
        assert_eq!(catalog.label("Add blocks"), "Blöcke hinzufügen");
        assert_eq!(catalog.label("Move blocks"), "");
        assert_eq!(NoTranslation.label("Move blocks"), "");
    }

    #[test]
    fn insert_replaces_existing_text() {
        let mut catalog = Catalog::from_pairs([("undo", "Undo"), ("redo", "Redo")]);
        assert_eq!(catalog.insert("redo", "Again").as_deref(), Some("Redo"));
        assert_eq!(catalog.get("redo"), Some("Again"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn active_catalog_follows_locale() {
        let mut translations = Translations { locale: "de".to_owned(), ..Translations::default() };
        translations.catalogs.insert("de".to_owned(), Catalog::from_pairs([("zoom in", "Vergrößern")]));

        assert_eq!(translations.active_or_empty().label("zoom in"), "Vergrößern");

        translations.locale = "fr".to_owned();
        assert!(translations.active().is_none());
        assert!(translations.active_or_empty().is_empty());
    }
}
