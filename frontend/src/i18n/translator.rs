use std::collections::HashMap;
use std::rc::Rc;

use log::{info, warn};
use serde_json::Value;
use web_sys::window;

use crate::config;
use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    De,
    En,
}

impl Language {
    pub const FALLBACK: Language = Language::En;

    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    /// Language-only matching: `de`, `de-DE`, `DE-at` are all German,
    /// anything else is English.
    pub fn from_tag(tag: &str) -> Language {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("de") {
            Language::De
        } else {
            Language::En
        }
    }
}

/// Persisted choice first, then the browser language, then English.
pub fn detect_language(storage: &dyn KeyValueStore) -> Language {
    if let Ok(Some(saved)) = storage.get(config::LANGUAGE_STORAGE_KEY) {
        return Language::from_tag(&saved);
    }
    window()
        .and_then(|w| w.navigator().language())
        .map(|tag| Language::from_tag(&tag))
        .unwrap_or(Language::FALLBACK)
}

/// Remembers the choice and updates `<html lang>`.
pub fn persist_language(storage: &dyn KeyValueStore, lang: Language) {
    if let Err(e) = storage.set(config::LANGUAGE_STORAGE_KEY, lang.code()) {
        warn!("Language choice not persisted: {}", e);
    }
    set_document_lang(lang);
    info!("Language set to {}", lang.code());
}

/// Mirrors the active language onto `<html lang>`.
pub fn set_document_lang(lang: Language) {
    match window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        Some(root) => {
            if let Err(e) = root.set_attribute("lang", lang.code()) {
                warn!("Failed to set document language {}: {:?}", lang.code(), e);
            }
        }
        None => warn!("No document root to set the language on"),
    }
}

/// Translation tables for every supported language.
pub struct Catalog {
    tables: HashMap<Language, Value>,
}

impl Catalog {
    pub fn bundled() -> Self {
        let mut catalog = Catalog { tables: HashMap::new() };
        catalog.insert_json(Language::En, include_str!("locales/en.json"));
        catalog.insert_json(Language::De, include_str!("locales/de.json"));
        catalog
    }

    pub fn insert_json(&mut self, lang: Language, raw: &str) {
        match serde_json::from_str::<Value>(raw) {
            Ok(table) => {
                self.tables.insert(lang, table);
            }
            Err(e) => warn!("Ignoring unreadable {} translations: {}", lang.code(), e),
        }
    }

    fn lookup(&self, lang: Language, key: &str) -> Option<&str> {
        let mut node = self.tables.get(&lang)?;
        for part in key.split('.') {
            node = node.get(part)?;
        }
        node.as_str()
    }
}

/// Active language plus the catalog; cheap to clone into components.
#[derive(Clone)]
pub struct Translator {
    lang: Language,
    catalog: Rc<Catalog>,
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        self.lang == other.lang && Rc::ptr_eq(&self.catalog, &other.catalog)
    }
}

impl Translator {
    pub fn new(lang: Language, catalog: Rc<Catalog>) -> Self {
        Self { lang, catalog }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn with_language(&self, lang: Language) -> Self {
        Self {
            lang,
            catalog: self.catalog.clone(),
        }
    }

    fn resolve(&self, key: &str) -> Option<&str> {
        self.catalog
            .lookup(self.lang, key)
            .or_else(|| self.catalog.lookup(Language::FALLBACK, key))
    }

    /// Text for `key`, or the key itself when no table has it.
    pub fn t(&self, key: &str) -> String {
        self.resolve(key).unwrap_or(key).to_string()
    }

    pub fn t_or(&self, key: &str, default: &str) -> String {
        self.resolve(key).unwrap_or(default).to_string()
    }

    /// Like [`Translator::t`], replacing `{{name}}` placeholders.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut text = self.t(key);
        for (name, value) in params {
            text = text.replace(&format!("{{{{{}}}}}", name), value);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn translator(lang: Language) -> Translator {
        Translator::new(lang, Rc::new(Catalog::bundled()))
    }

    #[test]
    fn looks_up_nested_keys_in_the_active_language() {
        assert_eq!(translator(Language::En).t("cookies.accept"), "Accept all");
        assert_eq!(translator(Language::De).t("cookies.accept"), "Alle akzeptieren");
        assert_eq!(
            translator(Language::De).t("cookies.settings.analytics.label"),
            "Analyse"
        );
    }

    #[test]
    fn missing_key_falls_back_to_english_then_default_then_key() {
        let mut catalog = Catalog::bundled();
        catalog.insert_json(Language::De, r#"{"common":{"save":"Speichern"}}"#);
        let de = Translator::new(Language::De, Rc::new(catalog));

        assert_eq!(de.t("common.save"), "Speichern");
        assert_eq!(de.t("common.close"), "Close");
        assert_eq!(de.t_or("nope.missing", "Fallback"), "Fallback");
        assert_eq!(de.t("nope.missing"), "nope.missing");
    }

    #[test]
    fn non_leaf_keys_render_as_the_key() {
        let en = translator(Language::En);
        assert_eq!(en.t("cookies.settings"), "cookies.settings");
    }

    #[test]
    fn interpolates_named_parameters() {
        let en = translator(Language::En);
        assert_eq!(
            en.t_with("cookies.settings.lastUpdated", &[("date", "1 May 2024")]),
            "Last updated: 1 May 2024"
        );
        assert_eq!(
            en.t_with("footer.copyright", &[("year", "2025"), ("brand", config::BRAND)]),
            "© 2025 Heart 2 Heart Somatics"
        );
    }

    #[test]
    fn language_tags_match_on_primary_subtag() {
        assert_eq!(Language::from_tag("de"), Language::De);
        assert_eq!(Language::from_tag("de-AT"), Language::De);
        assert_eq!(Language::from_tag("DE_ch"), Language::De);
        assert_eq!(Language::from_tag("en-US"), Language::En);
        assert_eq!(Language::from_tag("fr"), Language::En);
        assert_eq!(Language::from_tag(""), Language::En);
    }

    #[test]
    fn saved_language_wins_detection() {
        let storage = MemoryStorage::new();
        storage.set(config::LANGUAGE_STORAGE_KEY, "de").unwrap();
        assert_eq!(detect_language(&storage), Language::De);
    }

    #[test]
    fn both_locales_cover_the_same_keys() {
        fn leaves(prefix: &str, v: &Value, out: &mut Vec<String>) {
            match v {
                Value::Object(map) => {
                    for (k, child) in map {
                        let key = if prefix.is_empty() { k.clone() } else { format!("{}.{}", prefix, k) };
                        leaves(&key, child, out);
                    }
                }
                _ => out.push(prefix.to_string()),
            }
        }

        let catalog = Catalog::bundled();
        let mut en = Vec::new();
        let mut de = Vec::new();
        leaves("", &catalog.tables[&Language::En], &mut en);
        leaves("", &catalog.tables[&Language::De], &mut de);
        en.sort();
        de.sort();
        assert_eq!(en, de);
    }
}
