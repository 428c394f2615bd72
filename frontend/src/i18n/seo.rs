use log::{debug, warn};
use web_sys::{window, Document};
use yew::prelude::*;

use crate::i18n::translator::{set_document_lang, Translator};

/// Translated head content for the active language.
#[derive(Clone, Debug, PartialEq)]
pub struct SeoTags {
    pub title: String,
    pub description: String,
}

impl SeoTags {
    pub fn from_translator(t: &Translator) -> Self {
        Self {
            title: t.t("seo.title"),
            description: t.t("seo.description"),
        }
    }

    /// Meta selectors and the content each one receives.
    pub fn meta(&self) -> [(&'static str, &str); 5] {
        [
            (r#"meta[name="description"]"#, self.description.as_str()),
            (r#"meta[property="og:title"]"#, self.title.as_str()),
            (r#"meta[property="og:description"]"#, self.description.as_str()),
            (r#"meta[name="twitter:title"]"#, self.title.as_str()),
            (r#"meta[name="twitter:description"]"#, self.description.as_str()),
        ]
    }
}

/// Rewrites the title and any meta tags the host page declares. Tags missing
/// from the page are skipped, not created.
pub fn apply(document: &Document, tags: &SeoTags) {
    document.set_title(&tags.title);
    for (selector, content) in tags.meta() {
        match document.query_selector(selector) {
            Ok(Some(el)) => {
                if let Err(e) = el.set_attribute("content", content) {
                    warn!("Failed to update {}: {:?}", selector, e);
                }
            }
            Ok(None) => debug!("Host page has no {}", selector),
            Err(e) => warn!("Bad selector {}: {:?}", selector, e),
        }
    }
}

/// Keeps title, description, social tags and `<html lang>` on the active language.
#[hook]
pub fn use_seo_sync() {
    let t = use_context::<Translator>().expect("Translator not provided");

    use_effect_with_deps(
        move |t: &Translator| {
            match window().and_then(|w| w.document()) {
                Some(document) => apply(&document, &SeoTags::from_translator(t)),
                None => warn!("No document to update head tags on"),
            }
            set_document_lang(t.language());
            || ()
        },
        t,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::i18n::translator::{Catalog, Language};

    #[test]
    fn tags_follow_the_active_language() {
        let catalog = Rc::new(Catalog::bundled());
        let en = SeoTags::from_translator(&Translator::new(Language::En, catalog.clone()));
        let de = SeoTags::from_translator(&Translator::new(Language::De, catalog));

        assert!(en.title.starts_with("Heart 2 Heart Somatics"));
        assert!(de.title.starts_with("Heart 2 Heart Somatics"));
        assert_ne!(en.title, de.title);
        assert_ne!(en.description, de.description);
        assert_ne!(en.title, "seo.title");
    }

    #[test]
    fn social_tags_mirror_title_and_description() {
        let tags = SeoTags {
            title: "T".to_string(),
            description: "D".to_string(),
        };
        let meta = tags.meta();

        assert_eq!(meta[0], (r#"meta[name="description"]"#, "D"));
        for (selector, content) in meta {
            let expected = if selector.contains("title") { "T" } else { "D" };
            assert_eq!(content, expected, "{}", selector);
        }
    }
}
