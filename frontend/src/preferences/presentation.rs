//! Maps preferences onto classes on the document root. The stylesheet keys
//! everything (theme palette, font scale, motion) off these classes.

use std::collections::BTreeSet;

use log::warn;
use web_sys::{window, Element};

use super::store::{FontFamily, FontSize, LineHeight, Preferences, Theme};

const THEME_CLASSES: [&str; 4] = [
    "app-theme-light",
    "app-theme-dark",
    "app-theme-contrast",
    "app-theme-contrast-light",
];

const A11Y_CLASSES: [&str; 13] = [
    "a11y-font-size-sm",
    "a11y-font-size-md",
    "a11y-font-size-lg",
    "a11y-font-size-xl",
    "a11y-font-family-system",
    "a11y-font-family-readable",
    "a11y-line-height-normal",
    "a11y-line-height-relaxed",
    "a11y-line-height-loose",
    "a11y-reduced-motion",
    "a11y-high-visibility-links",
    "a11y-strong-focus",
    "a11y-highlight-headings",
];

pub fn theme_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "app-theme-light",
        Theme::Dark => "app-theme-dark",
        Theme::ContrastLight => "app-theme-contrast-light",
        Theme::ContrastDark => "app-theme-contrast",
    }
}

fn font_size_class(size: FontSize) -> &'static str {
    match size {
        FontSize::Sm => "a11y-font-size-sm",
        FontSize::Md => "a11y-font-size-md",
        FontSize::Lg => "a11y-font-size-lg",
        FontSize::Xl => "a11y-font-size-xl",
    }
}

fn font_family_class(family: FontFamily) -> &'static str {
    match family {
        FontFamily::System => "a11y-font-family-system",
        FontFamily::Readable => "a11y-font-family-readable",
    }
}

fn line_height_class(height: LineHeight) -> &'static str {
    match height {
        LineHeight::Normal => "a11y-line-height-normal",
        LineHeight::Relaxed => "a11y-line-height-relaxed",
        LineHeight::Loose => "a11y-line-height-loose",
    }
}

/// Every class this module owns. Anything else on the root is left alone.
pub fn managed_classes() -> impl Iterator<Item = &'static str> {
    THEME_CLASSES.into_iter().chain(A11Y_CLASSES)
}

/// The full class set for `prefs`: one per enum field, plus one per enabled flag.
pub fn classes_for(prefs: &Preferences) -> Vec<&'static str> {
    let mut classes = vec![
        theme_class(prefs.theme),
        font_size_class(prefs.font_size),
        font_family_class(prefs.font_family),
        line_height_class(prefs.line_height),
    ];
    let flags = [
        (prefs.reduced_motion, "a11y-reduced-motion"),
        (prefs.high_visibility_links, "a11y-high-visibility-links"),
        (prefs.strong_focus_outline, "a11y-strong-focus"),
        (prefs.highlight_headings, "a11y-highlight-headings"),
    ];
    classes.extend(flags.into_iter().filter(|(on, _)| *on).map(|(_, class)| class));
    classes
}

pub trait ClassTarget {
    fn remove_class(&mut self, class: &str);
    fn add_class(&mut self, class: &str);
}

impl ClassTarget for Element {
    fn remove_class(&mut self, class: &str) {
        if let Err(e) = self.class_list().remove_1(class) {
            warn!("Failed to remove class {}: {:?}", class, e);
        }
    }

    fn add_class(&mut self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            warn!("Failed to add class {}: {:?}", class, e);
        }
    }
}

impl ClassTarget for BTreeSet<String> {
    fn remove_class(&mut self, class: &str) {
        self.remove(class);
    }

    fn add_class(&mut self, class: &str) {
        self.insert(class.to_string());
    }
}

/// Clears every managed class, then applies the set for `prefs`. Clearing
/// always finishes before the first add.
pub fn apply(prefs: &Preferences, target: &mut impl ClassTarget) {
    for class in managed_classes() {
        target.remove_class(class);
    }
    for class in classes_for(prefs) {
        target.add_class(class);
    }
}

pub fn apply_to_document(prefs: &Preferences) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(mut root) => apply(prefs, &mut root),
        None => warn!("No document root to apply preferences to"),
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn document_root_gets_one_theme_class() {
        let mut prefs = Preferences::default();
        prefs.theme = Theme::Dark;
        apply_to_document(&prefs);
        prefs.theme = Theme::ContrastLight;
        apply_to_document(&prefs);

        let root = window().unwrap().document().unwrap().document_element().unwrap();
        let list = root.class_list();
        assert!(list.contains("app-theme-contrast-light"));
        assert!(!list.contains("app-theme-dark"));
        assert!(!list.contains("app-theme-light"));
    }
}
