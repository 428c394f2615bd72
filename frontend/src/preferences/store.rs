use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::events::{Broadcast, Subscription};
use crate::storage::{KeyValueStore, StorageError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Light,
    Dark,
    ContrastLight,
    ContrastDark,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Light, Theme::Dark, Theme::ContrastLight, Theme::ContrastDark];

    /// Order the navbar toggle steps through.
    pub fn next(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::ContrastLight,
            Theme::ContrastLight => Theme::ContrastDark,
            Theme::ContrastDark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::ContrastLight => "contrast-light",
            Theme::ContrastDark => "contrast-dark",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Sm,
    Md,
    Lg,
    Xl,
}

impl FontSize {
    pub const ALL: [FontSize; 4] = [FontSize::Sm, FontSize::Md, FontSize::Lg, FontSize::Xl];

    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Sm => "sm",
            FontSize::Md => "md",
            FontSize::Lg => "lg",
            FontSize::Xl => "xl",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    System,
    Readable,
}

impl FontFamily {
    pub const ALL: [FontFamily; 2] = [FontFamily::System, FontFamily::Readable];

    pub fn as_str(self) -> &'static str {
        match self {
            FontFamily::System => "system",
            FontFamily::Readable => "readable",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineHeight {
    Normal,
    Relaxed,
    Loose,
}

impl LineHeight {
    pub const ALL: [LineHeight; 3] = [LineHeight::Normal, LineHeight::Relaxed, LineHeight::Loose];

    pub fn as_str(self) -> &'static str {
        match self {
            LineHeight::Normal => "normal",
            LineHeight::Relaxed => "relaxed",
            LineHeight::Loose => "loose",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub font_size: FontSize,
    pub font_family: FontFamily,
    pub line_height: LineHeight,
    pub reduced_motion: bool,
    pub high_visibility_links: bool,
    pub strong_focus_outline: bool,
    pub highlight_headings: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            font_size: FontSize::Md,
            font_family: FontFamily::System,
            line_height: LineHeight::Normal,
            reduced_motion: false,
            high_visibility_links: false,
            strong_focus_outline: true,
            highlight_headings: false,
        }
    }
}

/// On-disk envelope: `{"state": {...}, "version": n}`.
#[derive(Serialize, Deserialize)]
struct Persisted {
    state: Preferences,
    version: u32,
}

/// Display and accessibility preferences. Loaded once, written through on
/// every change, and announced to subscribers (the presentation sync and any
/// mounted controls).
pub struct PreferenceStore {
    storage: Rc<dyn KeyValueStore>,
    schema_version: u32,
    current: RefCell<Preferences>,
    changed: Broadcast<Preferences>,
}

impl PreferenceStore {
    pub fn load(storage: Rc<dyn KeyValueStore>) -> Self {
        Self::load_with_version(storage, config::PREFERENCES_SCHEMA_VERSION)
    }

    pub fn load_with_version(storage: Rc<dyn KeyValueStore>, schema_version: u32) -> Self {
        let current = Self::read_persisted(storage.as_ref(), schema_version).unwrap_or_default();
        Self {
            storage,
            schema_version,
            current: RefCell::new(current),
            changed: Broadcast::new(),
        }
    }

    fn read_persisted(storage: &dyn KeyValueStore, schema_version: u32) -> Option<Preferences> {
        let raw = match storage.get(config::PREFERENCES_STORAGE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Could not read preferences: {}", e);
                return None;
            }
        };
        match serde_json::from_str::<Persisted>(&raw) {
            Ok(p) if p.version == schema_version => Some(p.state),
            Ok(p) => {
                debug!("Discarding preferences from schema v{} (current v{})", p.version, schema_version);
                None
            }
            Err(e) => {
                warn!("Discarding malformed preferences: {}", e);
                None
            }
        }
    }

    pub fn get(&self) -> Preferences {
        *self.current.borrow()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.update(|p| p.theme = theme);
    }

    pub fn set_font_size(&self, font_size: FontSize) {
        self.update(|p| p.font_size = font_size);
    }

    pub fn set_font_family(&self, font_family: FontFamily) {
        self.update(|p| p.font_family = font_family);
    }

    pub fn set_line_height(&self, line_height: LineHeight) {
        self.update(|p| p.line_height = line_height);
    }

    pub fn set_reduced_motion(&self, on: bool) {
        self.update(|p| p.reduced_motion = on);
    }

    pub fn set_high_visibility_links(&self, on: bool) {
        self.update(|p| p.high_visibility_links = on);
    }

    pub fn set_strong_focus_outline(&self, on: bool) {
        self.update(|p| p.strong_focus_outline = on);
    }

    pub fn set_highlight_headings(&self, on: bool) {
        self.update(|p| p.highlight_headings = on);
    }

    pub fn reset(&self) {
        self.update(|p| *p = Preferences::default());
    }

    pub fn subscribe(&self, listener: impl Fn(&Preferences) + 'static) -> Subscription {
        self.changed.subscribe(listener)
    }

    fn update(&self, change: impl FnOnce(&mut Preferences)) {
        let next = {
            let mut current = self.current.borrow_mut();
            change(&mut current);
            *current
        };
        if let Err(e) = self.persist(&next) {
            warn!("Preferences not persisted: {}", e);
        }
        self.changed.emit(&next);
    }

    fn persist(&self, state: &Preferences) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&Persisted {
            state: *state,
            version: self.schema_version,
        })?;
        self.storage.set(config::PREFERENCES_STORAGE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{BrokenStorage, MemoryStorage};

    fn stored(storage: &MemoryStorage) -> serde_json::Value {
        let raw = storage.get(config::PREFERENCES_STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn first_load_uses_documented_defaults() {
        let store = PreferenceStore::load(Rc::new(MemoryStorage::new()));
        let p = store.get();
        assert_eq!(p.theme, Theme::Light);
        assert_eq!(p.font_size, FontSize::Md);
        assert_eq!(p.font_family, FontFamily::System);
        assert_eq!(p.line_height, LineHeight::Normal);
        assert!(!p.reduced_motion);
        assert!(!p.high_visibility_links);
        assert!(p.strong_focus_outline);
        assert!(!p.highlight_headings);
    }

    #[test]
    fn setters_change_only_their_field_and_persist_the_full_record() {
        let storage = MemoryStorage::new();
        let store = PreferenceStore::load(Rc::new(storage.clone()));

        store.set_font_size(FontSize::Xl);
        assert_eq!(
            store.get(),
            Preferences { font_size: FontSize::Xl, ..Preferences::default() }
        );
        assert_eq!(
            stored(&storage),
            serde_json::json!({
                "state": {
                    "theme": "light",
                    "fontSize": "xl",
                    "fontFamily": "system",
                    "lineHeight": "normal",
                    "reducedMotion": false,
                    "highVisibilityLinks": false,
                    "strongFocusOutline": true,
                    "highlightHeadings": false,
                },
                "version": 1,
            })
        );

        store.set_theme(Theme::ContrastDark);
        store.set_font_family(FontFamily::Readable);
        store.set_line_height(LineHeight::Loose);
        store.set_reduced_motion(true);
        store.set_high_visibility_links(true);
        store.set_strong_focus_outline(false);
        store.set_highlight_headings(true);

        let reloaded = PreferenceStore::load(Rc::new(storage)).get();
        assert_eq!(
            reloaded,
            Preferences {
                theme: Theme::ContrastDark,
                font_size: FontSize::Xl,
                font_family: FontFamily::Readable,
                line_height: LineHeight::Loose,
                reduced_motion: true,
                high_visibility_links: true,
                strong_focus_outline: false,
                highlight_headings: true,
            }
        );
    }

    #[test]
    fn reset_restores_and_persists_defaults() {
        let storage = MemoryStorage::new();
        let store = PreferenceStore::load(Rc::new(storage.clone()));
        store.set_theme(Theme::Dark);
        store.set_line_height(LineHeight::Relaxed);
        store.set_strong_focus_outline(false);
        store.set_highlight_headings(true);

        store.reset();
        assert_eq!(store.get(), Preferences::default());
        assert_eq!(stored(&storage)["state"]["theme"], "light");
        assert_eq!(
            PreferenceStore::load(Rc::new(storage)).get(),
            Preferences::default()
        );
    }

    #[test]
    fn version_mismatch_discards_persisted_preferences() {
        let storage = MemoryStorage::new();
        PreferenceStore::load(Rc::new(storage.clone())).set_theme(Theme::Dark);

        let bumped = PreferenceStore::load_with_version(Rc::new(storage), 2);
        assert_eq!(bumped.get(), Preferences::default());
    }

    #[test]
    fn malformed_preferences_fall_back_to_defaults() {
        let storage = MemoryStorage::new();
        for raw in [
            "{",
            r#"{"state":{"theme":"sepia"},"version":1}"#,
            r#"{"theme":"dark","fontSize":"md"}"#,
        ] {
            storage.set(config::PREFERENCES_STORAGE_KEY, raw).unwrap();
            let store = PreferenceStore::load(Rc::new(storage.clone()));
            assert_eq!(store.get(), Preferences::default(), "accepted {:?}", raw);
        }
    }

    #[test]
    fn every_change_is_broadcast() {
        let store = PreferenceStore::load(Rc::new(MemoryStorage::new()));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            store.subscribe(move |p| seen.borrow_mut().push(p.theme))
        };
        store.set_theme(Theme::Dark);
        store.set_theme(Theme::ContrastLight);
        store.reset();
        assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::ContrastLight, Theme::Light]);
    }

    #[test]
    fn storage_failure_keeps_the_session_state() {
        let store = PreferenceStore::load(Rc::new(BrokenStorage));
        assert_eq!(store.get(), Preferences::default());
        store.set_reduced_motion(true);
        assert!(store.get().reduced_motion);
    }

    #[test]
    fn theme_toggle_cycles_through_all_themes() {
        let mut theme = Theme::Light;
        let mut visited = Vec::new();
        for _ in 0..Theme::ALL.len() {
            visited.push(theme);
            theme = theme.next();
        }
        assert_eq!(visited, Theme::ALL.to_vec());
        assert_eq!(theme, Theme::Light);
    }
}
