use std::rc::Rc;

use crate::consent::store::ConsentStore;
use crate::i18n::translator::Language;
use crate::preferences::store::PreferenceStore;
use crate::storage::KeyValueStore;

/// Stores shared by every component, created once in `main` and provided
/// through a `ContextProvider`.
#[derive(Clone)]
pub struct Services {
    pub storage: Rc<dyn KeyValueStore>,
    pub consent: Rc<ConsentStore>,
    pub preferences: Rc<PreferenceStore>,
}

impl Services {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            consent: Rc::new(ConsentStore::new(storage.clone())),
            preferences: Rc::new(PreferenceStore::load(storage.clone())),
            storage,
        }
    }

    pub fn detect_language(&self) -> Language {
        crate::i18n::translator::detect_language(self.storage.as_ref())
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.consent, &other.consent) && Rc::ptr_eq(&self.preferences, &other.preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::store::ConsentChoice;
    use crate::preferences::store::Theme;
    use crate::storage::MemoryStorage;

    #[test]
    fn stores_share_one_backend_under_separate_keys() {
        let storage = MemoryStorage::new();
        let services = Services::new(Rc::new(storage.clone()));

        services.consent.write(ConsentChoice::ACCEPT_ALL);
        services.preferences.set_theme(Theme::Dark);
        assert_eq!(storage.len(), 2);

        services.consent.clear();
        assert_eq!(storage.len(), 1);
        assert_eq!(services.preferences.get().theme, Theme::Dark);
    }

    #[test]
    fn clones_compare_equal_fresh_instances_do_not() {
        let storage: Rc<dyn KeyValueStore> = Rc::new(MemoryStorage::new());
        let a = Services::new(storage.clone());
        assert!(a == a.clone());
        assert!(a != Services::new(storage));
    }
}
