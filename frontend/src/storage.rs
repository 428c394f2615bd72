//! Durable key-value slots backing the consent and preference stores.
//!
//! In the browser this is `window.localStorage`. Tests and visitors with
//! storage disabled get [`MemoryStorage`], which lives for the session only.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;
use web_sys::window;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("could not encode record: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every call so a storage that gets
/// disabled mid-session degrades to errors instead of stale handles.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }

    /// True when local storage can be reached at all.
    pub fn is_available() -> bool {
        Self::storage().is_ok()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Quota exceeded surfaces here
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// In-memory slots. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Picks local storage when the browser exposes it, otherwise a session-only map.
pub fn default_storage() -> Rc<dyn KeyValueStore> {
    if BrowserStorage::is_available() {
        Rc::new(BrowserStorage)
    } else {
        log::warn!("Local storage unavailable, preferences will not survive a reload");
        Rc::new(MemoryStorage::new())
    }
}

/// Slot that rejects every operation, like a browser with storage disabled.
#[cfg(test)]
pub struct BrokenStorage;

#[cfg(test)]
impl KeyValueStore for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("QuotaExceededError".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_slots() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.set("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));

        b.remove("k").unwrap();
        assert_eq!(a.get("k").unwrap(), None);
        assert_eq!(a.len(), 0);
    }

    #[test]
    fn memory_storage_last_write_wins() {
        let s = MemoryStorage::new();
        s.set("k", "first").unwrap();
        s.set("k", "second").unwrap();
        assert_eq!(s.get("k").unwrap().as_deref(), Some("second"));
        assert_eq!(s.len(), 1);
    }
}
