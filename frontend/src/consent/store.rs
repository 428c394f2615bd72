use std::rc::Rc;

use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::events::{Broadcast, Subscription};
use crate::storage::{KeyValueStore, StorageError};

/// A visitor's cookie decision as persisted in the consent slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentRecord {
    pub version: u32,
    pub decided_at: String,
    pub necessary: bool,
    pub analytics: bool,
    pub marketing: bool,
}

impl ConsentRecord {
    pub fn decided_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.decided_at)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// The user-controlled part of a decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsentChoice {
    pub analytics: bool,
    pub marketing: bool,
}

impl ConsentChoice {
    pub const ACCEPT_ALL: Self = Self { analytics: true, marketing: true };
    pub const REJECT_OPTIONAL: Self = Self { analytics: false, marketing: false };
}

impl From<&ConsentRecord> for ConsentChoice {
    fn from(record: &ConsentRecord) -> Self {
        Self {
            analytics: record.analytics,
            marketing: record.marketing,
        }
    }
}

pub type Clock = fn() -> DateTime<Utc>;

/// Owns the consent slot. Every write or clear is announced on
/// `consent-changed`; `open-consent-settings` is a bare UI signal.
pub struct ConsentStore {
    storage: Rc<dyn KeyValueStore>,
    key: &'static str,
    schema_version: u32,
    clock: Clock,
    changed: Broadcast<Option<ConsentRecord>>,
    open_settings: Broadcast<()>,
}

impl ConsentStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            key: config::CONSENT_STORAGE_KEY,
            schema_version: config::CONSENT_SCHEMA_VERSION,
            clock: Utc::now,
            changed: Broadcast::new(),
            open_settings: Broadcast::new(),
        }
    }

    pub fn with_schema_version(mut self, version: u32) -> Self {
        self.schema_version = version;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Current decision, or `None` when missing, malformed or written under
    /// another schema version.
    pub fn read(&self) -> Option<ConsentRecord> {
        let raw = match self.storage.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read consent record: {}", e);
                return None;
            }
        };

        let record: ConsentRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                warn!("Discarding malformed consent record: {}", e);
                return None;
            }
        };

        if !record.necessary {
            warn!("Discarding consent record with necessary=false");
            return None;
        }
        if record.version != self.schema_version {
            debug!(
                "Discarding consent record from schema v{} (current v{})",
                record.version, self.schema_version
            );
            return None;
        }

        Some(record)
    }

    /// Records a decision, persists it and broadcasts it. A failed write only
    /// costs persistence; the returned record is still valid for this session.
    pub fn write(&self, choice: ConsentChoice) -> ConsentRecord {
        let record = ConsentRecord {
            version: self.schema_version,
            decided_at: (self.clock)().to_rfc3339_opts(SecondsFormat::Millis, true),
            necessary: true,
            analytics: choice.analytics,
            marketing: choice.marketing,
        };

        match self.persist(&record) {
            Ok(()) => debug!(
                "Stored consent analytics={} marketing={}",
                record.analytics, record.marketing
            ),
            Err(e) => warn!("Consent decision not persisted: {}", e),
        }

        self.changed.emit(&Some(record.clone()));
        record
    }

    fn persist(&self, record: &ConsentRecord) -> Result<(), StorageError> {
        let raw = serde_json::to_string(record)?;
        self.storage.set(self.key, &raw)
    }

    /// Forgets the decision so the banner shows again.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(self.key) {
            warn!("Could not remove consent record: {}", e);
        }
        self.changed.emit(&None);
    }

    pub fn request_open_settings(&self) {
        self.open_settings.emit(&());
    }

    pub fn banner_visible(&self) -> bool {
        self.read().is_none()
    }

    pub fn subscribe_changes(
        &self,
        listener: impl Fn(&Option<ConsentRecord>) + 'static,
    ) -> Subscription {
        self.changed.subscribe(listener)
    }

    pub fn subscribe_open_settings(&self, listener: impl Fn(&()) + 'static) -> Subscription {
        self.open_settings.subscribe(listener)
    }
}
