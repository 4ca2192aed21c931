//! Core record types for parkreg.
//!
//! This module defines the vehicle record and the ordered mapping that is
//! persisted as a single blob under the store's namespace key.

use chrono::Timelike;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from plate to record, exactly as persisted.
pub type RecordMap = IndexMap<String, VehicleRecord>;

/// Wall-clock time a vehicle was registered.
///
/// Rendered as `hour:minute` with neither part zero-padded, so 9:05 becomes
/// `"9:5"`. Stored values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryTime(String);

impl EntryTime {
    /// Build an entry time from an hour and a minute.
    #[must_use]
    pub fn at(hour: u32, minute: u32) -> Self {
        Self(format!("{hour}:{minute}"))
    }

    /// Build an entry time from any clock reading, keeping hour and minute only.
    #[must_use]
    pub fn from_time(time: &impl Timelike) -> Self {
        Self::at(time.hour(), time.minute())
    }

    /// The formatted time.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A vehicle parked at the facility.
///
/// The plate is the record's identity and also its key in the [`RecordMap`].
/// Records are never edited in place; a new registration with the same plate
/// replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    /// Owner or vehicle label.
    pub name: String,

    /// License plate.
    pub plate: String,

    /// When the vehicle was registered.
    pub entry_time: EntryTime,
}

impl VehicleRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(name: impl Into<String>, plate: impl Into<String>, entry_time: EntryTime) -> Self {
        Self {
            name: name.into(),
            plate: plate.into(),
            entry_time,
        }
    }
}
