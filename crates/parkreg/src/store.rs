//! Record store for parkreg.
//!
//! The store keeps the whole [`RecordMap`] as one JSON blob under a single
//! namespace key of a [`KeyValueStorage`] medium. Every mutation rewrites the
//! complete mapping and then hands the freshly read mapping to the attached
//! [`RecordView`].

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{RecordMap, VehicleRecord};
use crate::storage::KeyValueStorage;

/// Default namespace key holding the record mapping.
pub const DEFAULT_NAMESPACE: &str = "cars";

/// Observer notified with the full record set after every store mutation.
pub trait RecordView {
    /// Redraw from the complete, current record set.
    fn update(&mut self, records: &RecordMap);
}

/// A view that ignores updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoView;

impl RecordView for NoView {
    fn update(&mut self, _records: &RecordMap) {}
}

/// Persistence facade over a single namespace of a storage medium.
///
/// Records are kept most-recent-write-first: `set` places the record at the
/// front of the mapping, moving it there if the plate was already present.
/// `remove` keeps the relative order of the remaining records.
#[derive(Debug)]
pub struct RecordStore<S, V = NoView> {
    storage: S,
    namespace: String,
    view: V,
}

impl<S: KeyValueStorage> RecordStore<S> {
    /// Create a store over `storage` using `namespace` as its key, with no view.
    pub fn new(storage: S, namespace: impl Into<String>) -> Self {
        Self::with_view(storage, namespace, NoView)
    }
}

impl<S: KeyValueStorage, V: RecordView> RecordStore<S, V> {
    /// Create a store that notifies `view` after every mutation.
    pub fn with_view(storage: S, namespace: impl Into<String>, view: V) -> Self {
        Self {
            storage,
            namespace: namespace.into(),
            view,
        }
    }

    /// The namespace key this store reads and writes.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The attached view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The underlying storage medium.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the full record mapping.
    ///
    /// A namespace that has never been written reads as an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptState`] if the stored value is not a valid
    /// record mapping, or a storage error if the medium cannot be read.
    pub fn get_all(&self) -> Result<RecordMap> {
        let Some(text) = self.storage.get_item(&self.namespace)? else {
            debug!("Namespace '{}' is empty", self.namespace);
            return Ok(RecordMap::new());
        };

        serde_json::from_str(&text).map_err(|source| Error::corrupt_state(&self.namespace, source))
    }

    /// Look up a single record by plate.
    ///
    /// # Errors
    ///
    /// Returns an error if the mapping cannot be read.
    pub fn get(&self, plate: &str) -> Result<Option<VehicleRecord>> {
        Ok(self.get_all()?.shift_remove(plate))
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns an error if the mapping cannot be read.
    pub fn len(&self) -> Result<usize> {
        Ok(self.get_all()?.len())
    }

    /// Check if no records are stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the mapping cannot be read.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.get_all()?.is_empty())
    }

    /// Store `record` under its plate, replacing any previous record with the
    /// same plate, then notify the view.
    ///
    /// # Errors
    ///
    /// Returns an error if the current mapping cannot be read or the new
    /// mapping cannot be written. The stored value is unchanged on error.
    pub fn set(&mut self, record: VehicleRecord) -> Result<()> {
        let mut records = self.get_all()?;
        let replaced = records.shift_remove(&record.plate).is_some();
        let plate = record.plate.clone();
        records.shift_insert(0, plate, record);

        self.write(&records)?;
        if replaced {
            info!("Replaced record in '{}'", self.namespace);
        }
        self.refresh()
    }

    /// Remove the record for `plate`, then notify the view.
    ///
    /// Returns `true` if a record was removed. An unknown plate leaves the
    /// mapping untouched and is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the mapping cannot be read or written.
    pub fn remove(&mut self, plate: &str) -> Result<bool> {
        let mut records = self.get_all()?;
        let removed = records.shift_remove(plate).is_some();

        if removed {
            self.write(&records)?;
            info!("Removed plate {} from '{}'", plate, self.namespace);
        } else {
            debug!("Plate {} not present in '{}'", plate, self.namespace);
        }
        self.refresh()?;
        Ok(removed)
    }

    /// Drop the whole namespace, then notify the view.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be written.
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove_item(&self.namespace)?;
        info!("Cleared namespace '{}'", self.namespace);
        self.refresh()
    }

    /// Notify the view with the current record set without mutating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the mapping cannot be read.
    pub fn refresh(&mut self) -> Result<()> {
        let records = self.get_all()?;
        self.view.update(&records);
        Ok(())
    }

    fn write(&mut self, records: &RecordMap) -> Result<()> {
        let text = serde_json::to_string(records)?;
        self.storage.set_item(&self.namespace, &text)
    }
}
