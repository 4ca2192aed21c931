//! Registration front end.
//!
//! [`Registry`] wires the record store, its table view, a clock and the
//! message area together. It is what the CLI drives: it validates input,
//! stamps entries, and turns removal controls back into store removals.

use tracing::{info, warn};

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::record::{RecordMap, VehicleRecord};
use crate::storage::KeyValueStorage;
use crate::store::RecordStore;
use crate::view::{RemoveControl, Table, TableView};

/// Message shown when a registration is missing a field.
pub const MISSING_FIELDS_MESSAGE: &str = "Fill in all fields!";

/// Check that both fields are present.
///
/// Only empty strings are rejected; whitespace is accepted as-is.
///
/// # Errors
///
/// Returns [`Error::Validation`] if `name` or `plate` is empty.
pub fn validate_registration(name: &str, plate: &str) -> Result<()> {
    if name.is_empty() || plate.is_empty() {
        return Err(Error::validation(MISSING_FIELDS_MESSAGE));
    }
    Ok(())
}

/// The parking registry.
#[derive(Debug)]
pub struct Registry<S, C> {
    store: RecordStore<S, TableView>,
    clock: C,
    message: Option<String>,
}

impl<S: KeyValueStorage, C: Clock> Registry<S, C> {
    /// Create a registry over `storage` and draw the initial table.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored records cannot be read.
    pub fn open(storage: S, namespace: impl Into<String>, clock: C) -> Result<Self> {
        let mut store = RecordStore::with_view(storage, namespace, TableView::new());
        store.refresh()?;
        Ok(Self {
            store,
            clock,
            message: None,
        })
    }

    /// Register a vehicle entering now.
    ///
    /// On success the message area is cleared and the stored record is
    /// returned. On failure nothing is written and the message area shows
    /// the error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a field is empty, or a storage error
    /// if the record cannot be saved.
    pub fn register(&mut self, name: &str, plate: &str) -> Result<VehicleRecord> {
        if let Err(err) = validate_registration(name, plate) {
            warn!("Rejected registration: {}", err);
            return Err(self.show(err));
        }
        self.message = None;

        let record = VehicleRecord::new(name, plate, self.clock.entry_time());
        match self.store.set(record.clone()) {
            Ok(()) => {
                info!("Registered {} at {}", record.plate, record.entry_time);
                Ok(record)
            }
            Err(err) => Err(self.show(err)),
        }
    }

    /// Activate a removal control taken from the current table.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read or written.
    pub fn activate(&mut self, control: &RemoveControl) -> Result<bool> {
        self.remove(control.plate())
    }

    /// Remove the vehicle with `plate`. Unknown plates are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read or written.
    pub fn remove(&mut self, plate: &str) -> Result<bool> {
        self.store.remove(plate).map_err(|err| self.show(err))
    }

    /// Remove every vehicle.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    pub fn clear(&mut self) -> Result<()> {
        self.store.clear().map_err(|err| self.show(err))
    }

    /// All stored records, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored records cannot be read.
    pub fn records(&self) -> Result<RecordMap> {
        self.store.get_all()
    }

    /// The table as last drawn.
    #[must_use]
    pub fn table(&self) -> &Table {
        self.store.view().table()
    }

    /// The message currently shown to the user, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The underlying store.
    pub fn store(&self) -> &RecordStore<S, TableView> {
        &self.store
    }

    fn show(&mut self, err: Error) -> Error {
        self.message = Some(err.to_string());
        err
    }
}
