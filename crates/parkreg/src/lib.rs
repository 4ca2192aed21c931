//! `parkreg` - A local registry of parked vehicles
//!
//! This library provides the record store, table renderer and registration
//! logic behind the `parkreg` command-line tool. Records live as one JSON
//! mapping under a single key of a pluggable key/value storage medium.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod registry;
pub mod storage;
pub mod store;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::{EntryTime, RecordMap, VehicleRecord};
pub use registry::{validate_registration, Registry};
pub use storage::{KeyValueStorage, MemoryStorage, SqliteStorage, StorageStats};
pub use store::{RecordStore, RecordView};
pub use view::{render, OutputFormat, Table, TableView};
