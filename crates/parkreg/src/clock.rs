//! Time source for registrations.

use chrono::{Local, Timelike};

use crate::record::EntryTime;

/// Source of the current wall-clock time.
pub trait Clock {
    /// Read the clock once and return the hour and minute as an entry time.
    fn entry_time(&self) -> EntryTime;
}

/// The host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn entry_time(&self) -> EntryTime {
        let now = Local::now();
        EntryTime::at(now.hour(), now.minute())
    }
}

/// A clock stuck at a fixed hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    hour: u32,
    minute: u32,
}

impl FixedClock {
    /// Create a clock that always reads `hour:minute`.
    #[must_use]
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }
}

impl Clock for FixedClock {
    fn entry_time(&self) -> EntryTime {
        EntryTime::at(self.hour, self.minute)
    }
}
