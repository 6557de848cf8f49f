//! Shared fixtures for unit tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::Mutex;

/// Clock pinned to a settable instant.
#[derive(Debug)]
pub(crate) struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub(crate) fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub(crate) fn at(year: i32, month: u32, day: u32, hour: u32) -> Self {
        let now = Utc
            .with_ymd_and_hms(year, month, day, hour, 0, 0)
            .single()
            .expect("valid fixed clock timestamp");
        Self::new(now)
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.utc()
    }

    pub(crate) fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("clock lock") = now;
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}
