//! Wall-clock boundary.
//!
//! The model never reads the time itself. Callers hand it a [`WallClock`]
//! snapshot, either built directly or taken from a [`Clock`].

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike};

use crate::error::{Error, Result};
use crate::models::{DayOfWeek, MINUTES_PER_DAY};

/// A weekday plus minute-of-day.
///
/// The minute is always in `0..=1440`; fields are only reachable through
/// the constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallClock {
    weekday: DayOfWeek,
    minute: i32,
}

impl WallClock {
    /// Checked constructor; `minute` must lie in `0..=1440`.
    pub fn new(weekday: DayOfWeek, minute: i32) -> Result<Self> {
        if !(0..=MINUTES_PER_DAY).contains(&minute) {
            return Err(Error::InvalidMinute(minute as i64));
        }
        Ok(Self { weekday, minute })
    }

    pub fn weekday(&self) -> DayOfWeek {
        self.weekday
    }

    /// Minute-of-day.
    pub fn minute(&self) -> i32 {
        self.minute
    }

    /// Local wall time of a zoned instant.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self::from_naive(&dt.naive_local())
    }

    pub fn from_naive(dt: &NaiveDateTime) -> Self {
        Self {
            weekday: DayOfWeek::from_chrono(dt.weekday()),
            minute: (dt.hour() * 60 + dt.minute()) as i32,
        }
    }
}

/// Source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> WallClock;
}

/// Reads the local system time through chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> WallClock {
        WallClock::from_datetime(&Local::now())
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub WallClock);

impl Clock for FixedClock {
    fn now(&self) -> WallClock {
        self.0
    }
}
