//! Wall-clock access for magic mode.
//!
//! The engine never reads the system time directly; it asks a [`Clock`],
//! so tests and hosts can pin the moment that gets encoded.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Local calendar fields consumed by the magic target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockReading {
    /// 1..=12
    pub month: u32,
    /// 1..=31
    pub day: u32,
    /// 0..=23
    pub hour: u32,
    /// 0..=59
    pub minute: u32,
}

impl ClockReading {
    pub fn new(
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Self {
        Self {
            month,
            day,
            hour,
            minute,
        }
    }

    /// Reads the calendar fields out of a `chrono` date-time.
    pub fn from_datetime<T: Datelike + Timelike>(value: &T) -> Self {
        Self::new(value.month(), value.day(), value.hour(), value.minute())
    }

    /// Encodes the reading as month, then zero-padded day, hour and minute,
    /// read as one integer.
    ///
    /// ```
    /// use calc_core::ClockReading;
    ///
    /// // Feb 16, 22:44
    /// assert_eq!(ClockReading::new(2, 16, 22, 44).as_number(), 2162244);
    /// // Nov 5, 09:07
    /// assert_eq!(ClockReading::new(11, 5, 9, 7).as_number(), 11050907);
    /// ```
    pub fn as_number(&self) -> u64 {
        u64::from(self.month) * 1_000_000
            + u64::from(self.day) * 10_000
            + u64::from(self.hour) * 100
            + u64::from(self.minute)
    }
}

impl From<NaiveDateTime> for ClockReading {
    fn from(value: NaiveDateTime) -> Self {
        Self::from_datetime(&value)
    }
}

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> ClockReading;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> ClockReading {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> ClockReading {
        (**self).now()
    }
}

/// Reads the host's local time zone through `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockReading {
        ClockReading::from_datetime(&Local::now())
    }
}

/// Always reports the same reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub ClockReading);

impl FixedClock {
    pub fn at(
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Self {
        Self(ClockReading::new(month, day, hour, minute))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> ClockReading {
        self.0
    }
}
