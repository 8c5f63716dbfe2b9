use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Day number in the caller's calendar convention, `1..=7`.
///
/// `1` is the first day of the calendar's week. [`DayOfWeek::from_chrono`]
/// uses the Sunday-first numbering, so Sunday is 1 and Saturday is 7. Day
/// `n` maps to bit `n - 1` of a [`DayMask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const SUNDAY: DayOfWeek = DayOfWeek(1);
    pub const MONDAY: DayOfWeek = DayOfWeek(2);
    pub const TUESDAY: DayOfWeek = DayOfWeek(3);
    pub const WEDNESDAY: DayOfWeek = DayOfWeek(4);
    pub const THURSDAY: DayOfWeek = DayOfWeek(5);
    pub const FRIDAY: DayOfWeek = DayOfWeek(6);
    pub const SATURDAY: DayOfWeek = DayOfWeek(7);

    /// Checked constructor for `1..=7`.
    pub fn new(number: i64) -> Result<Self> {
        if (1..=7).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(Error::InvalidWeekday(number))
        }
    }

    /// Sunday-first mapping of a chrono weekday.
    pub fn from_chrono(day: chrono::Weekday) -> Self {
        Self(day.num_days_from_sunday() as u8 + 1)
    }

    /// Day number, `1..=7`.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based bit position inside a [`DayMask`].
    pub fn bit_index(self) -> u8 {
        self.0 - 1
    }

    /// The day `days` after this one, wrapping around the week.
    pub fn plus(self, days: u32) -> Self {
        let index = (self.bit_index() as u32 + days) % 7;
        Self(index as u8 + 1)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of active weekdays, one bit per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DayMask(u8);

impl DayMask {
    pub const NONE: DayMask = DayMask(0);
    pub const SUNDAY: DayMask = DayMask(1);
    pub const MONDAY: DayMask = DayMask(2);
    pub const TUESDAY: DayMask = DayMask(4);
    pub const WEDNESDAY: DayMask = DayMask(8);
    pub const THURSDAY: DayMask = DayMask(16);
    pub const FRIDAY: DayMask = DayMask(32);
    pub const SATURDAY: DayMask = DayMask(64);

    /// Saturday and Sunday.
    pub const WEEKEND: DayMask = DayMask(65);
    /// Monday through Friday.
    pub const WEEKDAYS: DayMask = DayMask(62);
    pub const EVERYDAY: DayMask = DayMask(127);

    /// Validate a raw mask value.
    pub fn new(value: i64) -> Result<Self> {
        if (0..=127).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(Error::InvalidDayMask(value))
        }
    }

    /// Raw mask value.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// No day selected.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether `day`'s bit is set.
    pub fn contains(self, day: DayOfWeek) -> bool {
        self.0 & (1 << day.bit_index()) != 0
    }

    /// This mask with `day` added.
    pub fn with(self, day: DayOfWeek) -> Self {
        Self(self.0 | (1 << day.bit_index()))
    }

    /// Flip a single day, as a tap on the day selector does.
    pub fn toggle(self, day: DayOfWeek) -> Self {
        Self(self.0 ^ (1 << day.bit_index()))
    }

    /// Active days in bit order.
    pub fn days(self) -> impl Iterator<Item = DayOfWeek> {
        (1..=7u8)
            .map(DayOfWeek)
            .filter(move |day| self.contains(*day))
    }

    /// How many days after `today` the next active day falls, looking at
    /// most one full week ahead (so `today` itself counts as 7).
    pub fn days_until_next(self, today: DayOfWeek) -> Option<u32> {
        (1..=7).find(|ahead| self.contains(today.plus(*ahead)))
    }

    /// Bit-by-bit comparison with bit 0 most significant; a set bit sorts
    /// after a clear one.
    pub fn cmp_bits(self, other: DayMask) -> Ordering {
        (0..7)
            .map(|i| 1u8 << i)
            .map(|bit| (self.0 & bit).cmp(&(other.0 & bit)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for DayMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DayMask {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let value: i64 = text
            .parse()
            .map_err(|e| Error::group(text, format!("invalid day mask '{}': {}", text, e)))?;
        DayMask::new(value)
    }
}
