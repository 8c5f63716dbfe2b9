use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Number of minutes in a day; also the largest valid minute-of-day.
pub const MINUTES_PER_DAY: i32 = 1440;

/// Closed range of minutes-of-day `[from, to]`.
///
/// Both bounds always lie in `0..=1440` and `from <= to`. Ordering is by
/// `(from, to)`, which is what keeps a group's interval set sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    from: i32,
    to: i32,
}

impl Interval {
    /// The whole day, `0-1440`.
    pub const FULL_DAY: Interval = Interval {
        from: 0,
        to: MINUTES_PER_DAY,
    };

    /// Create an interval, clamping both bounds into `0..=1440`.
    ///
    /// A reversed pair is rejected before clamping, the same rule the text
    /// parser applies.
    pub fn new(from: i32, to: i32) -> Result<Self> {
        if from > to {
            return Err(Error::interval(
                format!("{}-{}", from, to),
                "range is reversed",
            ));
        }
        Ok(Self {
            from: clamp_minute(from),
            to: clamp_minute(to),
        })
    }

    /// Parse canonical `"<from>-<to>"` text.
    pub fn parse(text: &str) -> Result<Self> {
        text.parse()
    }

    /// Start minute.
    pub fn from(&self) -> i32 {
        self.from
    }

    /// End minute (inclusive).
    pub fn to(&self) -> i32 {
        self.to
    }

    /// Length in minutes.
    pub fn duration(&self) -> i32 {
        self.to - self.from
    }

    /// Whether `now` (minute-of-day) falls inside the interval, bounds included.
    pub fn is_active(&self, now: i32) -> bool {
        self.from <= now && now <= self.to
    }

    /// Minutes until the interval starts; 0 while it is active.
    ///
    /// Negative once the interval has already ended, so callers check
    /// [`Interval::is_active`] or the sign before relying on it.
    pub fn minutes_until_active(&self, now: i32) -> i32 {
        if self.is_active(now) {
            0
        } else {
            self.from - now
        }
    }

    /// Closed-range overlap; touching intervals intersect.
    pub fn intersects(&self, other: &Interval) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    /// Smallest interval covering both.
    pub fn join(&self, other: &Interval) -> Interval {
        Interval {
            from: self.from.min(other.from),
            to: self.to.max(other.to),
        }
    }

    /// Both bounds moved to the nearest multiple of `step` minutes.
    pub fn snapped(&self, step: i32) -> Interval {
        Interval {
            from: clamp_minute(snap_minute(self.from, step)),
            to: clamp_minute(snap_minute(self.to, step)),
        }
    }

    /// Machine form, `"<from>-<to>"`.
    pub fn to_canonical_text(&self) -> String {
        self.to_string()
    }

    /// Display form, `"HH:MM - HH:MM"`.
    pub fn to_readable_text(&self) -> String {
        format!(
            "{:02}:{:02} - {:02}:{:02}",
            self.from / 60,
            self.from % 60,
            self.to / 60,
            self.to % 60
        )
    }

    /// Length rendered as `"<h>h <m>m"`.
    pub fn readable_duration(&self) -> String {
        let minutes = self.duration();
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}

fn clamp_minute(minute: i32) -> i32 {
    minute.clamp(0, MINUTES_PER_DAY)
}

/// Round `minute` to the nearest multiple of `step`.
///
/// A remainder of at least half a step rounds up, so ties round up: with
/// `step = 5` a remainder of 3 or 4 rounds up, with `step = 4` a remainder
/// of 2 does.
pub fn snap_minute(minute: i32, step: i32) -> i32 {
    if step <= 1 {
        return minute;
    }
    let base = minute.div_euclid(step);
    let rest = minute.rem_euclid(step);
    if rest * 2 >= step {
        (base + 1) * step
    } else {
        base * step
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let (from, to) = text
            .split_once('-')
            .ok_or_else(|| Error::interval(text, "missing '-' separator"))?;

        let from: i32 = from
            .parse()
            .map_err(|e| Error::interval(text, format!("invalid start '{}': {}", from, e)))?;
        let to: i32 = to
            .parse()
            .map_err(|e| Error::interval(text, format!("invalid end '{}': {}", to, e)))?;

        if from > to {
            log::debug!("rejecting reversed interval '{}'", text);
            return Err(Error::interval(text, "range is reversed"));
        }

        Interval::new(from, to)
    }
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
