use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::day_mask::{DayMask, DayOfWeek};
use super::interval::{Interval, MINUTES_PER_DAY};
use crate::config::DayLabels;
use crate::error::{Error, Result};

/// A day mask paired with a sorted, deduplicated set of intervals.
///
/// Overlapping intervals are allowed; [`ScheduleGroup::merge_overlapping`]
/// folds them together when a normalized form is wanted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScheduleGroup {
    day_mask: DayMask,
    intervals: BTreeSet<Interval>,
}

impl ScheduleGroup {
    /// Build a group from a raw mask value and a set of intervals.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDayMask`] when `day_mask` is outside `0..=127`.
    pub fn from_intervals<I>(day_mask: i64, intervals: I) -> Result<Self>
    where
        I: IntoIterator<Item = Interval>,
    {
        Ok(Self::with_mask(DayMask::new(day_mask)?, intervals))
    }

    /// Build a group from an already validated mask.
    pub fn with_mask<I>(day_mask: DayMask, intervals: I) -> Self
    where
        I: IntoIterator<Item = Interval>,
    {
        Self {
            day_mask,
            intervals: intervals.into_iter().collect(),
        }
    }

    /// A group with no intervals for the given mask.
    pub fn empty(day_mask: i64) -> Result<Self> {
        Self::from_intervals(day_mask, [])
    }

    /// Every day, no intervals. Placeholder for an editor value that could
    /// not be turned into a group.
    pub fn empty_every_day() -> Self {
        Self::with_mask(DayMask::EVERYDAY, [])
    }

    /// Every day, all day.
    pub fn every_day_all_day() -> Self {
        Self::with_mask(DayMask::EVERYDAY, [Interval::FULL_DAY])
    }

    /// Parse canonical `"<mask>:<from>-<to>[,<from>-<to>...]"` text.
    pub fn parse(text: &str) -> Result<Self> {
        text.parse()
    }

    /// Days the group applies to.
    pub fn day_mask(&self) -> DayMask {
        self.day_mask
    }

    /// Intervals in sorted order.
    pub fn intervals(&self) -> impl Iterator<Item = Interval> + '_ {
        self.intervals.iter().copied()
    }

    /// Owned copy of the interval set.
    pub fn to_interval_set(&self) -> BTreeSet<Interval> {
        self.intervals.clone()
    }

    /// True when the group has no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Whether `weekday` is in the mask.
    pub fn is_active_today(&self, weekday: DayOfWeek) -> bool {
        self.day_mask.contains(weekday)
    }

    /// Active on `weekday` with `now` inside one of the intervals.
    pub fn is_active(&self, weekday: DayOfWeek, now: i32) -> bool {
        self.is_active_today(weekday) && self.intervals.iter().any(|span| span.is_active(now))
    }

    /// Minutes until the group next becomes active, 0 if it is active now.
    ///
    /// Returns `None` for a group without intervals, which never becomes
    /// active.
    ///
    /// # Panics
    /// Panics if the day mask has no day set: such a group has no next
    /// active day and the question has no answer. Debug builds also panic
    /// when `now` is outside `0..=1440`.
    pub fn minutes_until_active(&self, weekday: DayOfWeek, now: i32) -> Option<u32> {
        debug_assert!(
            (0..=MINUTES_PER_DAY).contains(&now),
            "minute-of-day {} is outside 0..=1440",
            now
        );
        if self.is_active_today(weekday) {
            if self.is_active(weekday, now) {
                return Some(0);
            }
            let later_today = self
                .intervals
                .iter()
                .map(|span| span.minutes_until_active(now))
                .filter(|lead| *lead > 0)
                .min();
            if let Some(lead) = later_today {
                return Some(lead as u32);
            }
        }

        let days_ahead = match self.day_mask.days_until_next(weekday) {
            Some(days) => days,
            None => panic!(
                "schedule group '{}' has an empty day mask; it can never become active",
                self
            ),
        };
        let first = self.intervals.first()?;
        let lead = days_ahead as i32 * MINUTES_PER_DAY + first.from() - now;
        log::trace!(
            "group '{}' next active in {} day(s), {} minute(s) from now",
            self,
            days_ahead,
            lead
        );
        u32::try_from(lead).ok()
    }

    /// Same days, with intersecting or touching intervals joined.
    pub fn merge_overlapping(&self) -> Self {
        let mut merged: Vec<Interval> = Vec::with_capacity(self.intervals.len());
        for span in &self.intervals {
            match merged.last_mut() {
                Some(current) if current.intersects(span) => *current = current.join(span),
                _ => merged.push(*span),
            }
        }
        Self::with_mask(self.day_mask, merged)
    }

    /// Machine form, `"<mask>:<from>-<to>[,...]"`.
    pub fn to_canonical_text(&self) -> String {
        self.to_string()
    }

    /// Locale summary such as `"Weekdays: 08:00 - 10:00, 12:00 - 15:00"`.
    pub fn to_readable_text(&self, labels: &DayLabels) -> String {
        let days = match self.day_mask {
            DayMask::EVERYDAY => labels.everyday.clone(),
            DayMask::WEEKEND => labels.weekend.clone(),
            DayMask::WEEKDAYS => labels.weekdays.clone(),
            mask => mask
                .days()
                .map(|day| labels.day(day))
                .collect::<Vec<_>>()
                .join(", "),
        };
        let spans = self
            .intervals
            .iter()
            .map(Interval::to_readable_text)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: {}", days, spans)
    }
}

impl Ord for ScheduleGroup {
    fn cmp(&self, other: &Self) -> Ordering {
        self.day_mask
            .cmp_bits(other.day_mask)
            .then_with(|| self.intervals.cmp(&other.intervals))
    }
}

impl PartialOrd for ScheduleGroup {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ScheduleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.day_mask)?;
        for (i, span) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", span)?;
        }
        Ok(())
    }
}

impl FromStr for ScheduleGroup {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let (mask, spans) = text
            .split_once(':')
            .ok_or_else(|| Error::group(text, "missing ':' separator"))?;

        let day_mask = mask.parse::<DayMask>().map_err(|e| match e {
            Error::InvalidDayMask(value) => {
                Error::group(text, format!("day mask {} is outside 0..=127", value))
            }
            other => other,
        })?;

        // "<mask>:" is how an empty group prints; read it back as one.
        if spans.is_empty() {
            return Ok(Self::with_mask(day_mask, []));
        }

        let intervals = spans
            .split(',')
            .map(Interval::parse)
            .collect::<Result<BTreeSet<_>>>()?;

        Ok(Self {
            day_mask,
            intervals,
        })
    }
}

impl Serialize for ScheduleGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ScheduleGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
