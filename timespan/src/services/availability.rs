//! Availability queries over a collection of schedule groups.
//!
//! A collection is a plain slice; every function here is pure.

use crate::clock::WallClock;
use crate::models::{Interval, ScheduleGroup};

/// Whether any group is active at `at`.
pub fn is_any_active(groups: &[ScheduleGroup], at: WallClock) -> bool {
    groups
        .iter()
        .any(|group| group.is_active(at.weekday(), at.minute()))
}

/// Shortest wait until some group becomes active; `Some(0)` if one is
/// active now.
///
/// Returns `None` for an empty collection or one whose groups have no
/// intervals at all.
///
/// # Panics
/// Panics if a group with an empty day mask has to be looked ahead, see
/// [`ScheduleGroup::minutes_until_active`].
pub fn minutes_until_any_active(groups: &[ScheduleGroup], at: WallClock) -> Option<u32> {
    groups
        .iter()
        .filter_map(|group| group.minutes_until_active(at.weekday(), at.minute()))
        .min()
}

/// Minutes left in the unbroken active window around `at`.
///
/// Only groups active on `at.weekday()` count, and only their intervals that
/// contain `at.minute()`. Those intervals are sorted by start and swept into
/// one window; the result is the distance from `at.minute()` to its end.
/// `None` when nothing is active.
pub fn remaining_minutes_of_current_active_window(
    groups: &[ScheduleGroup],
    at: WallClock,
) -> Option<u32> {
    let mut active: Vec<Interval> = groups
        .iter()
        .filter(|group| group.is_active_today(at.weekday()))
        .flat_map(|group| group.intervals())
        .filter(|span| span.is_active(at.minute()))
        .collect();
    active.sort();

    let (first, rest) = active.split_first()?;
    let window = rest.iter().fold(*first, |window, span| {
        if window.intersects(span) {
            window.join(span)
        } else {
            window
        }
    });

    log::trace!(
        "active window {} around minute {} on day {}",
        window,
        at.minute(),
        at.weekday()
    );
    Some((window.to() - at.minute()).max(0) as u32)
}
