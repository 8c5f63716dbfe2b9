//! End-to-end schedule scenarios: text in, availability out.

use proptest::prelude::*;

use timespan::models::{DayMask, DayOfWeek, Interval, ScheduleGroup};
use timespan::parsing::{parse_collection, to_canonical_text};
use timespan::services::{
    is_any_active, minutes_until_any_active, remaining_minutes_of_current_active_window,
};

mod support;
use support::{at, iv};

// =========================================================
// Canonical text
// =========================================================

#[test]
fn test_parse_and_reserialize_collection() {
    let text = "2:480-600,720-900|4:0-1440";
    let groups = parse_collection(text).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].day_mask().bits(), 2);
    assert_eq!(
        groups[0].intervals().collect::<Vec<_>>(),
        vec![iv(480, 600), iv(720, 900)]
    );
    assert_eq!(groups[1].day_mask().bits(), 4);
    assert_eq!(groups[1].intervals().collect::<Vec<_>>(), vec![iv(0, 1440)]);

    let printed = to_canonical_text(&groups);
    assert_eq!(printed.trim_end_matches('|'), text);
    assert_eq!(parse_collection(&printed).unwrap(), groups);
}

#[test]
fn test_bad_group_aborts_collection() {
    let err = parse_collection("2:480-600|2:900-800").unwrap_err();
    assert!(err.is_invalid_argument());
}

// =========================================================
// Availability
// =========================================================

#[test]
fn test_business_hours_week() {
    // Weekdays 09:00-12:00 and 13:00-18:00, Saturday morning
    let groups = parse_collection("62:540-720,780-1080|64:600-720|").unwrap();

    let friday_lunch = at(DayOfWeek::FRIDAY, 750);
    assert!(!is_any_active(&groups, friday_lunch));
    assert_eq!(minutes_until_any_active(&groups, friday_lunch), Some(30));

    let friday_evening = at(DayOfWeek::FRIDAY, 1200);
    assert_eq!(
        minutes_until_any_active(&groups, friday_evening),
        Some(1440 + 600 - 1200)
    );

    let saturday_evening = at(DayOfWeek::SATURDAY, 800);
    // Next is Monday 09:00
    assert_eq!(
        minutes_until_any_active(&groups, saturday_evening),
        Some(2 * 1440 + 540 - 800)
    );

    let tuesday_morning = at(DayOfWeek::TUESDAY, 600);
    assert!(is_any_active(&groups, tuesday_morning));
    assert_eq!(minutes_until_any_active(&groups, tuesday_morning), Some(0));
    assert_eq!(
        remaining_minutes_of_current_active_window(&groups, tuesday_morning),
        Some(120)
    );
}

#[test]
fn test_remaining_window_merges_across_groups() {
    let groups = vec![
        ScheduleGroup::from_intervals(2, [iv(60, 120)]).unwrap(),
        ScheduleGroup::from_intervals(2, [iv(100, 150)]).unwrap(),
    ];
    assert_eq!(
        remaining_minutes_of_current_active_window(&groups, at(DayOfWeek::MONDAY, 110)),
        Some(40)
    );
}

#[test]
fn test_every_day_all_day_collection() {
    let groups = vec![ScheduleGroup::every_day_all_day()];
    for n in 1..=7 {
        let day = DayOfWeek::new(n).unwrap();
        assert_eq!(minutes_until_any_active(&groups, at(day, 0)), Some(0));
        assert_eq!(minutes_until_any_active(&groups, at(day, 1439)), Some(0));
    }
    assert_eq!(
        remaining_minutes_of_current_active_window(&groups, at(DayOfWeek::SUNDAY, 1000)),
        Some(440)
    );
}

// =========================================================
// Properties
// =========================================================

fn interval_strategy() -> impl Strategy<Value = Interval> {
    (0..=1440i32, 0..=1440i32).prop_map(|(a, b)| Interval::new(a.min(b), a.max(b)).unwrap())
}

fn group_strategy() -> impl Strategy<Value = ScheduleGroup> {
    (
        0..=127i64,
        proptest::collection::vec(interval_strategy(), 1..5),
    )
        .prop_map(|(mask, spans)| ScheduleGroup::from_intervals(mask, spans).unwrap())
}

proptest! {
    #[test]
    fn prop_interval_text_round_trip(interval in interval_strategy()) {
        let text = interval.to_canonical_text();
        prop_assert_eq!(Interval::parse(&text).unwrap(), interval);
    }

    #[test]
    fn prop_collection_text_round_trip(groups in proptest::collection::vec(group_strategy(), 1..4)) {
        let text = to_canonical_text(&groups);
        prop_assert_eq!(parse_collection(&text).unwrap(), groups);
    }

    #[test]
    fn prop_lead_time_is_zero_exactly_when_active(
        spans in proptest::collection::vec(interval_strategy(), 1..4),
        mask in 1..=127i64,
        day in 1..=7i64,
        minute in 0..1440i32,
    ) {
        let group = ScheduleGroup::from_intervals(mask, spans).unwrap();
        let now = at(DayOfWeek::new(day).unwrap(), minute);
        let lead = group.minutes_until_active(now.weekday(), now.minute()).unwrap();
        prop_assert_eq!(lead == 0, group.is_active(now.weekday(), now.minute()));
        prop_assert!(lead <= 8 * 1440);
    }

    #[test]
    fn prop_merge_leaves_no_intersections(group in group_strategy()) {
        let merged: Vec<Interval> = group.merge_overlapping().intervals().collect();
        for pair in merged.windows(2) {
            prop_assert!(!pair[0].intersects(&pair[1]));
        }
        prop_assert_eq!(group.merge_overlapping().day_mask(), group.day_mask());
    }
}

#[test]
fn test_named_masks_match_parsed_values() {
    let groups = parse_collection("127:0-10|65:0-10|62:0-10").unwrap();
    let masks: Vec<DayMask> = groups.iter().map(ScheduleGroup::day_mask).collect();
    assert_eq!(masks, vec![DayMask::EVERYDAY, DayMask::WEEKEND, DayMask::WEEKDAYS]);
}
