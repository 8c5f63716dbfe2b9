use std::collections::BTreeSet;

use crate::config::DayLabels;
use crate::error::Result;
use crate::models::ScheduleGroup;

/// Separator written after every group.
pub const GROUP_SEPARATOR: char = '|';

/// Serialize groups in the given order, each followed by `|`.
pub fn to_canonical_text(groups: &[ScheduleGroup]) -> String {
    groups.iter().fold(String::new(), |mut out, group| {
        out.push_str(&group.to_canonical_text());
        out.push(GROUP_SEPARATOR);
        out
    })
}

/// Serialize groups in their total order with duplicates dropped, the form
/// the collection editor saves.
pub fn to_sorted_canonical_text(groups: &[ScheduleGroup]) -> String {
    let sorted: Vec<ScheduleGroup> = groups
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    to_canonical_text(&sorted)
}

/// Parse collection text.
///
/// Empty text yields an empty collection. Any malformed group fails the
/// whole parse; no partial result is returned.
pub fn parse_collection(text: &str) -> Result<Vec<ScheduleGroup>> {
    text.split(GROUP_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            ScheduleGroup::parse(segment).inspect_err(|e| {
                log::debug!("rejecting schedule collection '{}': {}", text, e);
            })
        })
        .collect()
}

/// Readable summary: every group followed by `"; "`, or the "anytime"
/// label for an empty collection.
pub fn to_readable_text(groups: &[ScheduleGroup], labels: &DayLabels) -> String {
    if groups.is_empty() {
        return labels.anytime.clone();
    }
    groups
        .iter()
        .map(|group| format!("{}; ", group.to_readable_text(labels)))
        .collect()
}
