//! UI-facing holder for a schedule collection.
//!
//! The selector keeps the current value behind a single lock, renders the
//! summary shown in the widget, and turns the editor's canonical text back
//! into groups on confirm.

use parking_lot::Mutex;

use crate::clock::Clock;
use crate::config::DisplayConfig;
use crate::error::Result;
use crate::models::{Interval, ScheduleGroup};
use crate::parsing;
use crate::services::availability;

type ChangeListener = Box<dyn Fn(&[ScheduleGroup]) + Send + Sync>;

/// Current value of a schedule widget.
pub struct ScheduleSelector {
    groups: Mutex<Vec<ScheduleGroup>>,
    default_value: ScheduleGroup,
    config: DisplayConfig,
    listener: Option<ChangeListener>,
}

impl ScheduleSelector {
    /// An empty selector; the empty value reads as "anytime".
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            groups: Mutex::new(Vec::new()),
            default_value: ScheduleGroup::every_day_all_day(),
            config,
            listener: None,
        }
    }

    /// Called with the new value after every accepted edit.
    pub fn set_on_change<F>(&mut self, listener: F)
    where
        F: Fn(&[ScheduleGroup]) + Send + Sync + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Labels and week start used for rendering.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The group a fresh widget stands for: every day, all day.
    pub fn default_value(&self) -> &ScheduleGroup {
        &self.default_value
    }

    /// Replace the current groups without notifying the listener.
    pub fn set_value<I>(&self, groups: I)
    where
        I: IntoIterator<Item = ScheduleGroup>,
    {
        let mut current = self.groups.lock();
        current.clear();
        current.extend(groups);
    }

    /// Snapshot of the current groups.
    pub fn value(&self) -> Vec<ScheduleGroup> {
        self.groups.lock().clone()
    }

    /// Canonical text handed to the editor.
    pub fn canonical_text(&self) -> String {
        parsing::to_canonical_text(&self.groups.lock())
    }

    /// Widget label.
    pub fn summary(&self) -> String {
        parsing::to_readable_text(&self.groups.lock(), &self.config.labels)
    }

    /// Accept the editor's canonical text.
    ///
    /// # Errors
    /// A malformed collection is rejected as a whole and the current value
    /// is left untouched.
    pub fn apply_edit(&self, text: &str) -> Result<Vec<ScheduleGroup>> {
        let groups = parsing::parse_collection(text)?;
        self.set_value(groups.iter().cloned());
        log::debug!("schedule selector updated to '{}'", text);
        if let Some(listener) = &self.listener {
            listener(&groups);
        }
        Ok(groups)
    }

    /// Whether any group is active at the clock's current time.
    pub fn is_active_now<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        availability::is_any_active(&self.groups.lock(), clock.now())
    }

    /// Shortest wait until some group becomes active.
    pub fn minutes_until_active<C: Clock + ?Sized>(&self, clock: &C) -> Option<u32> {
        availability::minutes_until_any_active(&self.groups.lock(), clock.now())
    }

    /// Build the group a single-group editor commits.
    ///
    /// Overlapping intervals are merged. A mask that is out of range or has
    /// no day selected cannot form a group; the every-day placeholder with
    /// no intervals is returned instead so the caller can ask the user to
    /// fix the selection.
    pub fn group_from_editor<I>(day_mask: i64, intervals: I) -> ScheduleGroup
    where
        I: IntoIterator<Item = Interval>,
    {
        match ScheduleGroup::from_intervals(day_mask, intervals) {
            Ok(group) if !group.day_mask().is_empty() => group.merge_overlapping(),
            Ok(_) => {
                log::warn!("editor produced a schedule with no days selected, using placeholder");
                ScheduleGroup::empty_every_day()
            }
            Err(e) => {
                log::warn!("editor produced an invalid schedule ({}), using placeholder", e);
                ScheduleGroup::empty_every_day()
            }
        }
    }
}

impl Default for ScheduleSelector {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}
