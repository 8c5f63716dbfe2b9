//! # timespan
//!
//! Recurring weekly time windows such as "business hours".
//!
//! A schedule is a collection of groups. Each group pairs a day mask (which
//! weekdays it applies to) with a set of minute-of-day intervals. The crate
//! parses and prints the compact canonical text form of schedules and
//! answers availability questions against a wall-clock snapshot: is the
//! schedule active now, how long until it becomes active, and how much of
//! the current active window is left.
//!
//! ## Architecture
//!
//! - [`models`]: `Interval`, `DayMask`, `DayOfWeek`, `ScheduleGroup`
//! - [`parsing`]: canonical text codec for whole collections
//! - [`services`]: collection-level availability and the widget value holder
//! - [`clock`]: the wall-clock boundary (`WallClock`, `Clock`)
//! - [`config`]: display labels and week start, loaded from TOML
//!
//! ## Example
//!
//! ```
//! use timespan::clock::WallClock;
//! use timespan::models::DayOfWeek;
//! use timespan::parsing::parse_collection;
//! use timespan::services::minutes_until_any_active;
//!
//! let groups = parse_collection("2:480-600,720-900|4:0-1440").unwrap();
//! let monday_morning = WallClock::new(DayOfWeek::MONDAY, 420).unwrap();
//! assert_eq!(minutes_until_any_active(&groups, monday_morning), Some(60));
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;

pub use error::{Error, Result};
