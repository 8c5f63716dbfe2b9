//! Canonical text codec for schedules.
//!
//! Single intervals and groups implement `FromStr`/`Display` directly (see
//! [`crate::models`]); this module handles whole collections.
//!
//! # Formats
//!
//! - Interval: `"<from>-<to>"`, minutes-of-day
//! - Group: `"<mask>:<interval>[,<interval>...]"`
//! - Collection: `"<group>|<group>|..."`, trailing `|` and empty segments
//!   tolerated; empty text is an empty collection
//!
//! # Example
//!
//! ```
//! use timespan::parsing::{parse_collection, to_canonical_text};
//!
//! let groups = parse_collection("2:480-600,720-900|4:0-1440").unwrap();
//! assert_eq!(groups.len(), 2);
//! assert_eq!(to_canonical_text(&groups), "2:480-600,720-900|4:0-1440|");
//! ```

pub mod collection;

pub use collection::*;
