pub mod day_mask;
pub mod interval;
pub mod schedule_group;


pub use day_mask::*;
pub use interval::*;
pub use schedule_group::*;
