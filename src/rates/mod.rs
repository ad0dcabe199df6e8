//! Duration-based rate schedules for savings products

mod schedule;
pub mod loader;

pub use schedule::{RateBreakpoint, RateSchedule};
