//! Rate schedules mapping plan duration to an annual interest rate
//!
//! Two distinct schedules are in production for what is nominally the same
//! savings offering. They are not interchangeable: each simulator must name
//! the schedule it uses, so the lookup is an instance method rather than a
//! hard-coded table.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One breakpoint in a rate schedule: plans up to and including `max_months`
/// earn `annual_rate_pct` percent per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBreakpoint {
    /// Inclusive upper bound on plan duration, in months
    pub max_months: u32,

    /// Annual rate in percent (e.g. 6.0 for 6.0%)
    pub annual_rate_pct: Decimal,
}

/// An ordered breakpoint table with a catch-all rate for longer durations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSchedule {
    /// Schedule name, for logs and output headers
    pub name: String,

    /// Breakpoints in ascending order of `max_months`
    breakpoints: Vec<RateBreakpoint>,

    /// Rate for durations beyond the last breakpoint
    catch_all_rate_pct: Decimal,
}

impl RateSchedule {
    /// Build a schedule from explicit breakpoints (ascending `max_months`)
    pub fn from_breakpoints(
        name: impl Into<String>,
        breakpoints: Vec<RateBreakpoint>,
        catch_all_rate_pct: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            breakpoints,
            catch_all_rate_pct,
        }
    }

    /// The coarse schedule used by the standard savings simulators
    pub fn standard_savings() -> Self {
        Self::from_breakpoints(
            "standard_savings",
            vec![
                RateBreakpoint { max_months: 6, annual_rate_pct: dec!(3.5) },
                RateBreakpoint { max_months: 12, annual_rate_pct: dec!(4.5) },
                RateBreakpoint { max_months: 36, annual_rate_pct: dec!(6.0) },
                RateBreakpoint { max_months: 60, annual_rate_pct: dec!(7.0) },
                RateBreakpoint { max_months: 120, annual_rate_pct: dec!(8.5) },
            ],
            dec!(10.0),
        )
    }

    /// The schedule used by the goal/objective projections
    ///
    /// The source buckets are strict upper bounds (`< 12 months` earns 3%),
    /// encoded here as inclusive bounds one month lower.
    pub fn goal_savings() -> Self {
        Self::from_breakpoints(
            "goal_savings",
            vec![
                RateBreakpoint { max_months: 11, annual_rate_pct: dec!(3.0) },
                RateBreakpoint { max_months: 23, annual_rate_pct: dec!(4.5) },
                RateBreakpoint { max_months: 59, annual_rate_pct: dec!(5.5) },
                RateBreakpoint { max_months: 119, annual_rate_pct: dec!(6.5) },
            ],
            dec!(7.0),
        )
    }

    /// Annual rate in percent for a plan of the given duration
    ///
    /// Selects the first breakpoint whose upper bound is >= the duration.
    /// Duration 0 therefore falls into the smallest breakpoint; callers are
    /// expected to have validated duration bounds before looking up a rate.
    pub fn rate_for_duration(&self, duration_months: u32) -> Decimal {
        for bp in &self.breakpoints {
            if duration_months <= bp.max_months {
                return bp.annual_rate_pct;
            }
        }
        self.catch_all_rate_pct
    }

    /// Breakpoints of this schedule, ascending
    pub fn breakpoints(&self) -> &[RateBreakpoint] {
        &self.breakpoints
    }

    /// Catch-all rate for durations beyond the last breakpoint
    pub fn catch_all_rate_pct(&self) -> Decimal {
        self.catch_all_rate_pct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_schedule_breakpoints() {
        let s = RateSchedule::standard_savings();

        assert_eq!(s.rate_for_duration(6), dec!(3.5));
        assert_eq!(s.rate_for_duration(7), dec!(4.5));
        assert_eq!(s.rate_for_duration(12), dec!(4.5));
        assert_eq!(s.rate_for_duration(13), dec!(6.0));
        assert_eq!(s.rate_for_duration(36), dec!(6.0));
        assert_eq!(s.rate_for_duration(37), dec!(7.0));
        assert_eq!(s.rate_for_duration(60), dec!(7.0));
        assert_eq!(s.rate_for_duration(61), dec!(8.5));
        assert_eq!(s.rate_for_duration(120), dec!(8.5));
        assert_eq!(s.rate_for_duration(121), dec!(10.0));
        assert_eq!(s.rate_for_duration(180), dec!(10.0));
    }

    #[test]
    fn test_goal_schedule_breakpoints() {
        let s = RateSchedule::goal_savings();

        assert_eq!(s.rate_for_duration(11), dec!(3.0));
        assert_eq!(s.rate_for_duration(12), dec!(4.5));
        assert_eq!(s.rate_for_duration(23), dec!(4.5));
        assert_eq!(s.rate_for_duration(24), dec!(5.5));
        assert_eq!(s.rate_for_duration(59), dec!(5.5));
        assert_eq!(s.rate_for_duration(60), dec!(6.5));
        assert_eq!(s.rate_for_duration(119), dec!(6.5));
        assert_eq!(s.rate_for_duration(120), dec!(7.0));
    }

    #[test]
    fn test_schedules_differ() {
        // Same duration, different product, different rate
        let standard = RateSchedule::standard_savings();
        let goal = RateSchedule::goal_savings();
        assert_ne!(standard.rate_for_duration(6), goal.rate_for_duration(6));
        assert_ne!(standard.rate_for_duration(36), goal.rate_for_duration(36));
    }

    #[test]
    fn test_duration_zero_falls_in_smallest_bucket() {
        // Known edge case: lookup does not reject out-of-bounds durations
        let s = RateSchedule::standard_savings();
        assert_eq!(s.rate_for_duration(0), dec!(3.5));
    }
}
