//! Day-count calculator for day-exact compounding
//!
//! Each monthly deposit earns interest for the number of calendar days
//! between its deposit date and the plan's maturity. Two conventions:
//! - 12-month plans use a literal table capturing real month lengths for a
//!   non-leap year starting January 1st;
//! - any other duration sums average month lengths cycling from the deposit's
//!   position in the year.
//!
//! In both cases the deposit made in the final month earns exactly one day of
//! interest: it is paid in at the end of the plan.

use chrono::{Months, NaiveDate};

/// Days remaining until maturity after each deposit of a 12-month plan,
/// indexed by 0-based deposit month (non-leap year, January 1st start)
const DAYS_REMAINING_12_MONTHS: [u32; 12] =
    [365, 334, 306, 275, 245, 214, 184, 153, 122, 92, 61, 1];

/// Average month lengths, cycled by deposit position for non-12-month plans
const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Number of days the deposit made in month `month_index` (0-based) stays
/// invested until the maturity of a `total_months` plan
pub fn days_remaining(month_index: u32, total_months: u32) -> u32 {
    debug_assert!(month_index < total_months);

    // Final deposit earns exactly one day regardless of the convention
    if month_index == total_months - 1 {
        return 1;
    }

    if total_months == 12 {
        return DAYS_REMAINING_12_MONTHS[month_index as usize];
    }

    (month_index..total_months)
        .map(|i| MONTH_LENGTHS[(i % 12) as usize])
        .sum()
}

/// Calendar-exact days remaining, anchored on an explicit start date
///
/// Deposit `month_index` is paid in on `start + month_index` months and the
/// plan matures on `start + total_months` months. The final-month one-day
/// rule applies here as well. Month arithmetic clamps to the end of shorter
/// months (a January 31st start deposits on February 28th).
pub fn days_remaining_from(start: NaiveDate, month_index: u32, total_months: u32) -> u32 {
    debug_assert!(month_index < total_months);

    if month_index == total_months - 1 {
        return 1;
    }

    let maturity = add_months(start, total_months);
    let deposit_date = add_months(start, month_index);
    (maturity - deposit_date).num_days() as u32
}

/// Add months to a date, clamping at the chrono range limit
fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}
