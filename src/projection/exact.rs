//! Day-exact compound projection
//!
//! Each monthly deposit grows independently by (1 + rate/100)^(days/365)
//! for the number of days it stays invested, and the per-deposit future
//! values are summed into the final capital. All arithmetic runs in
//! `rust_decimal` (28 significant digits); native floats accumulate visible
//! drift over the up-to-180 terms of a long plan. Target agreement with the
//! spreadsheet reference is within 0.02%.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use super::daycount::days_remaining;
use super::result::{ContributionRow, ProjectionResult};

const DAYS_PER_YEAR: Decimal = dec!(365);

/// Project a recurring monthly deposit with day-exact compounding
///
/// `annual_rate_pct` is in percent (4.5 for 4.5%). Inputs are assumed
/// positive and within product bounds; validation belongs to the caller
/// (see `PlanRules`). For any non-negative rate the final capital is at
/// least `monthly_amount * duration_months`.
pub fn project_exact(
    monthly_amount: u64,
    duration_months: u32,
    annual_rate_pct: Decimal,
) -> ProjectionResult {
    let (result, _) = project(monthly_amount, duration_months, annual_rate_pct, false);
    result
}

/// Day-exact projection with the per-deposit breakdown retained
pub fn project_exact_detailed(
    monthly_amount: u64,
    duration_months: u32,
    annual_rate_pct: Decimal,
) -> (ProjectionResult, Vec<ContributionRow>) {
    project(monthly_amount, duration_months, annual_rate_pct, true)
}

fn project(
    monthly_amount: u64,
    duration_months: u32,
    annual_rate_pct: Decimal,
    detailed: bool,
) -> (ProjectionResult, Vec<ContributionRow>) {
    let amount = Decimal::from(monthly_amount);
    let total_contributed = amount * Decimal::from(duration_months);

    // Zero rate: every growth factor is exactly 1
    if annual_rate_pct.is_zero() {
        let rows = if detailed {
            (0..duration_months)
                .map(|i| ContributionRow {
                    month_index: i,
                    days_invested: days_remaining(i, duration_months),
                    growth_factor: Decimal::ONE,
                    future_value: amount,
                })
                .collect()
        } else {
            Vec::new()
        };
        return (
            ProjectionResult::new(total_contributed, total_contributed),
            rows,
        );
    }

    let growth_base = Decimal::ONE + annual_rate_pct / Decimal::ONE_HUNDRED;

    let mut capital = Decimal::ZERO;
    let mut rows = Vec::with_capacity(if detailed { duration_months as usize } else { 0 });

    for i in 0..duration_months {
        let days = days_remaining(i, duration_months);
        let exponent = Decimal::from(days) / DAYS_PER_YEAR;
        let growth_factor = growth_base.powd(exponent);
        let future_value = amount * growth_factor;
        capital += future_value;

        if detailed {
            rows.push(ContributionRow {
                month_index: i,
                days_invested: days,
                growth_factor,
                future_value,
            });
        }
    }

    // Round once, at the end, half-up to whole francs
    let capital_final = capital.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    (ProjectionResult::new(total_contributed, capital_final), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal::prelude::ToPrimitive;

    /// Spreadsheet agreement target from the product team
    const GOLDEN_TOLERANCE: f64 = 0.0002;

    fn capital_f64(result: &ProjectionResult) -> f64 {
        result.capital_final.to_f64().unwrap()
    }

    #[test]
    fn test_zero_rate_identity() {
        let result = project_exact(30_000, 12, dec!(0));
        assert_eq!(result.capital_final, dec!(360000));
        assert_eq!(result.interest, dec!(0));
    }

    #[test]
    fn test_interest_never_negative() {
        for (amount, months, rate) in [
            (1_000u64, 6u32, dec!(3.5)),
            (30_000, 12, dec!(4.5)),
            (100_000, 36, dec!(6.0)),
            (500_000, 180, dec!(10.0)),
        ] {
            let result = project_exact(amount, months, rate);
            let floor = Decimal::from(amount) * Decimal::from(months);
            assert!(
                result.capital_final >= floor,
                "capital {} below contributions {} for {}x{} @ {}",
                result.capital_final,
                floor,
                amount,
                months,
                rate
            );
            assert!(result.interest >= Decimal::ZERO);
        }
    }

    #[test]
    fn test_longer_duration_never_decreases_capital() {
        let rate = dec!(6.0);
        let mut previous = Decimal::ZERO;
        for months in [6, 12, 24, 36, 60, 120, 180] {
            let result = project_exact(30_000, months, rate);
            assert!(
                result.capital_final > previous,
                "capital did not grow from {} at {} months",
                previous,
                months
            );
            previous = result.capital_final;
        }
    }

    #[test]
    fn test_golden_twelve_month_plan() {
        // 30 000 FCFA/month for a year at 4.5%
        let result = project_exact(30_000, 12, dec!(4.5));
        assert_relative_eq!(capital_f64(&result), 368_642.0, max_relative = GOLDEN_TOLERANCE);
        assert!(result.interest > Decimal::ZERO);
    }

    #[test]
    fn test_golden_short_plan() {
        // Short plan, short day counts: interest stays a small fraction
        let result = project_exact(1_000, 6, dec!(3.5));
        assert_relative_eq!(capital_f64(&result), 6_057.0, max_relative = GOLDEN_TOLERANCE);
        assert!(result.interest < dec!(100));
    }

    #[test]
    fn test_golden_long_plan() {
        // 15 years at the top rate: interest becomes a large share of capital
        let result = project_exact(500_000, 180, dec!(10.0));
        assert_relative_eq!(
            capital_f64(&result),
            200_848_202.0,
            max_relative = GOLDEN_TOLERANCE
        );
        assert!(result.capital_final > dec!(90000000));
        assert!(result.interest > result.total_contributed);
    }

    #[test]
    fn test_detailed_rows_sum_to_capital() {
        let (result, rows) = project_exact_detailed(30_000, 12, dec!(4.5));
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].days_invested, 365);
        assert_eq!(rows[11].days_invested, 1);

        let total: Decimal = rows.iter().map(|r| r.future_value).sum();
        let rounded = total.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(rounded, result.capital_final);
    }
}
