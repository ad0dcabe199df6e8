//! Simple projection approximations
//!
//! Cheaper formulas used by secondary display surfaces. They are not
//! expected to agree with the day-exact projection; `compare_variants`
//! documents the gap for representative inputs.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use super::result::ProjectionResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Compound a single principal monthly at `annual_rate_pct / 12`
///
/// This models one lump sum left to grow for `duration_months`; it does NOT
/// model recurring deposits, even though some display surfaces feed it a
/// monthly contribution amount. Callers must be explicit about which they
/// mean. Kept as-is pending a product decision on which formula is
/// authoritative where.
pub fn project_lump_sum(
    principal: u64,
    duration_months: u32,
    annual_rate_pct: Decimal,
) -> ProjectionResult {
    let principal = Decimal::from(principal);

    if annual_rate_pct.is_zero() {
        return ProjectionResult::new(principal, principal);
    }

    let monthly_rate = annual_rate_pct / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR;
    let capital = principal * (Decimal::ONE + monthly_rate).powi(duration_months as i64);
    let capital_final = capital.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    ProjectionResult::new(principal, capital_final)
}

/// Flat blended-rate projection over the total contributed sum
///
/// `interest = amount * months * rate/100 * months/12` — simple,
/// non-compounded interest applied once, used for quick goal projections.
pub fn project_flat(
    monthly_amount: u64,
    duration_months: u32,
    annual_rate_pct: Decimal,
) -> ProjectionResult {
    let months = Decimal::from(duration_months);
    let total_contributed = Decimal::from(monthly_amount) * months;

    let years = months / MONTHS_PER_YEAR;
    let interest = total_contributed * annual_rate_pct / Decimal::ONE_HUNDRED * years;
    let interest = interest.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    ProjectionResult::new(total_contributed, total_contributed + interest)
}
