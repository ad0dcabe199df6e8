//! Projection output structures

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a projection: what goes in, what comes out at maturity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Sum of all deposits (or the single principal, for lump-sum
    /// projections), in FCFA
    pub total_contributed: Decimal,

    /// Projected capital at maturity, rounded half-up to whole FCFA
    pub capital_final: Decimal,

    /// Interest portion: `capital_final - total_contributed`
    pub interest: Decimal,
}

impl ProjectionResult {
    /// Build a result from contributed total and final capital
    pub fn new(total_contributed: Decimal, capital_final: Decimal) -> Self {
        Self {
            total_contributed,
            capital_final,
            interest: capital_final - total_contributed,
        }
    }

    /// Derived display metrics
    pub fn summary(&self, duration_months: u32) -> ProjectionSummary {
        let months = Decimal::from(duration_months.max(1));
        let yield_pct = if self.total_contributed.is_zero() {
            Decimal::ZERO
        } else {
            self.interest / self.total_contributed * Decimal::ONE_HUNDRED
        };

        ProjectionSummary {
            duration_months,
            total_contributed: self.total_contributed,
            capital_final: self.capital_final,
            interest: self.interest,
            average_monthly_interest: self.interest / months,
            yield_pct,
        }
    }
}

/// Per-deposit detail row from a day-exact projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRow {
    /// 0-based deposit month
    pub month_index: u32,

    /// Days this deposit stays invested until maturity
    pub days_invested: u32,

    /// Growth factor applied to the deposit: (1 + rate/100)^(days/365)
    pub growth_factor: Decimal,

    /// Deposit value at maturity, unrounded
    pub future_value: Decimal,
}

/// Display metrics derived from a projection result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub duration_months: u32,
    pub total_contributed: Decimal,
    pub capital_final: Decimal,
    pub interest: Decimal,
    pub average_monthly_interest: Decimal,
    pub yield_pct: Decimal,
}

impl ProjectionSummary {
    /// Yield as an f64 for quick display math, saturating on overflow
    pub fn yield_pct_f64(&self) -> f64 {
        self.yield_pct.to_f64().unwrap_or(f64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_interest_is_capital_minus_contributed() {
        let result = ProjectionResult::new(dec!(600000), dec!(627000));
        assert_eq!(result.interest, dec!(27000));
    }

    #[test]
    fn test_summary_metrics() {
        let result = ProjectionResult::new(dec!(600000), dec!(627000));
        let summary = result.summary(12);

        assert_eq!(summary.average_monthly_interest, dec!(2250));
        assert_eq!(summary.yield_pct, dec!(4.5));
    }
}
