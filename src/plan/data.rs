//! Contribution plan value types and boundary validation
//!
//! The projection functions themselves are pure math over positive inputs;
//! all bounds checking happens here, before a plan ever reaches them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A savings plan as entered by the subscriber: a recurring monthly deposit
/// held for a fixed number of months. Amounts are in whole FCFA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionPlan {
    /// Monthly deposit amount in FCFA
    pub monthly_amount: u64,

    /// Plan duration in months
    pub duration_months: u32,
}

impl ContributionPlan {
    /// Create a plan without bounds checking (caller has already validated)
    pub fn new(monthly_amount: u64, duration_months: u32) -> Self {
        Self {
            monthly_amount,
            duration_months,
        }
    }

    /// Create a plan, enforcing the given product rules
    pub fn validated(
        monthly_amount: u64,
        duration_months: u32,
        rules: &PlanRules,
    ) -> Result<Self, PlanError> {
        let plan = Self::new(monthly_amount, duration_months);
        rules.validate(&plan)?;
        Ok(plan)
    }

    /// Total deposited over the life of the plan, before any interest
    pub fn total_contributed(&self) -> u64 {
        self.monthly_amount * self.duration_months as u64
    }
}

/// Validation failure for a contribution plan against a product's rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("monthly amount {amount} FCFA is below the minimum of {minimum} FCFA")]
    AmountBelowMinimum { amount: u64, minimum: u64 },

    #[error("monthly amount {amount} FCFA exceeds the maximum of {maximum} FCFA")]
    AmountAboveMaximum { amount: u64, maximum: u64 },

    #[error("monthly amount {amount} FCFA must be a multiple of {step} FCFA")]
    AmountNotMultipleOfStep { amount: u64, step: u64 },

    #[error("duration of {months} months is below the minimum of {minimum} months")]
    DurationBelowMinimum { months: u32, minimum: u32 },

    #[error("duration of {months} months exceeds the maximum of {maximum} months")]
    DurationAboveMaximum { months: u32, maximum: u32 },
}

/// Product-defined bounds on contribution plans
///
/// Two rule sets are in production: the standard simulator accepts any amount
/// from 1 000 FCFA, while the goal simulator starts at 30 000 FCFA and
/// requires deposits in 1 000-franc steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRules {
    /// Minimum monthly deposit in FCFA
    pub min_monthly_amount: u64,

    /// Maximum monthly deposit in FCFA
    pub max_monthly_amount: u64,

    /// Required step for the deposit amount, if any
    pub amount_step: Option<u64>,

    /// Minimum plan duration in months
    pub min_duration_months: u32,

    /// Maximum plan duration in months
    pub max_duration_months: u32,
}

impl PlanRules {
    /// Bounds for the standard savings simulator
    pub fn standard_savings() -> Self {
        Self {
            min_monthly_amount: 1_000,
            max_monthly_amount: 500_000,
            amount_step: None,
            min_duration_months: 6,
            max_duration_months: 180,
        }
    }

    /// Bounds for the goal savings simulator (stricter minimum, 1 000-franc step)
    pub fn goal_savings() -> Self {
        Self {
            min_monthly_amount: 30_000,
            max_monthly_amount: 500_000,
            amount_step: Some(1_000),
            min_duration_months: 3,
            max_duration_months: 120,
        }
    }

    /// Check a plan against these rules
    pub fn validate(&self, plan: &ContributionPlan) -> Result<(), PlanError> {
        if plan.monthly_amount < self.min_monthly_amount {
            return Err(PlanError::AmountBelowMinimum {
                amount: plan.monthly_amount,
                minimum: self.min_monthly_amount,
            });
        }
        if plan.monthly_amount > self.max_monthly_amount {
            return Err(PlanError::AmountAboveMaximum {
                amount: plan.monthly_amount,
                maximum: self.max_monthly_amount,
            });
        }
        if let Some(step) = self.amount_step {
            if plan.monthly_amount % step != 0 {
                return Err(PlanError::AmountNotMultipleOfStep {
                    amount: plan.monthly_amount,
                    step,
                });
            }
        }
        if plan.duration_months < self.min_duration_months {
            return Err(PlanError::DurationBelowMinimum {
                months: plan.duration_months,
                minimum: self.min_duration_months,
            });
        }
        if plan.duration_months > self.max_duration_months {
            return Err(PlanError::DurationAboveMaximum {
                months: plan.duration_months,
                maximum: self.max_duration_months,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_bounds() {
        let rules = PlanRules::standard_savings();

        assert!(ContributionPlan::validated(1_000, 6, &rules).is_ok());
        assert!(ContributionPlan::validated(500_000, 180, &rules).is_ok());
        // No step requirement on the standard simulator
        assert!(ContributionPlan::validated(1_500, 12, &rules).is_ok());

        assert_eq!(
            ContributionPlan::validated(999, 12, &rules),
            Err(PlanError::AmountBelowMinimum {
                amount: 999,
                minimum: 1_000
            })
        );
        assert_eq!(
            ContributionPlan::validated(500_001, 12, &rules),
            Err(PlanError::AmountAboveMaximum {
                amount: 500_001,
                maximum: 500_000
            })
        );
        assert_eq!(
            ContributionPlan::validated(10_000, 5, &rules),
            Err(PlanError::DurationBelowMinimum {
                months: 5,
                minimum: 6
            })
        );
        assert_eq!(
            ContributionPlan::validated(10_000, 181, &rules),
            Err(PlanError::DurationAboveMaximum {
                months: 181,
                maximum: 180
            })
        );
    }

    #[test]
    fn test_goal_bounds_enforce_step() {
        let rules = PlanRules::goal_savings();

        assert!(ContributionPlan::validated(30_000, 3, &rules).is_ok());
        assert!(ContributionPlan::validated(31_000, 120, &rules).is_ok());

        assert_eq!(
            ContributionPlan::validated(30_500, 12, &rules),
            Err(PlanError::AmountNotMultipleOfStep {
                amount: 30_500,
                step: 1_000
            })
        );
        assert_eq!(
            ContributionPlan::validated(29_000, 12, &rules),
            Err(PlanError::AmountBelowMinimum {
                amount: 29_000,
                minimum: 30_000
            })
        );
    }

    #[test]
    fn test_total_contributed() {
        let plan = ContributionPlan::new(30_000, 12);
        assert_eq!(plan.total_contributed(), 360_000);
    }
}
