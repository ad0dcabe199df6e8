//! Contribution plan data structures and product bounds

mod data;

pub use data::{ContributionPlan, PlanError, PlanRules};
