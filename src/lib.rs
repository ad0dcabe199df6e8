//! Savings Projection Engine - projection core for recurring-deposit savings products
//!
//! This library provides:
//! - Duration-based rate schedules (two distinct production schedules)
//! - Day-count calculation for day-exact compounding
//! - Day-exact compound projection in arbitrary-precision decimal
//! - Simple projections (lump-sum monthly compounding, flat blended rate)
//! - FCFA / percentage display formatting (French locale)
//! - A consolidated simulator front door with plan validation and batch runs

pub mod format;
pub mod plan;
pub mod projection;
pub mod rates;
pub mod simulator;

// Re-export commonly used types
pub use plan::{ContributionPlan, PlanError, PlanRules};
pub use projection::{ProjectionResult, ProjectionSummary};
pub use rates::RateSchedule;
pub use simulator::{ProjectionMethod, SimulationOutcome, Simulator};
