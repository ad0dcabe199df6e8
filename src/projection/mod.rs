//! Savings projection functions: day-exact compounding and approximations

pub mod daycount;
mod exact;
mod result;
mod simple;

pub use daycount::{days_remaining, days_remaining_from};
pub use exact::{project_exact, project_exact_detailed};
pub use result::{ContributionRow, ProjectionResult, ProjectionSummary};
pub use simple::{project_flat, project_lump_sum};
