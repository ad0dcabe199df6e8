//! Consolidated simulator entry point
//!
//! The same projection logic used to live in every simulator widget with
//! small variations. This module is the single place that wires plan
//! validation, rate lookup and the chosen projection formula together;
//! callers pick a pre-built product configuration and feed it plans.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::plan::{ContributionPlan, PlanError, PlanRules};
use crate::projection::{
    project_exact, project_exact_detailed, project_flat, project_lump_sum, ContributionRow,
    ProjectionResult,
};
use crate::rates::RateSchedule;
use rust_decimal::Decimal;

/// Which projection formula a simulator surface uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionMethod {
    /// Per-deposit day-exact compounding (the reference formula)
    DayExact,

    /// Single-principal monthly compounding; treats the monthly amount as a
    /// one-time principal
    LumpSumMonthly,

    /// Flat blended rate over the contributed total
    FlatBlended,
}

/// Outcome of one simulation: the resolved rate and the projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// The plan that was projected
    pub plan: ContributionPlan,

    /// Annual rate resolved from the schedule, in percent
    pub annual_rate_pct: Decimal,

    /// Projection figures
    pub result: ProjectionResult,

    /// Per-deposit breakdown, populated for day-exact detailed runs
    pub rows: Vec<ContributionRow>,
}

/// A configured simulator: rate schedule, plan bounds and formula
#[derive(Debug, Clone)]
pub struct Simulator {
    schedule: RateSchedule,
    rules: PlanRules,
    method: ProjectionMethod,
}

impl Simulator {
    /// Build a simulator from explicit parts
    pub fn new(schedule: RateSchedule, rules: PlanRules, method: ProjectionMethod) -> Self {
        Self {
            schedule,
            rules,
            method,
        }
    }

    /// The standard savings simulator: coarse schedule, day-exact compounding
    pub fn standard_savings() -> Self {
        Self::new(
            RateSchedule::standard_savings(),
            PlanRules::standard_savings(),
            ProjectionMethod::DayExact,
        )
    }

    /// The goal savings simulator: goal schedule, flat blended projection
    pub fn goal_savings() -> Self {
        Self::new(
            RateSchedule::goal_savings(),
            PlanRules::goal_savings(),
            ProjectionMethod::FlatBlended,
        )
    }

    /// Rate schedule backing this simulator
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Plan bounds enforced by this simulator
    pub fn rules(&self) -> &PlanRules {
        &self.rules
    }

    /// Validate the plan, resolve its rate and project it
    pub fn run(&self, plan: ContributionPlan) -> Result<SimulationOutcome, PlanError> {
        self.run_inner(plan, false)
    }

    /// Same as `run`, keeping the per-deposit breakdown for day-exact plans
    pub fn run_detailed(&self, plan: ContributionPlan) -> Result<SimulationOutcome, PlanError> {
        self.run_inner(plan, true)
    }

    fn run_inner(
        &self,
        plan: ContributionPlan,
        detailed: bool,
    ) -> Result<SimulationOutcome, PlanError> {
        self.rules.validate(&plan)?;

        let rate = self.schedule.rate_for_duration(plan.duration_months);
        log::debug!(
            "simulating {} FCFA x {} months at {}% ({})",
            plan.monthly_amount,
            plan.duration_months,
            rate,
            self.schedule.name,
        );

        let (result, rows) = match self.method {
            ProjectionMethod::DayExact if detailed => {
                let (result, rows) =
                    project_exact_detailed(plan.monthly_amount, plan.duration_months, rate);
                (result, rows)
            }
            ProjectionMethod::DayExact => (
                project_exact(plan.monthly_amount, plan.duration_months, rate),
                Vec::new(),
            ),
            ProjectionMethod::LumpSumMonthly => (
                project_lump_sum(plan.monthly_amount, plan.duration_months, rate),
                Vec::new(),
            ),
            ProjectionMethod::FlatBlended => (
                project_flat(plan.monthly_amount, plan.duration_months, rate),
                Vec::new(),
            ),
        };

        Ok(SimulationOutcome {
            plan,
            annual_rate_pct: rate,
            result,
            rows,
        })
    }

    /// Project a batch of plans in parallel
    ///
    /// Each plan is validated independently; one invalid plan does not fail
    /// the batch.
    pub fn run_batch(
        &self,
        plans: &[ContributionPlan],
    ) -> Vec<Result<SimulationOutcome, PlanError>> {
        plans.par_iter().map(|plan| self.run(*plan)).collect()
    }
}
