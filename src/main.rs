//! Savings Projection CLI
//!
//! Runs one simulation from the command line, prints the per-deposit
//! breakdown and writes CSV/JSON outputs for spreadsheet comparison.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use savings_projection::format::{format_currency, format_rate_percent};
use savings_projection::{ContributionPlan, ProjectionMethod, RateSchedule, Simulator};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScheduleArg {
    /// Coarse schedule used by the standard simulators
    Standard,
    /// Schedule used by the goal projections
    Goal,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    /// Day-exact compounding of each deposit
    Exact,
    /// Flat blended rate over the contributed total
    Flat,
    /// Single-principal monthly compounding
    Lump,
}

#[derive(Debug, Parser)]
#[command(name = "savings_projection", about = "Savings projection engine")]
struct Args {
    /// Monthly deposit amount in FCFA
    #[arg(long, default_value_t = 30_000)]
    amount: u64,

    /// Plan duration in months
    #[arg(long, default_value_t = 12)]
    months: u32,

    /// Rate schedule to resolve the annual rate from
    #[arg(long, value_enum, default_value = "standard")]
    schedule: ScheduleArg,

    /// Projection formula
    #[arg(long, value_enum, default_value = "exact")]
    method: MethodArg,

    /// Load a custom rate schedule from a CSV file instead
    #[arg(long)]
    schedule_csv: Option<PathBuf>,

    /// Write the per-deposit breakdown to this CSV file
    #[arg(long, default_value = "simulation_output.csv")]
    csv: PathBuf,

    /// Write the outcome as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let schedule = match &args.schedule_csv {
        Some(path) => savings_projection::rates::loader::load_schedule(path)?,
        None => match args.schedule {
            ScheduleArg::Standard => RateSchedule::standard_savings(),
            ScheduleArg::Goal => RateSchedule::goal_savings(),
        },
    };
    let rules = match args.schedule {
        ScheduleArg::Standard => savings_projection::PlanRules::standard_savings(),
        ScheduleArg::Goal => savings_projection::PlanRules::goal_savings(),
    };
    let method = match args.method {
        MethodArg::Exact => ProjectionMethod::DayExact,
        MethodArg::Flat => ProjectionMethod::FlatBlended,
        MethodArg::Lump => ProjectionMethod::LumpSumMonthly,
    };

    let simulator = Simulator::new(schedule, rules, method);
    let plan = ContributionPlan::new(args.amount, args.months);

    println!("Savings Projection v0.1.0");
    println!("=========================\n");

    let outcome = simulator
        .run_detailed(plan)
        .context("plan rejected by product rules")?;

    println!("Plan: {} / month for {} months", format_currency(Decimal::from(plan.monthly_amount)), plan.duration_months);
    println!("  Schedule: {}", simulator.schedule().name);
    println!("  Annual rate: {}", format_rate_percent(outcome.annual_rate_pct));
    println!();

    if !outcome.rows.is_empty() {
        println!("{:>5} {:>6} {:>14} {:>16}", "Month", "Days", "GrowthFactor", "FutureValue");
        println!("{}", "-".repeat(45));
        for row in &outcome.rows {
            println!(
                "{:>5} {:>6} {:>14.10} {:>16.2}",
                row.month_index + 1,
                row.days_invested,
                row.growth_factor,
                row.future_value,
            );
        }
        println!();

        // Full breakdown to CSV for spreadsheet comparison
        let mut file = File::create(&args.csv)
            .with_context(|| format!("unable to create {}", args.csv.display()))?;
        writeln!(file, "Month,Days,GrowthFactor,FutureValue")?;
        for row in &outcome.rows {
            writeln!(
                file,
                "{},{},{:.10},{:.8}",
                row.month_index + 1,
                row.days_invested,
                row.growth_factor,
                row.future_value,
            )?;
        }
        println!("Breakdown written to: {}", args.csv.display());
    }

    if let Some(json_path) = &args.json {
        let file = File::create(json_path)
            .with_context(|| format!("unable to create {}", json_path.display()))?;
        serde_json::to_writer_pretty(file, &outcome)?;
        println!("Outcome written to: {}", json_path.display());
    }

    let summary = outcome.result.summary(plan.duration_months);
    println!("\nSummary:");
    println!("  Total contributed: {}", format_currency(summary.total_contributed));
    println!("  Capital at maturity: {}", format_currency(summary.capital_final));
    println!("  Interest earned: {}", format_currency(summary.interest));
    println!("  Average monthly interest: {}", format_currency(summary.average_monthly_interest));
    println!("  Yield: {}", format_rate_percent(summary.yield_pct));

    Ok(())
}
