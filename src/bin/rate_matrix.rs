//! Sweep a grid of deposit amounts and durations for one schedule
//!
//! Outputs the projected capital and interest for every combination as CSV,
//! for the product team's rate cards and spreadsheet comparison.

use std::fs::File;
use std::io::Write;
use std::time::Instant;

use rayon::prelude::*;
use savings_projection::{ContributionPlan, Simulator};

const AMOUNTS: [u64; 6] = [1_000, 5_000, 10_000, 30_000, 100_000, 500_000];
const DURATIONS: [u32; 8] = [6, 12, 24, 36, 60, 120, 150, 180];

fn main() {
    env_logger::init();

    let start = Instant::now();
    let simulator = Simulator::standard_savings();

    let plans: Vec<ContributionPlan> = AMOUNTS
        .iter()
        .flat_map(|&amount| {
            DURATIONS
                .iter()
                .map(move |&months| ContributionPlan::new(amount, months))
        })
        .collect();

    println!("Projecting {} plans...", plans.len());

    let outcomes: Vec<_> = plans
        .par_iter()
        .map(|plan| simulator.run(*plan).expect("grid plan within bounds"))
        .collect();

    println!("Projections complete in {:?}", start.elapsed());

    let output_path = "rate_matrix_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(file, "MonthlyAmount,Months,AnnualRatePct,TotalContributed,CapitalFinal,Interest")
        .unwrap();

    for outcome in &outcomes {
        writeln!(
            file,
            "{},{},{},{},{},{}",
            outcome.plan.monthly_amount,
            outcome.plan.duration_months,
            outcome.annual_rate_pct,
            outcome.result.total_contributed,
            outcome.result.capital_final,
            outcome.result.interest,
        )
        .unwrap();
    }

    println!("Output written to {}", output_path);

    // Milestone rows for a quick sanity read
    println!("\nMilestones:");
    for outcome in outcomes.iter().filter(|o| o.plan.monthly_amount == 30_000) {
        println!(
            "  {:>6} FCFA x {:>3} months @ {:>4}%: capital={:>12} interest={:>12}",
            outcome.plan.monthly_amount,
            outcome.plan.duration_months,
            outcome.annual_rate_pct,
            outcome.result.capital_final,
            outcome.result.interest,
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
