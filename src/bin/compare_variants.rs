//! Compare the day-exact projection with the simple approximations
//!
//! The simple formulas are display shortcuts, not reimplementations of the
//! reference math; this prints how far each sits from the day-exact result
//! for representative inputs so the gap stays a known quantity.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use savings_projection::projection::{project_exact, project_flat, project_lump_sum};
use savings_projection::RateSchedule;

fn pct_of(part: Decimal, whole: Decimal) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    (part / whole * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
}

fn main() {
    env_logger::init();

    let schedule = RateSchedule::standard_savings();
    let cases: [(u64, u32); 5] = [(1_000, 6), (30_000, 12), (50_000, 24), (100_000, 60), (500_000, 180)];

    println!("Day-exact vs simple projections (standard schedule)");
    println!(
        "{:<10} {:<7} {:<6} {:>14} {:>14} {:>9} {:>14} {:>9}",
        "Amount", "Months", "Rate", "Exact", "Flat", "FlatDev%", "LumpSum", "LumpDev%"
    );

    for (amount, months) in cases {
        let rate = schedule.rate_for_duration(months);
        let exact = project_exact(amount, months, rate);
        let flat = project_flat(amount, months, rate);
        let lump = project_lump_sum(amount, months, rate);

        let flat_dev = pct_of(flat.capital_final - exact.capital_final, exact.capital_final);
        let lump_dev = pct_of(lump.capital_final - exact.capital_final, exact.capital_final);

        println!(
            "{:<10} {:<7} {:<6} {:>14} {:>14} {:>9.3} {:>14} {:>9.3}",
            amount,
            months,
            rate,
            exact.capital_final,
            flat.capital_final,
            flat_dev,
            lump.capital_final,
            lump_dev,
        );
    }

    println!("\nLumpSum treats the monthly amount as a one-time principal;");
    println!("its large negative deviation on long plans is expected.");
}
