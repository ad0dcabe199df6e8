//! CSV-based rate schedule loader
//!
//! Lets product teams supply a custom schedule without a code change. The
//! file has one `max_months,annual_rate_pct` row per breakpoint in ascending
//! order; the last row is the catch-all and its `max_months` is ignored.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;

use super::{RateBreakpoint, RateSchedule};

/// Load a rate schedule from a CSV file
///
/// The schedule is named after the file stem.
pub fn load_schedule(path: &Path) -> Result<RateSchedule> {
    let file = File::open(path)
        .with_context(|| format!("failed to open rate schedule {}", path.display()))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows: Vec<RateBreakpoint> = Vec::new();

    for result in reader.records() {
        let record = result.context("failed to read rate schedule row")?;
        let max_months: u32 = record[0]
            .trim()
            .parse()
            .with_context(|| format!("invalid max_months value: {}", &record[0]))?;
        let annual_rate_pct: Decimal = record[1]
            .trim()
            .parse()
            .with_context(|| format!("invalid annual_rate_pct value: {}", &record[1]))?;
        rows.push(RateBreakpoint {
            max_months,
            annual_rate_pct,
        });
    }

    // Last row is the catch-all for durations past the final breakpoint
    let Some(catch_all) = rows.pop() else {
        bail!("rate schedule {} has no rows", path.display());
    };

    if !rows.windows(2).all(|w| w[0].max_months < w[1].max_months) {
        bail!(
            "rate schedule {} breakpoints are not in ascending order",
            path.display()
        );
    }

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("custom")
        .to_string();

    log::debug!(
        "loaded rate schedule '{}' with {} breakpoints",
        name,
        rows.len()
    );

    Ok(RateSchedule::from_breakpoints(
        name,
        rows,
        catch_all.annual_rate_pct,
    ))
}
