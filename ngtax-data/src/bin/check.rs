use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ngtax_core::models::TaxYearSchedule;
use ngtax_data::{BandTableLoader, PresumptiveLoader, apply_bands};

/// Validate tax schedule data files before they are rolled out.
///
/// Band CSV columns: tax_year, upper_limit (empty for the unbounded final
/// band), rate (a fraction, e.g. 0.15). Presumptive CSV columns: state,
/// size (micro/small/medium), amount.
#[derive(Parser, Debug)]
#[command(name = "ngtax-data-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a PAYE band table CSV file
    #[arg(short, long)]
    bands: Option<PathBuf>,

    /// Path to a presumptive schedule CSV file
    #[arg(short, long)]
    presumptive: Option<PathBuf>,

    /// Tax year to select from the files
    #[arg(short, long, default_value_t = 2026)]
    year: i32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut schedule = TaxYearSchedule::nigeria_2026();
    schedule.tax_year = args.year;

    if let Some(path) = &args.bands {
        let file = File::open(path)
            .with_context(|| format!("Failed to open: {}", path.display()))?;
        let records = BandTableLoader::parse(file)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
        println!("Parsed {} band records from {}", records.len(), path.display());

        let bands = BandTableLoader::bands_for_year(&records, args.year)?;
        schedule.paye = apply_bands(schedule.paye, bands)
            .with_context(|| format!("Invalid band table for {}", args.year))?;
        println!(
            "Band table for {} is valid ({} bands).",
            args.year,
            schedule.paye.bands.len()
        );
    }

    if let Some(path) = &args.presumptive {
        let file = File::open(path)
            .with_context(|| format!("Failed to open: {}", path.display()))?;
        let records = PresumptiveLoader::parse(file)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
        println!(
            "Parsed {} presumptive records from {}",
            records.len(),
            path.display()
        );

        schedule.presumptive = PresumptiveLoader::schedule(&records, args.year)
            .with_context(|| format!("Invalid presumptive schedule for {}", args.year))?;
        println!(
            "Presumptive schedule for {} is valid ({} states).",
            args.year,
            schedule.presumptive.states.len()
        );
    }

    schedule
        .validate()
        .with_context(|| format!("Schedule for {} failed validation", args.year))?;
    println!("Schedule for tax year {} is valid.", args.year);

    Ok(())
}
