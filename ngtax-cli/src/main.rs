use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ngtax_cli::format::{naira, percent};
use ngtax_cli::utils::parse_decimal;
use ngtax_core::calculations::{cit, informal, pit, sme, vat, wht};
use ngtax_core::models::{IncomeDeclaration, TaxYearSchedule};
use ngtax_core::PayeCalculator;
use ngtax_data::{BandTableLoader, apply_bands};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Nigerian tax calculator for the 2026 tax year.
///
/// Computes PAYE, VAT, withholding tax, Companies Income Tax, flat-rate
/// personal income tax, SME estimates and informal-sector presumptive tax.
/// Amounts accept comma thousands separators; blank means zero.
#[derive(Debug, Parser)]
#[command(name = "ngtax", version, about)]
struct Cli {
    /// Tax year schedule to use.
    #[arg(long, default_value_t = 2026)]
    year: i32,

    /// Replace the built-in PAYE band table with a CSV file.
    #[arg(long, value_name = "FILE")]
    bands: Option<PathBuf>,

    /// Emit the result as JSON instead of a breakdown.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assess annual PAYE from an income declaration.
    Paye {
        /// Annual gross salary.
        #[arg(long, value_parser = parse_money, default_value = "0")]
        gross: Decimal,

        /// Annual basic salary; pension is taken as 8% of this.
        #[arg(long, value_parser = parse_money, default_value = "0")]
        basic: Decimal,

        /// Housing allowance, treated as annual rent paid for rent relief.
        #[arg(long, value_parser = parse_money, default_value = "0")]
        housing: Decimal,

        /// Transport allowance (shown in the breakdown, not deducted).
        #[arg(long, value_parser = parse_money, default_value = "0")]
        transport: Decimal,

        /// Utility allowance (shown in the breakdown, not deducted).
        #[arg(long, value_parser = parse_money, default_value = "0")]
        utility: Decimal,

        /// Leave allowance (shown in the breakdown, not deducted).
        #[arg(long, value_parser = parse_money, default_value = "0")]
        leave: Decimal,

        /// Other allowances, deducted from taxable income.
        #[arg(long, value_parser = parse_money, default_value = "0")]
        other: Decimal,

        /// Annual NHIS contribution.
        #[arg(long, value_parser = parse_money, default_value = "0")]
        nhis: Decimal,

        /// Annual life assurance premium.
        #[arg(long, value_parser = parse_money, default_value = "0")]
        life: Decimal,
    },

    /// Compute VAT on an amount.
    Vat {
        #[arg(value_parser = parse_money)]
        amount: Decimal,

        /// VAT rate in percent; defaults to the schedule rate (7.5).
        #[arg(long, value_parser = parse_money)]
        rate: Option<Decimal>,

        /// The supply is zero-rated.
        #[arg(long)]
        zero_rated: bool,
    },

    /// Compute withholding tax on a payment.
    Wht {
        #[arg(value_parser = parse_money)]
        amount: Decimal,

        /// Payment category: contract, consultancy, rent, dividend, interest.
        #[arg(long, default_value = "contract")]
        category: String,
    },

    /// Compute Companies Income Tax from annual turnover.
    Cit {
        #[arg(value_parser = parse_money)]
        turnover: Decimal,
    },

    /// Compute flat-rate Personal Income Tax.
    Pit {
        #[arg(value_parser = parse_money)]
        income: Decimal,
    },

    /// Estimate CIT for an SME with the tier description.
    Sme {
        #[arg(value_parser = parse_money)]
        turnover: Decimal,

        /// Total assets (collected; the current schedule keys on turnover).
        #[arg(long, value_parser = parse_money, default_value = "0")]
        assets: Decimal,
    },

    /// Look up informal-sector presumptive tax.
    Informal {
        /// State code, e.g. lagos.
        state: String,

        /// Business size: micro, small, medium.
        category: String,
    },
}

fn parse_money(s: &str) -> Result<Decimal, String> {
    parse_decimal(s).map_err(|e| e.to_string())
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── schedule selection ──────────────────────────────────────────────────────

fn load_schedule(cli: &Cli) -> Result<TaxYearSchedule> {
    if cli.year != 2026 {
        bail!(
            "no schedule on record for tax year {}; only 2026 is available",
            cli.year
        );
    }

    let mut schedule = TaxYearSchedule::nigeria_2026();

    if let Some(path) = &cli.bands {
        debug!("loading PAYE bands from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("cannot open band table: {}", path.display()))?;
        let records = BandTableLoader::parse(file)
            .with_context(|| format!("cannot parse band table: {}", path.display()))?;
        let bands = BandTableLoader::bands_for_year(&records, cli.year)?;
        schedule.paye = apply_bands(schedule.paye, bands)
            .with_context(|| format!("invalid band table for {}", cli.year))?;
    }

    Ok(schedule)
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let schedule = load_schedule(&cli)?;

    match &cli.command {
        Command::Paye {
            gross,
            basic,
            housing,
            transport,
            utility,
            leave,
            other,
            nhis,
            life,
        } => {
            let declaration = IncomeDeclaration {
                gross_salary: *gross,
                basic_salary: *basic,
                housing_allowance: *housing,
                transport_allowance: *transport,
                utility_allowance: *utility,
                leave_allowance: *leave,
                other_allowances: *other,
                nhis_contribution: *nhis,
                life_assurance_premium: *life,
            };
            let calculator = PayeCalculator::new(&schedule.paye);
            let result = calculator.calculate(&declaration)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Gross Salary: {}", naira(declaration.gross_salary));
                println!(
                    "Pension (8% of basic): {}",
                    naira(result.reliefs.pension_contribution)
                );
                println!("CRA Applied: {}", naira(result.reliefs.consolidated_relief));
                println!(
                    "NHIS: {}   Life Assurance: {}",
                    naira(declaration.nhis_contribution),
                    naira(declaration.life_assurance_premium)
                );
                println!("Rent Relief (claimed): {}", naira(result.reliefs.rent_relief));
                println!(
                    "Taxable before exemption & deductions: {}",
                    naira(result.taxable_before_exemption)
                );
                println!(
                    "Taxable after {} exemption: {}",
                    naira(result.reliefs.statutory_exemption),
                    naira(result.taxable_after_exemption)
                );
                println!("Annual PAYE: {}", naira(result.annual_tax));
                println!("Monthly PAYE (approx): {}", naira(result.monthly_tax));
                println!(
                    "Effective tax rate (on gross): {}",
                    percent(result.effective_rate)
                );
            }
        }

        Command::Vat {
            amount,
            rate,
            zero_rated,
        } => {
            let rate = rate.unwrap_or(schedule.vat_default_rate_percent);
            let result = vat::calculate(*amount, rate, *zero_rated);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.note);
                println!("VAT = {}", naira(result.vat));
            }
        }

        Command::Wht { amount, category } => {
            let result = wht::calculate(*amount, category, &schedule.wht);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("WHT Rate: {}", percent(result.rate_percent));
                println!("WHT = {}", naira(result.wht));
            }
        }

        Command::Cit { turnover } => {
            let result = cit::calculate(*turnover, &schedule.cit);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("CIT payable = {}", naira(result.cit));
            }
        }

        Command::Pit { income } => {
            let result = pit::calculate(*income, schedule.pit_rate);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("PIT payable = {}", naira(result.pit));
            }
        }

        Command::Sme { turnover, assets } => {
            let result = sme::calculate(*turnover, *assets, &schedule.cit);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.note);
                println!("Estimated CIT = {}", naira(result.cit));
            }
        }

        Command::Informal { state, category } => {
            let result = informal::calculate(state, category, &schedule.presumptive);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                match result.amount {
                    Some(amount) => {
                        println!("{}", result.note);
                        println!("Annual Presumptive Tax = {}", naira(amount));
                    }
                    None => println!("{}", result.note),
                }
            }
        }
    }

    Ok(())
}
