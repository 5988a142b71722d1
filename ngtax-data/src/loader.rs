use std::io::Read;

use ngtax_core::models::{
    BusinessSize, PayeSchedule, PresumptiveSchedule, ScheduleError, StateSchedule, TaxBand,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading schedule data.
#[derive(Debug, Error)]
pub enum ScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Invalid business size: {0}")]
    InvalidBusinessSize(String),

    #[error("No band records for tax year {0}")]
    NoBandsForYear(i32),

    #[error("State '{state}' has no '{size}' amount")]
    MissingSize { state: String, size: String },

    #[error("Schedule validation failed: {0}")]
    Validation(#[from] ScheduleError),
}

impl From<csv::Error> for ScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        ScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a PAYE band table CSV file.
///
/// The CSV format:
/// - `tax_year`: the tax year the band belongs to (e.g. 2026)
/// - `upper_limit`: absolute income ceiling in naira (empty for the
///   unbounded final band)
/// - `rate`: marginal rate as a fraction (e.g. 0.15 for 15%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BandRecord {
    pub tax_year: i32,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_limit: Option<Decimal>,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for PAYE band tables from CSV files.
///
/// Parsing and selection are separate steps so one file can carry bands
/// for several tax years side by side.
pub struct BandTableLoader;

impl BandTableLoader {
    /// Parse band records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file
    /// or a byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BandRecord>, ScheduleLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BandRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Selects the bands for one tax year, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleLoaderError::NoBandsForYear`] when the file has no
    /// rows for the requested year.
    pub fn bands_for_year(
        records: &[BandRecord],
        tax_year: i32,
    ) -> Result<Vec<TaxBand>, ScheduleLoaderError> {
        let bands: Vec<TaxBand> = records
            .iter()
            .filter(|r| r.tax_year == tax_year)
            .map(|r| TaxBand {
                upper_limit: r.upper_limit,
                rate: r.rate,
            })
            .collect();

        if bands.is_empty() {
            return Err(ScheduleLoaderError::NoBandsForYear(tax_year));
        }

        Ok(bands)
    }
}

/// Replaces a schedule's band table and re-validates it.
pub fn apply_bands(
    mut schedule: PayeSchedule,
    bands: Vec<TaxBand>,
) -> Result<PayeSchedule, ScheduleLoaderError> {
    schedule.bands = bands;
    schedule.validate()?;
    Ok(schedule)
}

/// A single record from a presumptive schedule CSV file.
///
/// The CSV format:
/// - `state`: state code, matched case-insensitively (e.g. "lagos")
/// - `size`: business size category ("micro", "small", "medium")
/// - `amount`: annual presumptive tax in naira
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PresumptiveRecord {
    pub state: String,
    pub size: String,
    pub amount: Decimal,
}

/// Loader for state presumptive schedules from CSV files.
pub struct PresumptiveLoader;

impl PresumptiveLoader {
    /// Parse presumptive records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<PresumptiveRecord>, ScheduleLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: PresumptiveRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Assembles records into a [`PresumptiveSchedule`].
    ///
    /// States appear in first-seen order; every state must carry all three
    /// size amounts. A repeated (state, size) pair keeps the last value.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleLoaderError`] on an unrecognized size string or a
    /// state missing one of the three sizes.
    pub fn schedule(
        records: &[PresumptiveRecord],
        tax_year: i32,
    ) -> Result<PresumptiveSchedule, ScheduleLoaderError> {
        // (state, micro, small, medium) accumulator in first-seen order
        let mut states: Vec<(String, Option<Decimal>, Option<Decimal>, Option<Decimal>)> =
            Vec::new();

        for record in records {
            let size = BusinessSize::parse(&record.size)
                .ok_or_else(|| ScheduleLoaderError::InvalidBusinessSize(record.size.clone()))?;
            let state = record.state.trim().to_lowercase();

            let index = match states.iter().position(|(s, ..)| *s == state) {
                Some(index) => index,
                None => {
                    states.push((state, None, None, None));
                    states.len() - 1
                }
            };
            match size {
                BusinessSize::Micro => states[index].1 = Some(record.amount),
                BusinessSize::Small => states[index].2 = Some(record.amount),
                BusinessSize::Medium => states[index].3 = Some(record.amount),
            }
        }

        let mut schedules = Vec::with_capacity(states.len());
        for (state, micro, small, medium) in states {
            let micro = require_size(&state, micro, BusinessSize::Micro)?;
            let small = require_size(&state, small, BusinessSize::Small)?;
            let medium = require_size(&state, medium, BusinessSize::Medium)?;
            schedules.push(StateSchedule {
                state,
                micro,
                small,
                medium,
            });
        }

        Ok(PresumptiveSchedule {
            tax_year,
            states: schedules,
        })
    }
}

fn require_size(
    state: &str,
    amount: Option<Decimal>,
    size: BusinessSize,
) -> Result<Decimal, ScheduleLoaderError> {
    amount.ok_or_else(|| ScheduleLoaderError::MissingSize {
        state: state.to_string(),
        size: size.as_str().to_string(),
    })
}
