//! Record parsing
//!
//! Splits comma-delimited records into typed fields:
//! - `<steps>,<duration>` for daily-steps records
//! - `<steps>,<activity>,<duration>` for training records
//!
//! Unknown activity labels are kept on the record; resolving them is up to the
//! report stage.

use chrono::Duration;

use crate::duration::parse_duration;
use crate::error::{ComputeError, ValidationError};
use crate::types::{ActivityRecord, DayStepsRecord};

/// Parser for raw activity records
pub struct RecordParser;

impl RecordParser {
    /// Parse a `<steps>,<duration>` record, e.g. `4000,1h30m`
    pub fn parse_day_steps(data: &str) -> Result<DayStepsRecord, ComputeError> {
        let fields = split_fields(data, 2)?;
        let steps = parse_steps(fields[0])?;
        let duration = parse_positive_duration(fields[1])?;

        let record = DayStepsRecord::new(steps, duration);
        log::debug!("parsed daily-steps record: {:?}", record);
        Ok(record)
    }

    /// Parse a `<steps>,<activity>,<duration>` record, e.g. `3456,Ходьба,3h00m`
    pub fn parse_training(data: &str) -> Result<ActivityRecord, ComputeError> {
        let fields = split_fields(data, 3)?;
        let steps = parse_steps(fields[0])?;
        let label = fields[1].to_lowercase();
        let duration = parse_positive_duration(fields[2])?;

        let record = ActivityRecord::new(steps, label, duration);
        log::debug!("parsed training record: {:?}", record);
        Ok(record)
    }
}

fn split_fields(data: &str, expected: usize) -> Result<Vec<&str>, ComputeError> {
    let fields: Vec<&str> = data.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(ComputeError::FormatError {
            expected,
            actual: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_steps(field: &str) -> Result<u64, ComputeError> {
    let steps: i64 = field.parse().map_err(|e| ComputeError::ParseError {
        field: "steps",
        reason: format!("{e} ({field:?})"),
    })?;

    if steps <= 0 {
        return Err(ValidationError::NonPositiveSteps(steps).into());
    }
    Ok(steps as u64)
}

fn parse_positive_duration(field: &str) -> Result<Duration, ComputeError> {
    let duration = parse_duration(field).map_err(|e| ComputeError::ParseError {
        field: "duration",
        reason: e.to_string(),
    })?;

    if duration <= Duration::zero() {
        return Err(ValidationError::NonPositiveDuration(field.to_string()).into());
    }
    Ok(duration)
}
