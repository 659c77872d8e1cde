//! Duration span parsing
//!
//! Durations are written as a signed sequence of decimal numbers, each with a
//! unit suffix, e.g. `3h00m`, `1h30m`, `1.5h` or `90s`. Components are summed.
//! Valid units are `h`, `m`, `s`, `ms`, `us` (or `µs`/`μs`) and `ns`. The bare
//! literal `0` is accepted without a unit.

use chrono::Duration;
use thiserror::Error;

const NANOS_PER_MINUTE: f64 = 60.0 * 1_000_000_000.0;
const NANOS_PER_HOUR: f64 = 60.0 * NANOS_PER_MINUTE;

/// Errors produced by [`parse_duration`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationParseError {
    #[error("empty duration")]
    Empty,

    #[error("missing number in duration {0:?}")]
    MissingNumber(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

/// Parse a compound duration span such as `3h00m` into a [`Duration`].
///
/// Negative spans (`-1h`) parse successfully; rejecting them is left to the
/// caller.
pub fn parse_duration(input: &str) -> Result<Duration, DurationParseError> {
    if input.is_empty() {
        return Err(DurationParseError::Empty);
    }

    let (negative, mut rest) = match input.as_bytes()[0] {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(DurationParseError::MissingNumber(input.to_string()));
    }

    let overflow = || DurationParseError::Overflow(input.to_string());
    let mut total: u64 = 0;

    while !rest.is_empty() {
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (int_part, after) = rest.split_at(int_len);

        let (frac_part, after) = match after.strip_prefix('.') {
            Some(tail) => {
                let frac_len = tail.bytes().take_while(u8::is_ascii_digit).count();
                tail.split_at(frac_len)
            }
            None => ("", after),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(DurationParseError::MissingNumber(input.to_string()));
        }

        let unit_len = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let (unit, tail) = after.split_at(unit_len);
        if unit.is_empty() {
            return Err(DurationParseError::MissingUnit(input.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationParseError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let whole: u64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| overflow())?
        };
        let mut component = whole.checked_mul(scale).ok_or_else(overflow)?;

        if !frac_part.is_empty() {
            let fraction = frac_part
                .bytes()
                .rev()
                .fold(0.0_f64, |acc, digit| (acc + f64::from(digit - b'0')) / 10.0);
            let extra = (fraction * scale as f64) as u64;
            component = component.checked_add(extra).ok_or_else(overflow)?;
        }

        total = total.checked_add(component).ok_or_else(overflow)?;
        rest = tail;
    }

    let nanos = i64::try_from(total).map_err(|_| overflow())?;
    Ok(Duration::nanoseconds(if negative { -nanos } else { nanos }))
}

/// Nanoseconds per unit suffix
fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(60 * 60 * 1_000_000_000),
        _ => None,
    }
}

/// Duration expressed in fractional hours
pub fn hours(duration: &Duration) -> f64 {
    total_nanos(duration) / NANOS_PER_HOUR
}

/// Duration expressed in fractional minutes
pub fn minutes(duration: &Duration) -> f64 {
    total_nanos(duration) / NANOS_PER_MINUTE
}

fn total_nanos(duration: &Duration) -> f64 {
    match duration.num_nanoseconds() {
        Some(nanos) => nanos as f64,
        None => duration.num_milliseconds() as f64 * 1_000_000.0,
    }
}
