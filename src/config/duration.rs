//! Duration strings like "30s", "500ms" or "1h30m".
//!
//! The grammar is an optional sign followed by one or more
//! `<decimal><unit>` groups. A unit is mandatory everywhere except for the
//! bare string "0".

use serde::Serializer;
use std::time::Duration;
use thiserror::Error;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Largest representable duration, in nanoseconds.
const MAX_NANOS: u128 = i64::MAX as u128;

/// Fraction digits beyond this cannot change the result by a nanosecond.
const MAX_FRACTION_DIGITS: usize = 19;

/// Duration string parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("invalid duration {0:?}")]
    Invalid(String),
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

/// Parses a duration string such as "30s", "1.5m" or "1h30m".
///
/// Negative durations are valid syntax; they resolve to `Duration::ZERO`.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());
    let overflow = || DurationError::Overflow(input.to_string());

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    // One more nanosecond fits below zero than above it.
    let limit = if negative { MAX_NANOS + 1 } else { MAX_NANOS };

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after) = split_digits(rest);
        let mut has_digits = !whole.is_empty();
        rest = after;

        let mut fraction = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (digits, after) = split_digits(after_dot);
            has_digits |= !digits.is_empty();
            fraction = digits;
            rest = after;
        }
        if !has_digits {
            return Err(invalid());
        }

        let unit_end = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (unit, after) = rest.split_at(unit_end);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;
        rest = after;

        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| overflow())?
        };
        let nanos = whole
            .checked_mul(scale)
            .and_then(|n| n.checked_add(fraction_nanos(fraction, scale)))
            .ok_or_else(overflow)?;
        total = total
            .checked_add(nanos)
            .filter(|t| *t <= limit)
            .ok_or_else(overflow)?;
    }

    if negative {
        return Ok(Duration::ZERO);
    }
    // Bounded by MAX_NANOS above.
    Ok(Duration::from_nanos(total as u64))
}

/// Formats a duration the way `parse_duration` reads it back,
/// e.g. "0s", "500ms", "1.5s", "1m30s", "1h0m0s".
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }

    if nanos < NANOS_PER_SEC {
        let (scale, unit) = match nanos {
            n if n < 1_000 => (1, "ns"),
            n if n < 1_000_000 => (1_000, "µs"),
            _ => (1_000_000, "ms"),
        };
        return format!("{}{unit}", decimal(nanos, scale));
    }

    let secs = d.as_secs();
    let hours = secs / 3600;
    let minutes = secs % 3600 / 60;
    let seconds = decimal(
        u128::from(secs % 60) * NANOS_PER_SEC + u128::from(d.subsec_nanos()),
        NANOS_PER_SEC,
    );

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Serde helper writing a `Duration` as a duration string.
pub fn serialize<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_duration(*d))
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3600 * NANOS_PER_SEC),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn fraction_nanos(digits: &str, scale: u128) -> u128 {
    let digits = &digits[..digits.len().min(MAX_FRACTION_DIGITS)];
    if digits.is_empty() {
        return 0;
    }
    let value: u128 = digits.parse().unwrap_or(0);
    value * scale / 10u128.pow(digits.len() as u32)
}

fn decimal(value: u128, scale: u128) -> String {
    let (whole, frac) = (value / scale, value % scale);
    if frac == 0 {
        return whole.to_string();
    }
    let width = scale.ilog10() as usize;
    let frac = format!("{frac:0width$}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}
