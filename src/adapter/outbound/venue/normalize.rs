//! Field normalization helpers shared by the venue adapters.
//!
//! Venues encode numbers as text, timestamps in half a dozen formats and
//! tickers as positional arrays. Each helper takes the wire field name so a
//! failure points at the offending field. Nothing here substitutes a default:
//! an empty or malformed value is always an error.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::error::NormalizeError;

const NANOS_DIGITS: usize = 9;

/// Parse a base-10 decimal carried as text.
pub fn decimal(field: &'static str, value: &str) -> Result<f64, NormalizeError> {
    value
        .parse::<f64>()
        .map_err(|source| NormalizeError::InvalidNumber {
            field,
            value: value.to_string(),
            source,
        })
}

/// Parse a base-10 integer carried as text (ids, sequences, flags).
pub fn integer(field: &'static str, value: &str) -> Result<i64, NormalizeError> {
    value
        .parse::<i64>()
        .map_err(|source| NormalizeError::InvalidInteger {
            field,
            value: value.to_string(),
            source,
        })
}

/// Whole-second Unix epoch.
pub fn epoch_seconds(field: &'static str, seconds: i64) -> Result<DateTime<Utc>, NormalizeError> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| out_of_range(field, seconds))
}

/// Whole-second Unix epoch carried as text.
pub fn epoch_seconds_text(field: &'static str, value: &str) -> Result<DateTime<Utc>, NormalizeError> {
    epoch_seconds(field, integer(field, value)?)
}

/// Millisecond Unix epoch.
pub fn epoch_millis(field: &'static str, millis: i64) -> Result<DateTime<Utc>, NormalizeError> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| out_of_range(field, millis))
}

/// `"<seconds>.<fraction>"` epoch, e.g. `"1574286574.8762016"`.
///
/// Exactly one dot is required. The fraction is read as a decimal fraction of
/// a second, so `"10.5"` is ten and a half seconds; digits past nanosecond
/// precision are dropped.
pub fn dotted_seconds(field: &'static str, value: &str) -> Result<DateTime<Utc>, NormalizeError> {
    let invalid = |reason: &str| NormalizeError::InvalidTimestamp {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = value.split('.').collect();
    let [seconds, fraction] = parts.as_slice() else {
        return Err(invalid("expected <seconds>.<fraction>"));
    };
    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("fraction is not a digit sequence"));
    }

    let seconds = integer(field, seconds)?;
    let digits: String = fraction
        .chars()
        .chain(std::iter::repeat('0'))
        .take(NANOS_DIGITS)
        .collect();
    let nanos = digits
        .parse::<u32>()
        .map_err(|_| invalid("fraction is not a digit sequence"))?;

    DateTime::from_timestamp(seconds, nanos).ok_or_else(|| invalid("out of range"))
}

/// RFC 3339 timestamp with any offset, converted to UTC.
pub fn rfc3339(field: &'static str, value: &str) -> Result<DateTime<Utc>, NormalizeError> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| NormalizeError::InvalidTimestamp {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// UTC timestamp with exactly millisecond precision and a literal `Z`,
/// e.g. `"2019-11-20T21:56:51.547Z"`.
pub fn millis_zulu(field: &'static str, value: &str) -> Result<DateTime<Utc>, NormalizeError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S.%3fZ")
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|e| NormalizeError::InvalidTimestamp {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// View a positional array as exactly `N` elements.
pub fn fixed<'a, T, const N: usize>(
    field: &'static str,
    values: &'a [T],
) -> Result<&'a [T; N], NormalizeError> {
    <&[T; N]>::try_from(values).map_err(|_| NormalizeError::ArrayLength {
        field,
        expected: N,
        actual: values.len(),
    })
}

/// Split a `"BASE<sep>QUOTE"` label such as `"DASH:USD"`.
pub fn currency_pair<'a>(
    field: &'static str,
    value: &'a str,
    separator: char,
) -> Result<(&'a str, &'a str), NormalizeError> {
    match value.split_once(separator) {
        Some((base, quote))
            if !base.is_empty() && !quote.is_empty() && !quote.contains(separator) =>
        {
            Ok((base, quote))
        }
        _ => Err(NormalizeError::InvalidLabel {
            field,
            value: value.to_string(),
        }),
    }
}

fn out_of_range(field: &'static str, raw: i64) -> NormalizeError {
    NormalizeError::InvalidTimestamp {
        field,
        value: raw.to_string(),
        reason: "out of range".to_string(),
    }
}
