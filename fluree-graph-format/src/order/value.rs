//! Value-space comparison for typed literals.
//!
//! Numbers compare as decimals, temporal values by their UTC-normalized
//! instant, booleans as `false < true`. A lexical form that does not parse
//! yields no decision and the caller falls back to its tiebreak.
//!
//! Values without a timezone are treated as UTC.

use std::cmp::Ordering;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use fluree_graph_ir::ValueSpace;

/// A parsed numeric value, including the float special values.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Number {
    NegInf,
    Finite(BigDecimal),
    PosInf,
    /// NaN sorts after every number and equals itself
    NaN,
}

impl Number {
    fn parse(lexical: &str) -> Option<Self> {
        match lexical {
            "INF" | "+INF" => return Some(Number::PosInf),
            "-INF" => return Some(Number::NegInf),
            "NaN" => return Some(Number::NaN),
            _ => {}
        }
        let (negative, digits) = match lexical.as_bytes().first()? {
            b'+' => (false, &lexical[1..]),
            b'-' => (true, &lexical[1..]),
            _ => (false, lexical),
        };
        if digits.starts_with(['+', '-']) {
            return None;
        }
        // BigDecimal wants a digit on both sides of the point
        let mut normalized = String::with_capacity(digits.len() + 3);
        if negative {
            normalized.push('-');
        }
        if digits.starts_with('.') {
            normalized.push('0');
        }
        normalized.push_str(digits);
        BigDecimal::from_str(&normalized).ok().map(Number::Finite)
    }
}

/// Compare two lexical forms in a shared value space.
///
/// Returns `None` when the space has no value order or either side does not
/// parse.
pub fn compare_values(space: ValueSpace, a: &str, b: &str) -> Option<Ordering> {
    match space {
        ValueSpace::Numeric => Some(Number::parse(a)?.cmp(&Number::parse(b)?)),
        ValueSpace::DateTime => Some(parse_date_time(a)?.cmp(&parse_date_time(b)?)),
        ValueSpace::Date => Some(parse_date(a)?.cmp(&parse_date(b)?)),
        ValueSpace::Time => Some(parse_time(a)?.cmp(&parse_time(b)?)),
        ValueSpace::Boolean => Some(parse_boolean(a)?.cmp(&parse_boolean(b)?)),
        ValueSpace::Other => None,
    }
}

fn parse_boolean(lexical: &str) -> Option<bool> {
    match lexical {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_date_time(lexical: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(lexical) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(lexical, fmt).ok())
        .map(|ndt| ndt.and_utc())
}

/// Midnight at the start of the date, as a UTC instant.
fn parse_date(lexical: &str) -> Option<DateTime<Utc>> {
    let (date, offset) = split_timezone(lexical)?;
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    let instant = midnight.and_utc() - chrono::Duration::seconds(offset.local_minus_utc().into());
    Some(instant)
}

/// Seconds since midnight UTC, fractions kept as nanoseconds.
fn parse_time(lexical: &str) -> Option<(i64, u32)> {
    let (time, offset) = split_timezone(lexical)?;
    let time = ["%H:%M:%S%.f", "%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(time, fmt).ok())?;
    let seconds = i64::from(time.num_seconds_from_midnight()) - i64::from(offset.local_minus_utc());
    Some((seconds.rem_euclid(86_400), time.nanosecond()))
}

/// Split a trailing `Z` or `(+|-)hh:mm` timezone off a date or time.
fn split_timezone(lexical: &str) -> Option<(&str, FixedOffset)> {
    let utc = FixedOffset::east_opt(0)?;
    if let Some(rest) = lexical.strip_suffix('Z') {
        return Some((rest, utc));
    }
    let len = lexical.len();
    let tz = len.checked_sub(6).and_then(|start| lexical.get(start..));
    match tz {
        Some(tz) if tz.starts_with(['+', '-']) && tz.as_bytes()[3] == b':' => {
            let hours: i32 = tz.get(1..3)?.parse().ok()?;
            let minutes: i32 = tz.get(4..6)?.parse().ok()?;
            let seconds = hours * 3600 + minutes * 60;
            let offset = if tz.starts_with('-') {
                FixedOffset::west_opt(seconds)?
            } else {
                FixedOffset::east_opt(seconds)?
            };
            Some((&lexical[..len - 6], offset))
        }
        _ => Some((lexical, utc)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(a: &str, b: &str) -> Option<Ordering> {
        compare_values(ValueSpace::Numeric, a, b)
    }

    #[test]
    fn test_numeric_by_value() {
        assert_eq!(num("+1", "1"), Some(Ordering::Equal));
        assert_eq!(num("1.0", "1"), Some(Ordering::Equal));
        assert_eq!(num("002", "1.2"), Some(Ordering::Greater));
        assert_eq!(num("-5", "3"), Some(Ordering::Less));
        assert_eq!(num(".5", "0.4"), Some(Ordering::Greater));
        assert_eq!(num("1e3", "999"), Some(Ordering::Greater));
        assert_eq!(num("1.5E-2", "0.015"), Some(Ordering::Equal));
    }

    #[test]
    fn test_numeric_specials() {
        assert_eq!(num("-INF", "-1e300"), Some(Ordering::Less));
        assert_eq!(num("INF", "1e300"), Some(Ordering::Greater));
        assert_eq!(num("NaN", "INF"), Some(Ordering::Greater));
        assert_eq!(num("NaN", "NaN"), Some(Ordering::Equal));
    }

    #[test]
    fn test_unparsable_is_undecided() {
        assert_eq!(num("abc", "1"), None);
        assert_eq!(num("+-1", "1"), None);
        assert_eq!(compare_values(ValueSpace::Other, "a", "b"), None);
    }

    #[test]
    fn test_date_time_by_instant() {
        let dt = |a, b| compare_values(ValueSpace::DateTime, a, b);
        assert_eq!(
            dt("2024-01-01T05:00:00Z", "2024-01-01T00:00:00-05:00"),
            Some(Ordering::Equal)
        );
        assert_eq!(
            dt("2024-01-01T00:00:00", "2024-01-01T00:00:01Z"),
            Some(Ordering::Less)
        );
        assert_eq!(
            dt("2024-01-01T00:00:00.5", "2024-01-01T00:00:00.25"),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn test_date_and_time() {
        let date = |a, b| compare_values(ValueSpace::Date, a, b);
        assert_eq!(date("2000-01-01", "2000-01-02"), Some(Ordering::Less));
        assert_eq!(date("2000-01-02+12:00", "2000-01-01Z"), Some(Ordering::Greater));
        assert_eq!(date("2000-01-02+14:00", "2000-01-01-11:00"), Some(Ordering::Less));

        let time = |a, b| compare_values(ValueSpace::Time, a, b);
        assert_eq!(time("10:00:00", "09:59:59"), Some(Ordering::Greater));
        assert_eq!(time("10:00:00+01:00", "09:00:00Z"), Some(Ordering::Equal));
    }

    #[test]
    fn test_boolean() {
        let b = |a, b| compare_values(ValueSpace::Boolean, a, b);
        assert_eq!(b("false", "true"), Some(Ordering::Less));
        assert_eq!(b("1", "true"), Some(Ordering::Equal));
        assert_eq!(b("yes", "true"), None);
    }
}
