//! Token-based date and time formatting.
//!
//! Renders a timestamp into a pattern string such as `yyyy-MM-dd hh:mm:ss`.
//! Each maximal run of a token character is substituted left to right:
//! a `y` run becomes the last N digits of the 4-digit year, and for the
//! other families a run of length 1 renders the raw value while a longer
//! run zero-pads to the run length. Characters outside the token alphabet
//! pass through unchanged.
//!
//! Token families: `M` month, `d` day, `h` hour (0-23), `m` minute,
//! `s` second, `q` quarter, `S` millisecond, `y` year.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use std::fmt::Write;

use crate::error::{Error, Result};

/// Numeric value for one token family, or the year special case.
enum Token {
    Year(i32),
    Field(u32),
}

fn token(dt: &DateTime<impl TimeZone>, c: char) -> Option<Token> {
    Some(match c {
        'y' => Token::Year(dt.year()),
        'M' => Token::Field(dt.month()),
        'd' => Token::Field(dt.day()),
        'h' => Token::Field(dt.hour()),
        'm' => Token::Field(dt.minute()),
        's' => Token::Field(dt.second()),
        'q' => Token::Field(dt.month0() / 3 + 1),
        'S' => Token::Field(dt.timestamp_subsec_millis()),
        _ => return None,
    })
}

/// Last `n` digits of the zero-padded 4-digit year.
fn year_digits(year: i32, n: usize) -> String {
    let full = format!("{:04}", year.rem_euclid(10_000));
    full[full.len().saturating_sub(n)..].to_string()
}

/// Renders `dt` according to the token pattern.
#[must_use]
pub fn format_datetime<Tz: TimeZone>(dt: &DateTime<Tz>, pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == c {
            run += 1;
        }
        match token(dt, c) {
            Some(Token::Year(year)) => out.push_str(&year_digits(year, run)),
            Some(Token::Field(value)) if run == 1 => {
                let _ = write!(out, "{value}");
            }
            Some(Token::Field(value)) => {
                let _ = write!(out, "{value:0run$}");
            }
            None => {
                for _ in 0..run {
                    out.push(c);
                }
            }
        }
        i += run;
    }
    out
}

/// Renders a millisecond Unix timestamp (UTC) according to the pattern.
///
/// # Errors
///
/// Returns an [`ErrorKind::Range`](crate::ErrorKind::Range) error when the
/// timestamp is outside the representable calendar range.
pub fn format_timestamp(msec: i64, pattern: &str) -> Result<String> {
    let dt = DateTime::<Utc>::from_timestamp_millis(msec)
        .ok_or_else(|| Error::range("timestamp out of range", "format_timestamp"))?;
    Ok(format_datetime(&dt, pattern))
}

/// Renders a timestamp given as a string.
///
/// An integer string is interpreted as epoch milliseconds; otherwise the
/// input is parsed as an RFC 3339 date-time and rendered in its own
/// offset.
///
/// # Errors
///
/// Returns an [`ErrorKind::Type`](crate::ErrorKind::Type) error when the
/// input is neither an integer nor a valid RFC 3339 date-time, and an
/// [`ErrorKind::Range`](crate::ErrorKind::Range) error for an
/// out-of-range millisecond value.
pub fn format_timestamp_str(input: &str, pattern: &str) -> Result<String> {
    let input = input.trim();
    if let Ok(msec) = input.parse::<i64>() {
        return format_timestamp(msec, pattern);
    }
    let dt = DateTime::parse_from_rfc3339(input).map_err(|e| {
        Error::type_error(format!("unparseable timestamp: {e}"), "format_timestamp_str")
    })?;
    Ok(format_datetime(&dt, pattern))
}
