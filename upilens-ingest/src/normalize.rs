//! Shared low-level field normalizers used by both layout parsers.
//!
//! All of these are total: parse failure is `None`, never a panic or an
//! error, so callers can substitute their fallback value and keep going.

use chrono::NaiveTime;
use regex::Regex;

/// Find a currency amount like "INR 1,234.56" or "Rs. 45.00" anywhere in
/// the text and return its magnitude. Accepts a currency code or symbol
/// prefix, optional space, comma-grouped digits, and exactly two decimal
/// digits; grouping commas are stripped before conversion.
pub fn parse_currency(text: &str) -> Option<f64> {
    let re = Regex::new(r"(?:INR|Rs\.?)\s*([\d,]+\.\d{2})").ok()?;
    let caps = re.captures(text)?;
    caps.get(1)?.as_str().replace(',', "").parse().ok()
}

/// Parse a clock time, trying the 12-hour form with meridiem first and
/// the 24-hour form second. First successful parse wins.
pub fn parse_clock_time(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text.trim(), "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(text.trim(), "%H:%M"))
        .ok()
}

/// Month number for a three-letter abbreviation, any case.
pub fn month_number(abbr: &str) -> Option<u32> {
    let n = match abbr.to_uppercase().as_str() {
        "JAN" => 1,
        "FEB" => 2,
        "MAR" => 3,
        "APR" => 4,
        "MAY" => 5,
        "JUN" => 6,
        "JUL" => 7,
        "AUG" => 8,
        "SEP" => 9,
        "OCT" => 10,
        "NOV" => 11,
        "DEC" => 12,
        _ => return None,
    };
    Some(n)
}
