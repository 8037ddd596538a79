//! Statement validity period extraction.
//!
//! Each issuer prints its period in its own sentence shape. The period
//! matters to the Paytm parser, which has no per-line years and seeds
//! its running-year counter from the period's start date.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

/// Search the document header for either issuer's period declaration.
///
/// Returns `None` when neither shape is found or its dates fail to
/// parse; callers fall back to [`default_period`].
pub fn statement_period(text: &str) -> Result<Option<(NaiveDate, NaiveDate)>> {
    // Paytm: UPI Statement for 01 FEB'24 - 29 FEB'24
    let paytm_re = Regex::new(
        r"UPI Statement for\s+(\d{1,2} [A-Z]{3})'(\d{2})\s*-\s*(\d{1,2} [A-Z]{3})'(\d{2})",
    )?;
    if let Some(caps) = paytm_re.captures(text) {
        let start = NaiveDate::parse_from_str(&format!("{} 20{}", &caps[1], &caps[2]), "%d %b %Y");
        let end = NaiveDate::parse_from_str(&format!("{} 20{}", &caps[3], &caps[4]), "%d %b %Y");
        if let (Ok(start), Ok(end)) = (start, end) {
            return Ok(Some((start, end)));
        }
    }

    // PhonePe: Mar 01, 2024 - Mar 31, 2024
    let phonepe_re = Regex::new(r"(\w{3} \d{2}, \d{4}) - (\w{3} \d{2}, \d{4})")?;
    if let Some(caps) = phonepe_re.captures(text) {
        let start = NaiveDate::parse_from_str(&caps[1], "%b %d, %Y");
        let end = NaiveDate::parse_from_str(&caps[2], "%b %d, %Y");
        if let (Ok(start), Ok(end)) = (start, end) {
            return Ok(Some((start, end)));
        }
    }

    Ok(None)
}

/// Period assumed when no declaration is found: January 1st of the
/// current year through today. Exists so year inference always has a
/// seed, even for malformed headers.
pub fn default_period() -> (NaiveDate, NaiveDate) {
    let today = Local::now().date_naive();
    let jan_first = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
    (jan_first, today)
}
