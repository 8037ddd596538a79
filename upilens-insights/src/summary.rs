//! Read-only aggregation views over an assembled ledger.
//!
//! Derived views only: nothing here mutates records or is part of the
//! parse contract. Every view tolerates an absent resolved timestamp by
//! falling back to re-parsing the display form.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;
use std::collections::HashMap;
use upilens_core::TransactionRecord;

/// Calendar date of a record, from the resolved timestamp when present,
/// otherwise by re-parsing the display form joined with the current year.
pub fn record_date(record: &TransactionRecord) -> Option<NaiveDate> {
    if let Some(at) = record.resolved_at {
        return Some(at.date());
    }
    let with_year = format!("{} {}", record.display_date, Local::now().year());
    NaiveDateTime::parse_from_str(&with_year, "%b %d %H:%M %Y")
        .map(|at| at.date())
        .or_else(|_| NaiveDate::parse_from_str(&with_year, "%b %d %Y"))
        .ok()
}

/// Spending grouped by category: debits only, absolute amounts, largest
/// first (ties broken by name for stable output).
pub fn spending_by_category(records: &[TransactionRecord]) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for r in records.iter().filter(|r| r.amount < 0.0) {
        *totals.entry(r.category.as_str()).or_insert(0.0) += r.amount.abs();
    }
    let mut out: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(category, total)| (category.to_string(), total))
        .collect();
    out.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(&b.0)));
    out
}

/// Debit totals per month bucket, in first-seen (document) order.
/// Records with an unresolved month are left out.
pub fn monthly_spending(records: &[TransactionRecord]) -> Vec<(String, f64)> {
    let mut out: Vec<(String, f64)> = Vec::new();
    for r in records.iter().filter(|r| r.amount < 0.0) {
        if r.month_bucket == "Unknown" {
            continue;
        }
        match out.iter_mut().find(|(bucket, _)| *bucket == r.month_bucket) {
            Some((_, total)) => *total += r.amount.abs(),
            None => out.push((r.month_bucket.clone(), r.amount.abs())),
        }
    }
    out
}

/// The `n` largest expenses by magnitude, largest first.
pub fn top_expenses(records: &[TransactionRecord], n: usize) -> Vec<&TransactionRecord> {
    let mut debits: Vec<&TransactionRecord> =
        records.iter().filter(|r| r.amount < 0.0).collect();
    debits.sort_by(|a, b| {
        a.amount
            .partial_cmp(&b.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    debits.truncate(n);
    debits
}

/// Debit totals per day of week, Monday first. Records whose date cannot
/// be recovered (even via the display-form fallback) are left out.
pub fn weekday_spending(records: &[TransactionRecord]) -> Vec<(&'static str, f64)> {
    const DAYS: [(Weekday, &str); 7] = [
        (Weekday::Mon, "Monday"),
        (Weekday::Tue, "Tuesday"),
        (Weekday::Wed, "Wednesday"),
        (Weekday::Thu, "Thursday"),
        (Weekday::Fri, "Friday"),
        (Weekday::Sat, "Saturday"),
        (Weekday::Sun, "Sunday"),
    ];

    let mut totals: HashMap<Weekday, f64> = HashMap::new();
    for r in records.iter().filter(|r| r.amount < 0.0) {
        if let Some(date) = record_date(r) {
            *totals.entry(date.weekday()).or_insert(0.0) += r.amount.abs();
        }
    }

    DAYS.iter()
        .filter_map(|(day, label)| totals.get(day).map(|total| (*label, *total)))
        .collect()
}

/// Per-category cost-control recommendation with a 15% savings estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub category: String,
    pub spent: f64,
    pub advice: String,
    pub potential_savings: f64,
}

const ADVICE: &[(&str, &str)] = &[
    ("Food", "Consider meal planning and cooking at home more often to reduce dining expenses."),
    ("Healthcare", "Explore generic medication options and preventative care to reduce costs."),
    ("Transport", "Use public transportation or carpooling when possible to save on fuel."),
    ("Shopping", "Implement a 24-hour waiting period before making non-essential purchases."),
    ("Entertainment", "Look for free community events and utilize library resources."),
    ("Utilities", "Review subscription services and cancel unused memberships."),
    ("Other", "Review these miscellaneous expenses for potential savings opportunities."),
];

/// Suggestions for the categories the ledger actually spent in.
pub fn cost_control_suggestions(records: &[TransactionRecord]) -> Vec<Suggestion> {
    let by_category = spending_by_category(records);
    ADVICE
        .iter()
        .filter_map(|(category, advice)| {
            by_category
                .iter()
                .find(|(c, _)| c == category)
                .map(|(c, spent)| Suggestion {
                    category: c.clone(),
                    spent: *spent,
                    advice: (*advice).to_string(),
                    potential_savings: spent * 0.15,
                })
        })
        .collect()
}
