//! PhonePe statement parser: date-header block scanner.
//!
//! Expected extracted-text shape, one block per transaction:
//!
//!   Mar 15, 2024
//!   02:30 PM
//!   Paid to Zomato
//!   Transaction ID : T2403151430
//!   UTR No : 405915221133
//!   Debited from XX1234
//!   INR 250.00
//!
//! A line matching the strict date pattern opens a block; everything up
//! to the next date line belongs to it, in no guaranteed order.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use upilens_core::{FieldFallback, StatementSource, TransactionType};

use crate::normalize::{parse_clock_time, parse_currency};
use crate::types::{
    AmountResolution, BlockWarning, DateResolution, ParsedTransaction, StatementParse,
};

/// Substrings marking a line as metadata rather than description text.
const METADATA_MARKERS: &[&str] = &[
    "Transaction ID",
    "UTR No",
    "Debited from",
    "Credited to",
    "INR",
    "Rs.",
];

/// Parse extracted PhonePe statement text into transactions.
pub fn parse_phonepe_text(text: &str) -> Result<StatementParse> {
    let date_re = Regex::new(r"^[A-Za-z]{3} \d{1,2}, \d{4}$")?;
    let time_re = Regex::new(r"\d{1,2}:\d{2} [AP]M")?;
    let txn_id_re = Regex::new(r"Transaction ID\s*:?\s*(\w+)")?;
    let utr_re = Regex::new(r"UTR No\s*:?\s*(\w+)")?;
    let account_re = Regex::new(r"(Debited from|Credited to)\s+(XX\d+|Bank Account)")?;

    // Pagination artifacts and machine-generated footers carry no fields.
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .filter(|l| !l.starts_with("Page") && !l.to_lowercase().contains("system generated"))
        .collect();

    let current_year = Local::now().year();
    let mut transactions = Vec::new();
    let mut warnings = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if !date_re.is_match(lines[i]) {
            i += 1;
            continue;
        }
        let header = lines[i];
        i += 1;

        let mut block = Vec::new();
        while i < lines.len() && !date_re.is_match(lines[i]) {
            block.push(lines[i]);
            i += 1;
        }

        // First-match-wins capture of every field across the block.
        let mut time_str: Option<&str> = None;
        let mut txn_id: Option<String> = None;
        let mut utr: Option<String> = None;
        let mut direction: Option<TransactionType> = None;
        let mut magnitude: Option<f64> = None;
        let mut description = "";

        for line in &block {
            if time_str.is_none() {
                if let Some(m) = time_re.find(line) {
                    time_str = Some(m.as_str());
                }
            }
            if txn_id.is_none() {
                if let Some(caps) = txn_id_re.captures(line) {
                    txn_id = Some(caps[1].to_string());
                }
            }
            if utr.is_none() {
                if let Some(caps) = utr_re.captures(line) {
                    utr = Some(caps[1].to_string());
                }
            }
            if direction.is_none() {
                if let Some(caps) = account_re.captures(line) {
                    direction = Some(if caps[1].starts_with("Debited") {
                        TransactionType::Debit
                    } else {
                        TransactionType::Credit
                    });
                }
            }
            if magnitude.is_none() {
                if let Some(v) = parse_currency(line) {
                    magnitude = Some(v);
                }
            }
            if description.is_empty()
                && !METADATA_MARKERS.iter().any(|m| line.contains(m))
                && !time_re.is_match(line)
            {
                description = line;
            }
        }

        // Direction is fixed before the sign: a debit forces the amount
        // negative regardless of how the source printed it.
        let txn_type =
            direction.unwrap_or_else(|| TransactionType::from_amount(magnitude.unwrap_or(0.0)));
        let amount = match magnitude {
            Some(v) if txn_type == TransactionType::Debit => AmountResolution::resolved(-v.abs()),
            Some(v) => AmountResolution::resolved(v),
            None => AmountResolution::fallback(FieldFallback::MissingAmount),
        };

        // A block yielding neither a description nor an amount is a parse
        // failure: skip it with a warning, never emit an empty record.
        if description.is_empty() && amount.value == 0.0 {
            warnings.push(BlockWarning {
                header: header.to_string(),
                reason: "no description or amount found in block".to_string(),
            });
            continue;
        }

        let date = resolve_block_date(header, time_str, current_year);

        transactions.push(ParsedTransaction {
            date,
            description: description.to_string(),
            amount,
            txn_type,
            txn_id,
            utr,
        });
    }

    Ok(StatementParse {
        source: StatementSource::PhonePe,
        transactions,
        warnings,
    })
}

/// Resolve a block's header date plus its captured time, degrading to
/// the raw literal text when either part refuses to parse.
fn resolve_block_date(header: &str, time_str: Option<&str>, current_year: i32) -> DateResolution {
    // Headers normally carry their own year ("Mar 15, 2024"); a year-less
    // header is joined with the statement's implicit current year.
    let date = NaiveDate::parse_from_str(header, "%b %d, %Y")
        .ok()
        .or_else(|| {
            let day_month = header.split(',').next().unwrap_or(header).trim();
            NaiveDate::parse_from_str(&format!("{day_month} {current_year}"), "%b %d %Y").ok()
        });

    let raw = match time_str {
        Some(t) => format!("{header} {t}"),
        None => header.to_string(),
    };

    let Some(date) = date else {
        return DateResolution::unresolved(&raw, FieldFallback::UnparseableDate);
    };

    match time_str {
        Some(t) => match parse_clock_time(t) {
            Some(time) => DateResolution::resolved(date.and_time(time), true),
            None => DateResolution::unresolved(&raw, FieldFallback::UnparseableTime),
        },
        None => DateResolution::resolved_date(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    const STATEMENT: &str = "\
Transaction Statement for 9876543210
Mar 01, 2024 - Mar 31, 2024
Mar 15, 2024
02:30 PM
Paid to Zomato
Transaction ID : T2403151430
UTR No : 405915221133
Debited from XX1234
INR 250.00
Mar 16, 2024
Received from Ramesh Kumar
Credited to XX1234
10:05 AM
Transaction ID : T2403161005
INR 1,000.00
Page 2
This is a system generated statement.
";

    #[test]
    fn test_parses_blocks_in_source_order() {
        let parse = parse_phonepe_text(STATEMENT).unwrap();
        assert_eq!(parse.source, StatementSource::PhonePe);
        assert_eq!(parse.transactions.len(), 2);
        assert!(parse.warnings.is_empty());

        let first = &parse.transactions[0];
        assert_eq!(first.description, "Paid to Zomato");
        assert_eq!(first.amount.value, -250.00);
        assert_eq!(first.txn_type, TransactionType::Debit);
        assert_eq!(first.txn_id.as_deref(), Some("T2403151430"));
        assert_eq!(first.utr.as_deref(), Some("405915221133"));
        assert_eq!(first.date.display, "Mar 15 14:30");
        assert_eq!(first.date.month_bucket, "Mar 2024");

        let second = &parse.transactions[1];
        assert_eq!(second.description, "Received from Ramesh Kumar");
        assert_eq!(second.amount.value, 1000.00);
        assert_eq!(second.txn_type, TransactionType::Credit);
    }

    #[test]
    fn test_debit_forces_negative_amount() {
        // Amount printed without a sign, but the account line says debit.
        let text = "Mar 15, 2024\nPaid to Chai Point\nDebited from XX1234\nINR 30.00\n";
        let parse = parse_phonepe_text(text).unwrap();
        let txn = &parse.transactions[0];
        assert_eq!(txn.amount.value, -30.00);
        assert_eq!(txn.txn_type, TransactionType::Debit);
    }

    #[test]
    fn test_first_amount_line_wins() {
        let text = "Mar 15, 2024\nPaid to Grocer\nDebited from XX1234\nINR 120.00\nINR 999.00\n";
        let parse = parse_phonepe_text(text).unwrap();
        assert_eq!(parse.transactions[0].amount.value, -120.00);
    }

    #[test]
    fn test_missing_amount_keeps_record_with_reason() {
        let text = "Mar 15, 2024\n02:30 PM\nPaid to Street Vendor\nDebited from XX1234\n";
        let parse = parse_phonepe_text(text).unwrap();
        let txn = &parse.transactions[0];
        assert_eq!(txn.amount.value, 0.0);
        assert_eq!(txn.amount.fallback, Some(FieldFallback::MissingAmount));
        // Direction text still fixes the type even with no amount.
        assert_eq!(txn.txn_type, TransactionType::Debit);
    }

    #[test]
    fn test_malformed_block_skipped_with_warning() {
        let text = "\
Mar 15, 2024
02:30 PM
Paid to Zomato
Debited from XX1234
INR 250.00
Mar 16, 2024
Transaction ID : T999
Mar 17, 2024
Received from Suresh
Credited to Bank Account
INR 50.00
";
        let parse = parse_phonepe_text(text).unwrap();
        assert_eq!(parse.transactions.len(), 2);
        assert_eq!(parse.warnings.len(), 1);
        assert_eq!(parse.warnings[0].header, "Mar 16, 2024");
    }

    #[test]
    fn test_no_direction_text_derives_type_from_sign() {
        let text = "Mar 18, 2024\nCashback reward\nINR 15.00\n";
        let parse = parse_phonepe_text(text).unwrap();
        let txn = &parse.transactions[0];
        assert_eq!(txn.txn_type, TransactionType::Credit);
        assert_eq!(txn.amount.value, 15.00);
    }

    #[test]
    fn test_date_only_block_has_midnight_timestamp() {
        let text = "Mar 18, 2024\nCashback reward\nINR 15.00\n";
        let parse = parse_phonepe_text(text).unwrap();
        let date = &parse.transactions[0].date;
        assert_eq!(date.display, "Mar 18");
        assert_eq!(
            date.resolved_at,
            NaiveDate::from_ymd_opt(2024, 3, 18).map(|d| d.and_time(NaiveTime::MIN))
        );
    }

    #[test]
    fn test_unparseable_time_degrades_to_literal() {
        let text = "Mar 19, 2024\n99:99 PM\nPaid to Kirana Store\nINR 75.00\nDebited from XX1234\n";
        let parse = parse_phonepe_text(text).unwrap();
        let date = &parse.transactions[0].date;
        assert_eq!(date.resolved_at, None);
        assert_eq!(date.display, "Mar 19, 2024 99:99 PM");
        assert_eq!(date.month_bucket, "Unknown");
        assert_eq!(date.fallback, Some(FieldFallback::UnparseableTime));
    }
}
