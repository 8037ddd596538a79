//! Paytm statement parser: delimited day/time scanner with year-rollover
//! inference.
//!
//! Expected extracted-text shape, one entry per transaction:
//!
//!   30 Dec
//!   09:15 PM
//!   Paid to Swiggy UPI Ref No: 436912345678
//!   - Rs.249.00
//!
//! Entries carry no year, so the statement's validity period seeds a
//! running year that advances on a December-to-January wraparound.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use upilens_core::{FieldFallback, StatementSource, TransactionType};

use crate::normalize::{month_number, parse_clock_time};
use crate::period::{default_period, statement_period};
use crate::types::{
    AmountResolution, BlockWarning, DateResolution, ParsedTransaction, StatementParse,
};

/// Parse extracted Paytm statement text into transactions.
pub fn parse_paytm_text(text: &str) -> Result<StatementParse> {
    // The day/time pair both opens an entry and terminates the previous
    // one. The regex crate has no lookahead, so entry bodies are sliced
    // between consecutive header matches instead.
    let header_re = Regex::new(r"(\d{1,2}) ([A-Za-z]{3})\r?\n(\d{1,2}:\d{2} [AP]M)")?;
    let amount_re = Regex::new(r"([+-])\s?Rs\.?\s?(\d+(?:,\d{3})*(?:\.\d{2})?)")?;
    let ref_suffix_re = Regex::new(r"UPI Ref No:.*")?;

    let (period_start, _) = statement_period(text)?.unwrap_or_else(default_period);
    let mut current_year = period_start.year();
    let mut previous_month: Option<u32> = None;

    let mut transactions = Vec::new();
    let mut warnings = Vec::new();

    let headers: Vec<regex::Captures<'_>> = header_re.captures_iter(text).collect();
    for (idx, caps) in headers.iter().enumerate() {
        let Some(whole) = caps.get(0) else { continue };
        let day_str = &caps[1];
        let month_str = &caps[2];
        let time_str = &caps[3];

        let body_end = headers
            .get(idx + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());
        let body = text[whole.end()..body_end].trim();

        // Year inference: a month numerically below the previous one,
        // when the previous was December, crosses a year boundary.
        let date = match month_number(month_str) {
            Some(month) => {
                if let Some(prev) = previous_month {
                    if month < prev && prev == 12 {
                        current_year += 1;
                    }
                }
                previous_month = Some(month);
                day_str
                    .parse::<u32>()
                    .ok()
                    .and_then(|day| NaiveDate::from_ymd_opt(current_year, month, day))
            }
            None => None,
        };

        let raw_date = format!("{day_str} {month_str} {time_str}");
        let date = match (date, parse_clock_time(time_str)) {
            (Some(d), Some(t)) => DateResolution::resolved(d.and_time(t), true),
            (Some(_), None) => DateResolution::unresolved(&raw_date, FieldFallback::UnparseableTime),
            (None, _) => DateResolution::unresolved(&raw_date, FieldFallback::UnparseableDate),
        };

        // Amounts need an explicit sign to fix their direction; a signless
        // body keeps the record with a zero amount rather than guessing.
        let amount = match amount_re.captures(body) {
            Some(caps) => {
                let magnitude: f64 = caps[2].replace(',', "").parse().unwrap_or(0.0);
                let value = if &caps[1] == "-" { -magnitude } else { magnitude };
                AmountResolution::resolved(value)
            }
            None if body.contains("Rs") => {
                AmountResolution::fallback(FieldFallback::UnsignedAmount)
            }
            None => AmountResolution::fallback(FieldFallback::MissingAmount),
        };

        let first_line = body.lines().next().unwrap_or("").trim();
        let description = ref_suffix_re.replace(first_line, "").trim().to_string();

        if description.is_empty() && amount.value == 0.0 {
            warnings.push(BlockWarning {
                header: format!("{day_str} {month_str}"),
                reason: "no description or amount found in entry".to_string(),
            });
            continue;
        }

        let txn_type = TransactionType::from_amount(amount.value);

        transactions.push(ParsedTransaction {
            date,
            description,
            amount,
            txn_type,
            txn_id: None,
            utr: None,
        });
    }

    Ok(StatementParse {
        source: StatementSource::Paytm,
        transactions,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATEMENT: &str = "\
Paytm Passbook
UPI Statement for 25 DEC'24 - 20 JAN'25
UPI Ref No Total Money Paid
30 Dec
09:15 PM
Paid to Swiggy UPI Ref No: 436912345678
- Rs.249.00
2 Jan
10:00 AM
Received from Anil Sharma UPI Ref No: 500112345678
+ Rs 2,000.00
15 Jan
08:45 AM
Mobile Recharge UPI Ref No: 500912345678
- Rs 199.00
";

    #[test]
    fn test_year_rollover_across_december() {
        let parse = parse_paytm_text(STATEMENT).unwrap();
        assert_eq!(parse.source, StatementSource::Paytm);
        let years: Vec<i32> = parse
            .transactions
            .iter()
            .map(|t| t.date.resolved_at.unwrap().year())
            .collect();
        assert_eq!(years, vec![2024, 2025, 2025]);
    }

    #[test]
    fn test_signed_amounts_and_types() {
        let parse = parse_paytm_text(STATEMENT).unwrap();
        let txns = &parse.transactions;
        assert_eq!(txns.len(), 3);
        assert_eq!(txns[0].amount.value, -249.00);
        assert_eq!(txns[0].txn_type, TransactionType::Debit);
        assert_eq!(txns[1].amount.value, 2000.00);
        assert_eq!(txns[1].txn_type, TransactionType::Credit);
        assert_eq!(txns[2].amount.value, -199.00);
    }

    #[test]
    fn test_description_strips_ref_suffix() {
        let parse = parse_paytm_text(STATEMENT).unwrap();
        assert_eq!(parse.transactions[0].description, "Paid to Swiggy");
        assert_eq!(parse.transactions[1].description, "Received from Anil Sharma");
        assert_eq!(parse.transactions[2].description, "Mobile Recharge");
    }

    #[test]
    fn test_display_date_carries_clock() {
        let parse = parse_paytm_text(STATEMENT).unwrap();
        assert_eq!(parse.transactions[0].date.display, "Dec 30 21:15");
        assert_eq!(parse.transactions[0].date.month_bucket, "Dec 2024");
    }

    #[test]
    fn test_unsigned_amount_is_zero_credit() {
        let text = "\
UPI Statement for 01 FEB'24 - 29 FEB'24
5 Feb
11:30 AM
Paid to Landlord UPI Ref No: 600112345678
Rs 8,000.00
";
        let parse = parse_paytm_text(text).unwrap();
        let txn = &parse.transactions[0];
        assert_eq!(txn.amount.value, 0.0);
        assert_eq!(txn.amount.fallback, Some(FieldFallback::UnsignedAmount));
        // Zero is not < 0, so the record reads as a credit. Intentionally
        // pinned; see DESIGN.md.
        assert_eq!(txn.txn_type, TransactionType::Credit);
    }

    #[test]
    fn test_entry_with_no_body_skipped_with_warning() {
        let text = "\
UPI Statement for 01 FEB'24 - 29 FEB'24
5 Feb
11:30 AM
6 Feb
09:00 AM
Paid to Grocer UPI Ref No: 700112345678
- Rs 450.00
";
        let parse = parse_paytm_text(text).unwrap();
        assert_eq!(parse.transactions.len(), 1);
        assert_eq!(parse.transactions[0].description, "Paid to Grocer");
        assert_eq!(parse.warnings.len(), 1);
        assert_eq!(parse.warnings[0].header, "5 Feb");
    }

    #[test]
    fn test_compact_sign_without_spaces() {
        let text = "\
UPI Statement for 01 FEB'24 - 29 FEB'24
8 Feb
07:20 PM
Paid to Dhabha Express UPI Ref No: 800112345678
-Rs 100.00
";
        let parse = parse_paytm_text(text).unwrap();
        let txn = &parse.transactions[0];
        assert_eq!(txn.amount.value, -100.00);
        assert_eq!(txn.txn_type, TransactionType::Debit);
    }

    #[test]
    fn test_missing_period_defaults_do_not_panic() {
        // No period header: the running year seeds from the default
        // period, and entries still come out in source order.
        let text = "3 Mar\n04:10 PM\nPaid to Cafe UPI Ref No: 1\n- Rs 120.00\n";
        let parse = parse_paytm_text(text).unwrap();
        assert_eq!(parse.transactions.len(), 1);
        assert_eq!(parse.transactions[0].amount.value, -120.00);
    }
}
