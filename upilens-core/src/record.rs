//! Normalized transaction record emitted by the statement parsers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issuer layout detected from statement boilerplate.
///
/// Part of the output contract: callers receive the tag alongside the
/// parsed ledger so they can report which grammar was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementSource {
    Paytm,
    PhonePe,
}

impl fmt::Display for StatementSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementSource::Paytm => write!(f, "Paytm"),
            StatementSource::PhonePe => write!(f, "PhonePe"),
        }
    }
}

// thiserror treats the `source` field of `LedgerError::EmptyResult` as an
// error cause, which requires this type to implement `std::error::Error`.
impl std::error::Error for StatementSource {}

/// Direction of money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Debit,
    Credit,
}

impl TransactionType {
    /// Type implied by a signed amount. Zero counts as credit, since only
    /// strictly negative amounts are debits.
    pub fn from_amount(amount: f64) -> Self {
        if amount < 0.0 {
            TransactionType::Debit
        } else {
            TransactionType::Credit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Debit => "Debit",
            TransactionType::Credit => "Credit",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized output of the statement parsers (issuer-agnostic).
///
/// Constructed once per source block and immutable after emission;
/// re-parsing builds a fresh sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Human-readable date, e.g. "Mar 15 14:30"; degrades to the raw
    /// statement text when the date could not be resolved.
    pub display_date: String,
    /// Counterparty/merchant label from the first plain line of the block.
    pub description: String,
    /// Negative = debit (money out), positive = credit (money in).
    /// 0.0 when the amount could not be parsed; the record is still kept.
    pub amount: f64,
    /// Classifier label; "Other" when no keyword matched. Never empty.
    pub category: String,
    pub txn_type: TransactionType,
    /// Coarse aggregation key such as "Mar 2024", or "Unknown" when no
    /// date was resolved.
    pub month_bucket: String,
    /// Resolved timestamp; None when date resolution fell back. All
    /// downstream aggregation tolerates this being absent.
    pub resolved_at: Option<NaiveDateTime>,
}
