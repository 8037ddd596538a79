//! Raw parser output: per-block field resolutions before categorization.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use upilens_core::{FieldFallback, StatementSource, TransactionType};

/// Outcome of resolving a block's date/time text.
///
/// Resolution failure is a value, not an error: the record is still
/// emitted with the literal text as its display form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateResolution {
    /// Resolved timestamp; None when resolution fell back to literal text.
    pub resolved_at: Option<NaiveDateTime>,
    /// "Mar 15 14:30" / "Mar 15" on success, the raw statement text on fallback.
    pub display: String,
    /// "Mar 2024" on success, "Unknown" on fallback.
    pub month_bucket: String,
    pub fallback: Option<FieldFallback>,
}

impl DateResolution {
    /// Build from a resolved timestamp. `with_time` controls whether the
    /// display form carries the clock.
    pub fn resolved(at: NaiveDateTime, with_time: bool) -> Self {
        let display = if with_time {
            at.format("%b %d %H:%M").to_string()
        } else {
            at.format("%b %d").to_string()
        };
        DateResolution {
            resolved_at: Some(at),
            display,
            month_bucket: at.format("%b %Y").to_string(),
            fallback: None,
        }
    }

    /// Date-only resolution; the timestamp is pinned to midnight.
    pub fn resolved_date(date: chrono::NaiveDate) -> Self {
        Self::resolved(date.and_time(NaiveTime::MIN), false)
    }

    /// Fallback: keep the raw text for display, leave the timestamp absent.
    pub fn unresolved(raw: &str, reason: FieldFallback) -> Self {
        DateResolution {
            resolved_at: None,
            display: raw.to_string(),
            month_bucket: "Unknown".to_string(),
            fallback: Some(reason),
        }
    }
}

/// Outcome of resolving a block's amount text. Fallback means 0.0 with the
/// reason attached; the record is never dropped over an amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountResolution {
    /// Signed value; negative = debit. 0.0 on fallback.
    pub value: f64,
    pub fallback: Option<FieldFallback>,
}

impl AmountResolution {
    pub fn resolved(value: f64) -> Self {
        AmountResolution { value, fallback: None }
    }

    pub fn fallback(reason: FieldFallback) -> Self {
        AmountResolution { value: 0.0, fallback: Some(reason) }
    }
}

/// One transaction as recovered from its source block, before the
/// classifier attaches a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    pub date: DateResolution,
    pub description: String,
    pub amount: AmountResolution,
    pub txn_type: TransactionType,
    /// Issuer-assigned transaction id, when the layout prints one.
    pub txn_id: Option<String>,
    /// Bank settlement reference (UTR), distinct from the issuer's id.
    pub utr: Option<String>,
}

/// Non-fatal skip of one malformed transaction block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockWarning {
    /// The block's date-header text, for locating it in the source.
    pub header: String,
    pub reason: String,
}

/// Everything one parser invocation recovered from a statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementParse {
    pub source: StatementSource,
    pub transactions: Vec<ParsedTransaction>,
    pub warnings: Vec<BlockWarning>,
}
