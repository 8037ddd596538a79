//! Error taxonomy for the parse pipeline.
//!
//! Only two conditions abort a parse call: an unrecognized issuer layout
//! and a failed/empty text extraction. A recognized statement that yields
//! zero records is its own condition so callers can suggest likely causes.
//! Everything below that level is recovered in place: a bad block becomes
//! a warning, a bad field becomes a fallback value.

use crate::record::StatementSource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal (or terminal) pipeline conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("unsupported statement format: expected a Paytm or PhonePe UPI statement")]
    UnsupportedFormat,

    #[error("statement text extraction failed: {0}")]
    ExtractionFailure(String),

    #[error("statement detected as {source} but no transactions were recognized")]
    EmptyResult { source: StatementSource },
}

/// Why a fallible field fell back to its degraded value.
///
/// Field-level ambiguity never aborts a record; the record is emitted
/// with the fallback value and one of these reasons attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldFallback {
    /// Date text matched no known calendar format.
    UnparseableDate,
    /// Time text matched neither the 12-hour nor the 24-hour clock.
    UnparseableTime,
    /// No currency amount was found in the block.
    MissingAmount,
    /// An amount was present but without the leading +/- sign the
    /// layout requires to fix its direction.
    UnsignedAmount,
}
