//! Ledger assembly: run the detected parser, attach derived fields, and
//! validate non-emptiness.

use anyhow::Result;
use serde::Serialize;
use upilens_core::{LedgerError, StatementSource, TransactionRecord};
use upilens_ingest::{
    BlockWarning, StatementParse, detect_statement_source, parse_paytm_text, parse_phonepe_text,
};

use crate::categorize::categorize;

/// Finished parse result: ordered records plus the detected source tag
/// and any per-block warnings.
///
/// The pipeline keeps no state between calls; this object is the whole
/// result and is held by the caller. Re-parsing builds a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ledger {
    pub source: StatementSource,
    pub transactions: Vec<TransactionRecord>,
    pub warnings: Vec<BlockWarning>,
}

/// Attach the category and flatten field resolutions into final records,
/// preserving source order. Zero records is its own condition, distinct
/// from an unrecognized format, so callers can suggest likely causes.
pub fn assemble(parse: StatementParse) -> Result<Ledger, LedgerError> {
    let transactions: Vec<TransactionRecord> = parse
        .transactions
        .into_iter()
        .map(|txn| {
            let category = categorize(&format!("{} {}", txn.description, txn.txn_type));
            TransactionRecord {
                display_date: txn.date.display,
                description: txn.description,
                amount: txn.amount.value,
                category,
                txn_type: txn.txn_type,
                month_bucket: txn.date.month_bucket,
                resolved_at: txn.date.resolved_at,
            }
        })
        .collect();

    if transactions.is_empty() {
        return Err(LedgerError::EmptyResult {
            source: parse.source,
        });
    }

    Ok(Ledger {
        source: parse.source,
        transactions,
        warnings: parse.warnings,
    })
}

/// One-call pipeline: detect the issuer grammar, run its layout parser,
/// and assemble the ledger. Taxonomy conditions ([`LedgerError`]) travel
/// inside the returned error and can be recovered with `downcast_ref`.
pub fn parse_statement(text: &str) -> Result<Ledger> {
    let source = detect_statement_source(text).ok_or(LedgerError::UnsupportedFormat)?;
    let parse = match source {
        StatementSource::Paytm => parse_paytm_text(text)?,
        StatementSource::PhonePe => parse_phonepe_text(text)?,
    };
    Ok(assemble(parse)?)
}
