//! upilens-core: shared ledger record types and the pipeline error taxonomy.

pub mod error;
pub mod record;

pub use error::{FieldFallback, LedgerError};
pub use record::{StatementSource, TransactionRecord, TransactionType};
