//! upilens-insights: ordered keyword classifier, ledger assembly,
//! read-only aggregation views, and export forms.

pub mod categorize;
pub mod export;
pub mod ledger;
pub mod summary;

pub use categorize::{DEFAULT_RULES, categorize, categorize_with};
pub use ledger::{Ledger, assemble, parse_statement};
