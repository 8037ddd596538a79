//! upilens-ingest: statement format detection, field normalizers, and the
//! issuer-specific layout parsers (PhonePe block scanner, Paytm delimited
//! scanner).

pub mod detect;
pub mod normalize;
pub mod parsers;
pub mod period;
pub mod types;

pub use detect::detect_statement_source;
pub use parsers::paytm::parse_paytm_text;
pub use parsers::phonepe::parse_phonepe_text;
pub use types::{AmountResolution, BlockWarning, DateResolution, ParsedTransaction, StatementParse};
