//! Issuer format detection from statement boilerplate.

use upilens_core::StatementSource;

/// Identify which issuer layout the extracted text follows.
///
/// Detection is substring-presence based, not positional: each issuer's
/// statements carry distinctive literal labels. The first matching rule
/// wins; `None` means no supported grammar applies and the parse must
/// stop rather than attempt a best-effort read.
pub fn detect_statement_source(text: &str) -> Option<StatementSource> {
    if text.contains("UPI Ref No") && text.contains("Total Money Paid") {
        return Some(StatementSource::Paytm);
    }
    if text.contains("Transaction ID")
        && text.contains("UTR No")
        && text.contains("Transaction Statement for")
    {
        return Some(StatementSource::PhonePe);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_paytm() {
        let text = "UPI Statement for 01 FEB'24 - 29 FEB'24\nUPI Ref No: 123\nTotal Money Paid: Rs. 540.00";
        assert_eq!(detect_statement_source(text), Some(StatementSource::Paytm));
    }

    #[test]
    fn test_detects_phonepe() {
        let text = "Transaction Statement for 9876543210\nTransaction ID : T1\nUTR No : 42";
        assert_eq!(detect_statement_source(text), Some(StatementSource::PhonePe));
    }

    #[test]
    fn test_unknown_format_is_none() {
        assert_eq!(detect_statement_source("monthly savings account summary"), None);
        assert_eq!(detect_statement_source(""), None);
    }

    #[test]
    fn test_paytm_rule_wins_ties() {
        // A document carrying both issuers' labels resolves to the first rule.
        let text = "UPI Ref No: 1 Total Money Paid Transaction ID UTR No Transaction Statement for";
        assert_eq!(detect_statement_source(text), Some(StatementSource::Paytm));
    }
}
