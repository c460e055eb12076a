//! Conversion pipeline: detect → parse → classify → summarize.

use tracing::{debug, trace};

use crate::classify::classify;
use crate::detect::detect_format;
use crate::error::ConvertError;
use crate::parsers::parse_line;
use crate::types::{ConversionResult, Summary};

/// Convert statement text, detecting the institution from the text itself.
pub fn convert(text: &str) -> Result<ConversionResult, ConvertError> {
    let format = detect_format(text);
    debug!(format, "detected statement format");
    convert_as(text, format)
}

/// Convert statement text with a fixed format id (unknown ids use the
/// default profile). Lines that do not parse are skipped.
pub fn convert_as(text: &str, format_id: &str) -> Result<ConversionResult, ConvertError> {
    let mut transactions = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        match parse_line(line, format_id) {
            Some(raw) => transactions.push(classify(raw, line)),
            None => trace!(line_no = idx + 1, "skipping non-transaction line"),
        }
    }

    if transactions.is_empty() {
        return Err(ConvertError::NoTransactionsFound);
    }

    let summary = Summary::from_transactions(&transactions);
    debug!(
        format = format_id,
        count = summary.count,
        income = summary.total_income,
        expense = summary.total_expense,
        "conversion finished"
    );

    Ok(ConversionResult {
        format: format_id.to_string(),
        transactions,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only_is_error() {
        let err = convert("ING Bank Statement - January 2025\n\n").unwrap_err();
        assert!(matches!(err, ConvertError::NoTransactionsFound));
        assert!(matches!(convert(""), Err(ConvertError::NoTransactionsFound)));
    }

    #[test]
    fn test_crlf_lines() {
        let text = "ING Bank\r\n01-01-2025  Salary Payment  +2,500.00\r\n02-01-2025  Rent  -900.00\r\n";
        let res = convert(text).unwrap();
        assert_eq!(res.transactions.len(), 2);
        assert_eq!(res.transactions[1].description, "Rent");
        assert_eq!(res.transactions[1].source_line, "02-01-2025  Rent  -900.00");
    }

    #[test]
    fn test_convert_as_overrides_detection() {
        let text = "2025-01-02  Albert Heijn  EUR -45,30";
        let res = convert_as(text, "rabobank").unwrap();
        assert_eq!(res.format, "rabobank");
        assert_eq!(res.transactions[0].amount, 45.3);
    }
}
