//! ING statement lines.
//!
//!   01-01-2025  Salary Payment      +2,500.00
//!   02-01-2025  Grocery Store       -85.50
//!   03-01-2025  Bakkerij            12,40 -

use crate::profiles::FormatProfile;

pub(crate) fn profile() -> FormatProfile {
    FormatProfile::new(
        "ing",
        r"(\d{2}-\d{2}-\d{4})",
        r"[+-]?\s*(\d[\d.,]*[.,]\d{2})\s*[+-]?\s*$",
        r"\d{2}-\d{2}-\d{4}\s+(.+?)\s+[+-]?\s*\d[\d.,]*[.,]\d{2}\s*[+-]?\s*$",
    )
    .expect("invalid ing pattern")
}

#[cfg(test)]
mod tests {
    use crate::parsers::parse_line;

    #[test]
    fn test_parse_ing_rows() {
        let p = parse_line("01-01-2025  Salary Payment      +2,500.00", "ing").unwrap();
        assert_eq!(p.date, "01-01-2025");
        assert_eq!(p.description, "Salary Payment");
        assert_eq!(p.raw_amount, 2500.0);

        let p = parse_line("    02-01-2025  Grocery Store       -85.50", "ing").unwrap();
        assert_eq!(p.description, "Grocery Store");
        assert_eq!(p.raw_amount, 85.5);
        assert_eq!(p.source_line, "02-01-2025  Grocery Store       -85.50");
    }

    #[test]
    fn test_trailing_sign_and_digits_in_description() {
        let p = parse_line("03-01-2025  Bakkerij 24 Uur     12,40 -", "ing").unwrap();
        assert_eq!(p.description, "Bakkerij 24 Uur");
        assert_eq!(p.raw_amount, 12.4);
    }

    #[test]
    fn test_header_is_skipped() {
        assert!(parse_line("ING Bank Statement - January 2025", "ing").is_none());
        assert!(parse_line("Datum       Omschrijving     Bedrag", "ing").is_none());
    }
}
