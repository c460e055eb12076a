//! Fallback layout: any common date notation, description, trailing amount.

use crate::profiles::{FormatProfile, DEFAULT_FORMAT};

pub(crate) fn profile() -> FormatProfile {
    FormatProfile::new(
        DEFAULT_FORMAT,
        r"\b(\d{4}-\d{2}-\d{2}|\d{1,2}[-/.]\d{1,2}[-/.]\d{2,4})\b",
        r"[+-]?\s*(\d[\d.,]*[.,]\d{2})\s*$",
        r"(?:\d{4}-\d{2}-\d{2}|\d{1,2}[-/.]\d{1,2}[-/.]\d{2,4})\s+(.+?)\s+[+-]?\s*\d[\d.,]*[.,]\d{2}\s*$",
    )
    .expect("invalid generic pattern")
}

#[cfg(test)]
mod tests {
    use crate::parsers::parse_line;

    #[test]
    fn test_date_notations() {
        for (line, date) in [
            ("15/01/2025 Restaurant -45.00", "15/01/2025"),
            ("2025-01-15 Restaurant -45.00", "2025-01-15"),
            ("15.01.2025 Restaurant -45.00", "15.01.2025"),
            ("5-1-25 Restaurant -45.00", "5-1-25"),
        ] {
            let p = parse_line(line, "generic").unwrap();
            assert_eq!(p.date, date);
            assert_eq!(p.description, "Restaurant");
            assert_eq!(p.raw_amount, 45.0);
        }
    }

    #[test]
    fn test_bunq_uses_generic_layout() {
        let p = parse_line("2025-02-01  Coffee, Shop  -3.80", "bunq").unwrap();
        assert_eq!(p.description, "Coffee, Shop");
        assert_eq!(p.raw_amount, 3.8);
    }
}
