//! Line parser: one statement line + a format profile → provisional transaction.
//!
//! Bank layouts live in their own modules; each exposes `profile()`.

pub mod abn_amro;
pub mod generic;
pub mod ing;
pub mod rabobank;

use regex::Regex;

use crate::profiles::{profile_for, FormatProfile};
use crate::types::ProvisionalTransaction;

/// Description used when the profile's description pattern finds nothing.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

fn first_group<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Parse one line using the profile registered for `format_id`.
/// Unknown ids use the default profile. `None` means the line is not a
/// transaction line (header, blank, footer...).
pub fn parse_line(line: &str, format_id: &str) -> Option<ProvisionalTransaction> {
    parse_line_with(profile_for(format_id), line)
}

pub fn parse_line_with(profile: &FormatProfile, line: &str) -> Option<ProvisionalTransaction> {
    let date = first_group(&profile.date, line)?;
    let amount = first_group(&profile.amount, line)?;

    let description = first_group(&profile.description, line)
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(UNKNOWN_DESCRIPTION);

    Some(ProvisionalTransaction {
        date: date.to_string(),
        description: description.to_string(),
        raw_amount: normalize_amount(amount),
        source_line: line.trim().to_string(),
    })
}

/// Turn statement amount text into a number.
///
/// Thousands separators are dropped and a decimal comma becomes a decimal
/// point. When both `.` and `,` appear, the rightmost is the decimal
/// separator. A lone separator followed by exactly three digits, or a
/// separator that repeats, is a thousands separator.
///
/// Text that still does not parse yields `0.0`.
pub fn normalize_amount(raw: &str) -> f64 {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let (sign, digits) = match compact.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, compact.strip_prefix('+').unwrap_or(&compact)),
    };

    let normalized = match (digits.rfind('.'), digits.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => digits.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => digits.replace(',', ""),
        (None, Some(_)) => lone_separator(digits, ','),
        (Some(_), None) => lone_separator(digits, '.'),
        (None, None) => digits.to_string(),
    };

    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => sign * v,
        _ => 0.0,
    }
}

fn lone_separator(digits: &str, sep: char) -> String {
    let repeats = digits.matches(sep).count() > 1;
    let tail = digits.rsplit(sep).next().map_or(0, str::len);
    if repeats || tail == 3 {
        digits.replace(sep, "")
    } else {
        digits.replace(sep, ".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::known_formats;

    #[test]
    fn test_normalize_amount_separators() {
        assert_eq!(normalize_amount("2,500.00"), 2500.0);
        assert_eq!(normalize_amount("2.500,00"), 2500.0);
        assert_eq!(normalize_amount("85.50"), 85.5);
        assert_eq!(normalize_amount("85,50"), 85.5);
        assert_eq!(normalize_amount("1.250"), 1250.0);
        assert_eq!(normalize_amount("1,250"), 1250.0);
        assert_eq!(normalize_amount("1.000.000"), 1_000_000.0);
        assert_eq!(normalize_amount("12"), 12.0);
    }

    #[test]
    fn test_normalize_amount_keeps_sign() {
        assert_eq!(normalize_amount("-15.99"), -15.99);
        assert_eq!(normalize_amount("+850,00"), 850.0);
        assert_eq!(normalize_amount("- 1.234,56"), -1234.56);
    }

    #[test]
    fn test_malformed_amount_degrades_to_zero() {
        assert_eq!(normalize_amount(""), 0.0);
        assert_eq!(normalize_amount("."), 0.0);
        assert_eq!(normalize_amount("abc"), 0.0);
        assert_eq!(normalize_amount("nan"), 0.0);
        assert_eq!(normalize_amount("inf"), 0.0);
    }

    #[test]
    fn test_line_without_date_never_matches() {
        let lines = [
            "",
            "   ",
            "ING Bank Statement - January 2025",
            "Opening balance 1,234.56",
            "Grocery Store -85.50",
            "Total EUR 3.350,00 Credit",
        ];
        let mut formats = known_formats();
        formats.push("bunq");
        formats.push("no-such-bank");
        for fmt in formats {
            for line in lines {
                assert!(parse_line(line, fmt).is_none(), "{fmt} matched {line:?}");
            }
        }
    }

    #[test]
    fn test_missing_amount_is_no_match() {
        assert!(parse_line("01-01-2025  Salary Payment", "ing").is_none());
        assert!(parse_line("2025-01-02  Albert Heijn", "rabobank").is_none());
    }

    #[test]
    fn test_missing_description_uses_sentinel() {
        let p = parse_line("01-01-2025 +2,500.00", "ing").unwrap();
        assert_eq!(p.description, UNKNOWN_DESCRIPTION);
        assert_eq!(p.raw_amount, 2500.0);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let line = "05-01-2025  Netflix Subscription  -15.99";
        assert_eq!(parse_line(line, "ing"), parse_line(line, "ing"));
    }

    #[test]
    fn test_custom_profile_signed_amount() {
        let profile = FormatProfile::new(
            "signed",
            r"(\d{2}-\d{2}-\d{4})",
            r"(-?\d+\.\d{2})\s*$",
            r"\d{4}\s+(.+?)\s+-?\d",
        )
        .unwrap();
        let p = parse_line_with(&profile, "02-01-2025 Grocery Store -85.50").unwrap();
        assert_eq!(p.raw_amount, -85.5);
        assert_eq!(p.description, "Grocery Store");
    }
}
