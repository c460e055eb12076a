//! ABN AMRO statement lines, direction written as a Credit/Debet suffix.
//!
//!   03-01-2025  Werkgever BV           2.500,00 Credit
//!   04-01-2025  Albert Heijn 1234         45,30 Debet

use crate::profiles::FormatProfile;

pub(crate) fn profile() -> FormatProfile {
    FormatProfile::new(
        "abn",
        r"(\d{2}-\d{2}-\d{4})",
        r"(?i)[+-]?\s*(\d[\d.,]*[.,]\d{2})\s*(?:credit|debet)?\s*$",
        r"(?i)\d{2}-\d{2}-\d{4}\s+(.+?)\s+[+-]?\s*\d[\d.,]*[.,]\d{2}\s*(?:credit|debet)?\s*$",
    )
    .expect("invalid abn pattern")
}
