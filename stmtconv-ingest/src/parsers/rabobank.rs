//! Rabobank statement lines (ISO dates, amounts behind a currency code).
//!
//!   2025-01-02  Albert Heijn 1234       EUR -45,30
//!   2025-01-25  Salaris Januari         EUR +2.750,00

use crate::profiles::FormatProfile;

pub(crate) fn profile() -> FormatProfile {
    FormatProfile::new(
        "rabobank",
        r"(\d{4}-\d{2}-\d{2})",
        r"EUR\s*[+-]?\s*(\d[\d.,]*[.,]\d{2})",
        r"\d{4}-\d{2}-\d{2}\s+(.+?)\s+EUR\b",
    )
    .expect("invalid rabobank pattern")
}
