//! Institution detection from statement text.

use crate::profiles::DEFAULT_FORMAT;

/// Ordered (marker, format id) rules. First marker found wins.
const MARKERS: &[(&str, &str)] = &[
    ("ing bank", "ing"),
    ("ing.nl", "ing"),
    ("rabobank", "rabobank"),
    ("abn amro", "abn"),
    ("bunq", "bunq"),
];

/// Case-insensitive marker search; `generic` when nothing matches.
pub fn detect_format(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    MARKERS
        .iter()
        .find(|(marker, _)| lower.contains(marker))
        .map(|(_, id)| *id)
        .unwrap_or(DEFAULT_FORMAT)
}
