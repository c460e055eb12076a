//! Per-institution pattern sets, built once and shared read-only.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::parsers::{abn_amro, generic, ing, rabobank};

/// Format id of the fallback profile.
pub const DEFAULT_FORMAT: &str = "generic";

/// Three extraction patterns for one statement layout.
/// Each pattern's first capture group is the extracted value.
#[derive(Debug)]
pub struct FormatProfile {
    pub id: &'static str,
    pub date: Regex,
    pub amount: Regex,
    pub description: Regex,
}

impl FormatProfile {
    /// Compile a profile. Patterns are fixed strings, so a compile error is a
    /// programming error surfaced by the profile tests.
    pub fn new(
        id: &'static str,
        date: &str,
        amount: &str,
        description: &str,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            id,
            date: Regex::new(date)?,
            amount: Regex::new(amount)?,
            description: Regex::new(description)?,
        })
    }
}

fn registry() -> &'static HashMap<&'static str, FormatProfile> {
    static PROFILES: OnceLock<HashMap<&'static str, FormatProfile>> = OnceLock::new();
    PROFILES.get_or_init(|| {
        [ing::profile(), rabobank::profile(), abn_amro::profile(), generic::profile()]
            .into_iter()
            .map(|p| (p.id, p))
            .collect()
    })
}

/// Profile for `format_id`, or the default profile when the id is unknown.
pub fn profile_for(format_id: &str) -> &'static FormatProfile {
    let profiles = registry();
    match profiles.get(format_id) {
        Some(p) => p,
        None => {
            tracing::trace!(format_id, "no dedicated profile, using {DEFAULT_FORMAT}");
            &profiles[DEFAULT_FORMAT]
        }
    }
}

/// Ids that have a dedicated profile, sorted.
pub fn known_formats() -> Vec<&'static str> {
    let mut ids: Vec<_> = registry().keys().copied().collect();
    ids.sort_unstable();
    ids
}
