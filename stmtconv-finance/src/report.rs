//! Grouped totals: per category and per VAT rate.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use stmtconv_ingest::Transaction;

use crate::category_rules::{categorize, Category};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub count: usize,
    /// Sum of amounts (income and expense alike)
    pub total: f64,
    /// Share of all transactions by count, in percent
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatTotal {
    pub rate: u8,
    /// VAT-inclusive spend at this rate
    pub total: f64,
    pub vat_amount: f64,
}

/// Group transactions by category, largest total first.
pub fn category_summary(txns: &[Transaction]) -> Vec<CategoryTotal> {
    let mut groups: HashMap<Category, (usize, f64)> = HashMap::new();
    for t in txns {
        let entry = groups.entry(categorize(&t.description)).or_default();
        entry.0 += 1;
        entry.1 += t.amount;
    }

    let len = txns.len() as f64;
    let mut out: Vec<CategoryTotal> = groups
        .into_iter()
        .map(|(category, (count, total))| CategoryTotal {
            category,
            count,
            total,
            share: count as f64 / len * 100.0,
        })
        .collect();

    out.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.category.name().cmp(b.category.name()))
    });
    out
}

/// VAT contained in expenses, grouped by rate, highest rate first.
/// Amounts are VAT inclusive: vat = amount * rate / (100 + rate).
pub fn vat_summary(txns: &[Transaction]) -> Vec<VatTotal> {
    let mut by_rate: BTreeMap<u8, f64> = BTreeMap::new();
    for t in txns.iter().filter(|t| t.is_expense()) {
        *by_rate.entry(categorize(&t.description).vat_rate()).or_insert(0.0) += t.amount;
    }

    by_rate
        .into_iter()
        .rev()
        .map(|(rate, total)| VatTotal {
            rate,
            total,
            vat_amount: total * f64::from(rate) / (100.0 + f64::from(rate)),
        })
        .collect()
}
