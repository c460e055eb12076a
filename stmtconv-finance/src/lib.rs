//! stmtconv-finance: keyword category rules, VAT rates, and per-category /
//! per-rate reports over converted transactions.

pub mod category_rules;
pub mod report;

pub use category_rules::{categorize, Category};
pub use report::{category_summary, vat_summary, CategoryTotal, VatTotal};
