//! CSV and JSON rendering of converted transactions.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;
use crate::types::{Summary, Transaction};

pub const CSV_HEADER: [&str; 4] = ["Date", "Description", "Amount", "Type"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other} (expected csv or json)")),
        }
    }
}

/// Render transactions in the requested format.
pub fn render(
    txns: &[Transaction],
    format: OutputFormat,
    generated_at: &DateTime<FixedOffset>,
) -> Result<Vec<u8>, ConvertError> {
    match format {
        OutputFormat::Csv => to_csv(txns),
        OutputFormat::Json => to_structured_document(txns, generated_at),
    }
}

/// `Date,Description,Amount,Type`, one row per transaction, amounts with two
/// decimals. Fields are quoted only when they contain a delimiter, quote or
/// line break.
pub fn to_csv(txns: &[Transaction]) -> Result<Vec<u8>, ConvertError> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;
    for t in txns {
        let amount = format!("{:.2}", t.amount);
        wtr.write_record([t.date.as_str(), t.description.as_str(), amount.as_str(), t.kind.as_str()])?;
    }

    wtr.into_inner()
        .map_err(|e| ConvertError::Csv(e.into_error().into()))
}

#[derive(Serialize)]
struct Document<'a> {
    converted_at: String,
    transaction_count: usize,
    summary: Summary,
    transactions: &'a [Transaction],
}

/// Pretty JSON document with generation time, count, summary and every
/// transaction field.
pub fn to_structured_document(
    txns: &[Transaction],
    generated_at: &DateTime<FixedOffset>,
) -> Result<Vec<u8>, ConvertError> {
    let doc = Document {
        converted_at: generated_at.to_rfc3339(),
        transaction_count: txns.len(),
        summary: Summary::from_transactions(txns),
        transactions: txns,
    };
    Ok(serde_json::to_vec_pretty(&doc)?)
}
