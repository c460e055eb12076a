//! stmtconv-ingest: statement text → transactions (format detection, line parsing,
//! classification, conversion and CSV/JSON rendering).

pub mod classify;
pub mod convert;
pub mod detect;
pub mod error;
pub mod parsers;
pub mod profiles;
pub mod render;
pub mod types;

pub use classify::classify;
pub use convert::{convert, convert_as};
pub use detect::detect_format;
pub use error::ConvertError;
pub use parsers::{parse_line, parse_line_with};
pub use profiles::{profile_for, FormatProfile};
pub use render::{render, to_csv, to_structured_document, OutputFormat};
pub use types::{ConversionResult, ProvisionalTransaction, Summary, Transaction, TransactionKind};
