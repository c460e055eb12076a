use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

/// Output of the line parser, before the income/expense decision.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvisionalTransaction {
    /// Date exactly as written on the statement line
    pub date: String,
    pub description: String,
    /// Parsed amount, sign untouched
    pub raw_amount: f64,
    pub source_line: String,
}

/// Normalized output of the classifier (bank-agnostic)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Source-format date string; not converted to a calendar type.
    pub date: String,
    pub description: String,
    /// Always >= 0. Direction lives in `kind`.
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(rename = "raw_line")]
    pub source_line: String,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// Totals derived from one transaction sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub total_income: f64,
    pub total_expense: f64,
    pub net: f64,
    /// Date of the first transaction in input order (not the earliest date)
    pub first_date: Option<String>,
    /// Date of the last transaction in input order
    pub last_date: Option<String>,
}

impl Summary {
    pub fn from_transactions(txns: &[Transaction]) -> Self {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        for t in txns {
            match t.kind {
                TransactionKind::Income => total_income += t.amount,
                TransactionKind::Expense => total_expense += t.amount,
            }
        }

        Self {
            count: txns.len(),
            total_income,
            total_expense,
            net: total_income - total_expense,
            first_date: txns.first().map(|t| t.date.clone()),
            last_date: txns.last().map(|t| t.date.clone()),
        }
    }
}

/// Everything one `convert` call produces. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Format id the lines were parsed with
    pub format: String,
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
}
