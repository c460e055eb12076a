//! Income/expense decision and sign normalization.

use crate::types::{ProvisionalTransaction, Transaction, TransactionKind};

/// Income when the line carries any positive signal: a literal `+`, the word
/// "credit" (any case), or a negative parsed amount. Expense otherwise.
/// The stored amount is always the magnitude.
pub fn classify(raw: ProvisionalTransaction, line: &str) -> Transaction {
    let income = line.contains('+')
        || line.to_lowercase().contains("credit")
        || raw.raw_amount < 0.0;

    Transaction {
        date: raw.date,
        description: raw.description,
        amount: raw.raw_amount.abs(),
        kind: if income { TransactionKind::Income } else { TransactionKind::Expense },
        source_line: raw.source_line,
    }
}
