//! Display filters over a transaction snapshot
//!
//! A filter key is `"all"`, a transaction type (`"income"` / `"expense"`),
//! or anything else, which is matched against the category exactly.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::models::{Transaction, TransactionType};

/// Parsed form of a filter key
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TransactionFilter {
    #[default]
    All,
    Type(TransactionType),
    Category(String),
}

impl TransactionFilter {
    /// Interpret a filter key. Never fails: unknown keys are categories.
    pub fn from_key(key: &str) -> Self {
        match key {
            "all" => Self::All,
            "income" => Self::Type(TransactionType::Income),
            "expense" => Self::Type(TransactionType::Expense),
            other => Self::Category(other.to_string()),
        }
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Type(kind) => txn.transaction_type == *kind,
            Self::Category(category) => txn.category == *category,
        }
    }

    /// Keep matching transactions, preserving input order
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }
}

impl FromStr for TransactionFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key(s))
    }
}

impl fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Type(kind) => write!(f, "{}", kind),
            Self::Category(category) => f.write_str(category),
        }
    }
}

/// Filter a snapshot by a raw filter key
pub fn apply(transactions: &[Transaction], filter_key: &str) -> Vec<Transaction> {
    TransactionFilter::from_key(filter_key).apply(transactions)
}
