//! Transaction model
//!
//! A transaction is one recorded income or expense event. The direction is
//! carried by [`TransactionType`]; the stored amount is always positive.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::default_category;
use super::ids::TransactionId;
use super::money::{Money, MoneyParseError};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    /// New drafts start as expenses
    #[default]
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "unknown transaction type '{}' (expected 'income' or 'expense')",
                other
            )),
        }
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, never reassigned
    pub id: TransactionId,

    /// Display title
    pub title: String,

    /// Strictly positive amount
    pub amount: Money,

    /// Income or expense
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// Category name; not checked against the vocabulary
    #[serde(default)]
    pub category: String,

    /// Calendar date
    pub date: NaiveDate,
}

impl Transaction {
    /// Build a transaction from a draft, validating it first
    pub fn from_draft(
        id: TransactionId,
        draft: TransactionDraft,
        today: NaiveDate,
    ) -> Result<Self, TransactionValidationError> {
        let amount = draft.parsed_amount()?;
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(TransactionValidationError::EmptyTitle);
        }

        let category = match draft.category {
            Some(category) if !category.trim().is_empty() => category.trim().to_string(),
            _ => default_category(draft.transaction_type).to_string(),
        };

        Ok(Self {
            id,
            title,
            amount,
            transaction_type: draft.transaction_type,
            category,
            date: draft.date.unwrap_or(today),
        })
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Signed effect on the balance
    pub fn signed_amount(&self) -> Money {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Check the stored-form invariants
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.title.trim().is_empty() {
            return Err(TransactionValidationError::EmptyTitle);
        }
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.signed_amount()
        )
    }
}

/// Unvalidated user input for creating or editing a transaction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionDraft {
    pub title: String,
    /// Raw amount text as entered
    pub amount: String,
    pub transaction_type: TransactionType,
    /// Falls back to the type's default category when `None`
    pub category: Option<String>,
    /// Falls back to today when `None`
    pub date: Option<NaiveDate>,
}

impl TransactionDraft {
    pub fn new(
        title: impl Into<String>,
        amount: impl Into<String>,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
            transaction_type,
            category: None,
            date: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Pre-fill a draft from a stored transaction for editing
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            title: txn.title.clone(),
            amount: txn.amount.format_plain(),
            transaction_type: txn.transaction_type,
            category: Some(txn.category.clone()),
            date: Some(txn.date),
        }
    }

    /// Switch the type, resetting the category to the new type's default
    pub fn set_type(&mut self, transaction_type: TransactionType) {
        if self.transaction_type != transaction_type {
            self.transaction_type = transaction_type;
            self.category = Some(default_category(transaction_type).to_string());
        }
    }

    /// Parse the amount text, requiring a positive value
    pub fn parsed_amount(&self) -> Result<Money, TransactionValidationError> {
        if self.amount.trim().is_empty() {
            return Err(TransactionValidationError::MissingAmount);
        }
        let amount = Money::parse(&self.amount).map_err(TransactionValidationError::InvalidAmount)?;
        if !amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(amount));
        }
        Ok(amount)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyTitle,
    MissingAmount,
    InvalidAmount(MoneyParseError),
    NonPositiveAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Title cannot be empty"),
            Self::MissingAmount => write!(f, "Amount is required"),
            Self::InvalidAmount(e) => write!(f, "{}", e),
            Self::NonPositiveAmount(amount) => {
                write!(
                    f,
                    "Amount must be at least 0.01 after rounding to the cent (got {})",
                    amount
                )
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
