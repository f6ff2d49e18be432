//! Category vocabulary
//!
//! Each transaction type has a fixed, ordered list of categories. The lists
//! drive defaults and display only: stored transactions may carry any
//! category string, including ones an imported file brought in.

use super::transaction::TransactionType;

/// Income categories, in display order
pub const INCOME_CATEGORIES: &[&str] = &["Salary", "Freelance", "Investment", "Bonus", "Other Income"];

/// Expense categories, in display order
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Shopping",
    "Entertainment",
    "Bills",
    "Healthcare",
    "Education",
    "Other",
];

/// The category list for a transaction type
pub fn categories_for(transaction_type: TransactionType) -> &'static [&'static str] {
    match transaction_type {
        TransactionType::Income => INCOME_CATEGORIES,
        TransactionType::Expense => EXPENSE_CATEGORIES,
    }
}

/// The category a draft falls back to when its type changes or none is given
pub fn default_category(transaction_type: TransactionType) -> &'static str {
    categories_for(transaction_type)[0]
}

/// Whether `category` belongs to the vocabulary of `transaction_type`
pub fn is_known_category(transaction_type: TransactionType, category: &str) -> bool {
    categories_for(transaction_type).contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_first_entries() {
        assert_eq!(default_category(TransactionType::Income), "Salary");
        assert_eq!(default_category(TransactionType::Expense), "Food");
    }

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(categories_for(TransactionType::Income).len(), 5);
        assert_eq!(categories_for(TransactionType::Expense).len(), 8);
    }

    #[test]
    fn test_known_category_is_type_specific() {
        assert!(is_known_category(TransactionType::Expense, "Bills"));
        assert!(!is_known_category(TransactionType::Income, "Bills"));
        assert!(!is_known_category(TransactionType::Expense, "Crypto"));
    }
}
