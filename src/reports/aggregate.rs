//! Aggregate derivations over a transaction snapshot
//!
//! Everything here is a pure function of `&[Transaction]` (plus the budget
//! where needed). Results are plain `Serialize` data that a charting layer
//! can consume directly. All sums are exact integer-cent arithmetic.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Money, Transaction, TransactionType};

/// Income, expense and balance totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
    /// Always `income - expenses`
    pub balance: Money,
}

/// Sum income and expense amounts
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = Money::zero();
    let mut expenses = Money::zero();

    for txn in transactions {
        match txn.transaction_type {
            TransactionType::Income => income += txn.amount,
            TransactionType::Expense => expenses += txn.amount,
        }
    }

    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// A calendar month; orders chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Short chart label, e.g. "Jan 2024"
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%b %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One entry of the monthly income/expense series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub month: MonthKey,
    pub income: Money,
    pub expenses: Money,
}

/// Group by calendar month. Only months with at least one transaction
/// appear; a month with no income (or no expenses) reports zero there.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyPoint> {
    let mut by_month: BTreeMap<MonthKey, (Money, Money)> = BTreeMap::new();

    for txn in transactions {
        let entry = by_month.entry(MonthKey::of(txn.date)).or_default();
        match txn.transaction_type {
            TransactionType::Income => entry.0 += txn.amount,
            TransactionType::Expense => entry.1 += txn.amount,
        }
    }

    by_month
        .into_iter()
        .map(|(month, (income, expenses))| MonthlyPoint {
            month,
            income,
            expenses,
        })
        .collect()
}

/// Expense totals keyed by whatever category strings appear
pub fn category_breakdown(transactions: &[Transaction]) -> BTreeMap<String, Money> {
    let mut breakdown: BTreeMap<String, Money> = BTreeMap::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        *breakdown.entry(txn.category.clone()).or_default() += txn.amount;
    }

    breakdown
}

/// Budget consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetUsage {
    pub budget: Money,
    pub spent: Money,
    /// Never negative, even when over budget
    pub remaining: Money,
}

impl BudgetUsage {
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }

    /// Percentage of the budget spent; `None` for a zero budget
    pub fn percent_used(&self) -> Option<f64> {
        if self.budget.is_zero() {
            None
        } else {
            Some(self.spent.cents() as f64 / self.budget.cents() as f64 * 100.0)
        }
    }
}

pub fn budget_usage(monthly_budget: Money, total_expenses: Money) -> BudgetUsage {
    BudgetUsage {
        budget: monthly_budget,
        spent: total_expenses,
        remaining: (monthly_budget - total_expenses).max_zero(),
    }
}

/// Everything the dashboard shows, recomputed after each mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub totals: Totals,
    pub income_count: usize,
    pub expense_count: usize,
    pub monthly: Vec<MonthlyPoint>,
    pub categories: BTreeMap<String, Money>,
    pub budget: BudgetUsage,
}

impl Summary {
    pub fn compute(transactions: &[Transaction], monthly_budget: Money) -> Self {
        let totals = totals(transactions);
        let income_count = transactions.iter().filter(|t| t.is_income()).count();

        Self {
            totals,
            income_count,
            expense_count: transactions.len() - income_count,
            monthly: monthly_series(transactions),
            categories: category_breakdown(transactions),
            budget: budget_usage(monthly_budget, totals.expenses),
        }
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::compute(&[], Money::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionDraft, TransactionId};

    fn txn(title: &str, amount: &str, kind: TransactionType, category: &str, date: &str) -> Transaction {
        Transaction::from_draft(
            TransactionId::new(),
            TransactionDraft::new(title, amount, kind)
                .with_category(category)
                .with_date(date.parse().unwrap()),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        )
        .unwrap()
    }

    fn scenario() -> Vec<Transaction> {
        vec![
            txn("Groceries", "150", TransactionType::Expense, "Food", "2024-01-06"),
            txn("Salary", "3000", TransactionType::Income, "Salary", "2024-01-05"),
        ]
    }

    #[test]
    fn test_salary_and_groceries_scenario() {
        let txns = scenario();

        let t = totals(&txns);
        assert_eq!(t.income, Money::from_units(3000));
        assert_eq!(t.expenses, Money::from_units(150));
        assert_eq!(t.balance, Money::from_units(2850));

        let breakdown = category_breakdown(&txns);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown["Food"], Money::from_units(150));

        let series = monthly_series(&txns);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].month.to_string(), "2024-01");
        assert_eq!(series[0].income, Money::from_units(3000));
        assert_eq!(series[0].expenses, Money::from_units(150));
    }

    #[test]
    fn test_empty_snapshot() {
        let t = totals(&[]);
        assert_eq!(t, Totals::default());
        assert!(monthly_series(&[]).is_empty());
        assert!(category_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_balance_is_exact_over_many_entries() {
        let mut txns = Vec::new();
        for i in 0..500 {
            txns.push(txn("Coffee", "0.10", TransactionType::Expense, "Food", "2024-02-01"));
            if i % 5 == 0 {
                txns.push(txn("Tip", "0.30", TransactionType::Income, "Other Income", "2024-02-01"));
            }
        }

        let t = totals(&txns);
        assert_eq!(t.expenses, Money::from_units(50));
        assert_eq!(t.income, Money::from_units(30));
        assert_eq!(t.balance, t.income - t.expenses);
        assert_eq!(t.balance, Money::from_units(-20));
    }

    #[test]
    fn test_monthly_series_sorted_and_zero_filled() {
        let txns = vec![
            txn("Rent", "900", TransactionType::Expense, "Bills", "2024-03-01"),
            txn("Bonus", "500", TransactionType::Income, "Bonus", "2023-12-20"),
            txn("Gift", "40", TransactionType::Expense, "Shopping", "2024-01-15"),
            txn("Pay", "2000", TransactionType::Income, "Salary", "2024-01-31"),
        ];

        let series = monthly_series(&txns);
        let months: Vec<String> = series.iter().map(|p| p.month.to_string()).collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-03"]);

        assert_eq!(series[0].expenses, Money::zero());
        assert_eq!(series[2].income, Money::zero());
        assert_eq!(series[1].income, Money::from_units(2000));
        assert_eq!(series[1].expenses, Money::from_units(40));
    }

    #[test]
    fn test_breakdown_keeps_unknown_categories_and_skips_income() {
        let txns = vec![
            txn("Mystery", "12", TransactionType::Expense, "Crypto", "2024-01-01"),
            txn("Mystery 2", "8", TransactionType::Expense, "Crypto", "2024-02-01"),
            txn("Salary", "100", TransactionType::Income, "Salary", "2024-01-01"),
        ];

        let breakdown = category_breakdown(&txns);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown["Crypto"], Money::from_units(20));
    }

    #[test]
    fn test_budget_usage_never_negative() {
        let usage = budget_usage(Money::from_units(100), Money::from_units(250));
        assert_eq!(usage.spent, Money::from_units(250));
        assert_eq!(usage.remaining, Money::zero());
        assert!(usage.is_over_budget());

        let usage = budget_usage(Money::from_units(200), Money::from_units(50));
        assert_eq!(usage.remaining, Money::from_units(150));
        assert_eq!(usage.percent_used(), Some(25.0));

        assert_eq!(budget_usage(Money::zero(), Money::from_units(1)).percent_used(), None);
    }

    #[test]
    fn test_summary_counts() {
        let summary = Summary::compute(&scenario(), Money::from_units(5000));
        assert_eq!(summary.income_count, 1);
        assert_eq!(summary.expense_count, 1);
        assert_eq!(summary.budget.remaining, Money::from_units(4850));
    }

    #[test]
    fn test_month_key_label_and_serialization() {
        let key = MonthKey::of(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(key.label(), "Jan 2024");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-01\"");
    }
}
