//! Aggregate budget statistics
//!
//! Totals shown on the dashboard's stat cards. Always derived from the
//! current categories and transactions, never stored.

use serde::Serialize;

use crate::models::{Category, Money, Transaction};

/// Totals across the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Sum of all category budgets
    pub total_budget: Money,
    /// Sum of all transaction amounts
    pub total_spent: Money,
    /// `total_budget - total_spent`
    pub total_remaining: Money,
}

impl Stats {
    /// Compute the totals for a set of categories and transactions
    pub fn compute(categories: &[Category], transactions: &[Transaction]) -> Self {
        let total_budget: Money = categories.iter().map(|c| c.budget).sum();
        let total_spent: Money = transactions.iter().map(|t| t.amount).sum();

        Self {
            total_budget,
            total_spent,
            total_remaining: total_budget - total_spent,
        }
    }

    /// Share of the total budget still available, in percent
    ///
    /// Zero when there is no budget at all.
    pub fn remaining_percentage(&self) -> f64 {
        self.total_remaining
            .percentage_of(self.total_budget)
            .unwrap_or(0.0)
    }

    /// Share of the total budget already spent, in percent
    pub fn spent_percentage(&self) -> f64 {
        self.total_spent
            .percentage_of(self.total_budget)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;
    use chrono::NaiveDate;

    fn txn(cat: &str, cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 12, 23).unwrap(),
            "test",
            CategoryId::from(cat),
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_compute_totals() {
        let categories = vec![
            Category::new("a", "A", "🅰️", Money::from_cents(10000)),
            Category::new("b", "B", "🅱️", Money::from_cents(5000)),
        ];
        let transactions = vec![txn("a", 2500), txn("b", 1000), txn("a", 500)];

        let stats = Stats::compute(&categories, &transactions);
        assert_eq!(stats.total_budget, Money::from_cents(15000));
        assert_eq!(stats.total_spent, Money::from_cents(4000));
        assert_eq!(stats.total_remaining, Money::from_cents(11000));
        assert!((stats.spent_percentage() - 26.666).abs() < 0.01);
    }

    #[test]
    fn test_empty_ledger() {
        let stats = Stats::compute(&[], &[]);
        assert!(stats.total_budget.is_zero());
        assert_eq!(stats.remaining_percentage(), 0.0);
        assert_eq!(stats.spent_percentage(), 0.0);
    }

    #[test]
    fn test_overspent_total_goes_negative() {
        let categories = vec![Category::new("a", "A", "🅰️", Money::from_cents(1000))];
        let stats = Stats::compute(&categories, &[txn("a", 1500)]);
        assert_eq!(stats.total_remaining, Money::from_cents(-500));
        assert_eq!(stats.remaining_percentage(), -50.0);
    }
}
