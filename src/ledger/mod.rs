//! The budget ledger
//!
//! Holds the category list (display order) and the transaction list (newest
//! first). Recording an expense is the only mutation, and it updates both
//! lists in a single call so a category's `spent` always equals the sum of
//! its transactions.

pub mod expense;
pub mod seed;

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::error::{BecaError, BecaResult};
use crate::models::{Category, CategoryId, Money, Transaction, TransactionId};
use crate::reports::Stats;

pub use expense::{ExpenseForm, ExpenseInput};

/// In-memory categories and transactions for one session
#[derive(Debug, Clone)]
pub struct Ledger {
    categories: Vec<Category>,
    transactions: Vec<Transaction>,
    /// Bumped on every successful mutation
    version: u64,
    stats_cache: Cell<Option<(u64, Stats)>>,
}

impl Ledger {
    /// Build a ledger from existing categories and transactions
    ///
    /// Fails if a category or transaction is invalid, a category id is used
    /// twice, a transaction points at an unknown category, or a category's
    /// `spent` does not match the sum of its transactions.
    pub fn new(categories: Vec<Category>, transactions: Vec<Transaction>) -> BecaResult<Self> {
        let mut seen = HashSet::new();
        for category in &categories {
            category
                .validate()
                .map_err(|e| BecaError::Validation(format!("{}: {}", category.id, e)))?;
            if !seen.insert(category.id.clone()) {
                return Err(BecaError::duplicate_category(category.id.as_str()));
            }
        }

        categories
            .iter()
            .try_fold(Money::zero(), |acc, c| acc.checked_add(c.budget))
            .ok_or_else(|| BecaError::Validation("Total budget is too large".into()))?;

        let mut total_spent = Money::zero();
        let mut sums: HashMap<&CategoryId, Money> = HashMap::new();
        for txn in &transactions {
            txn.validate()
                .map_err(|e| BecaError::Validation(format!("{}: {}", txn.id, e)))?;
            if !seen.contains(&txn.category_id) {
                return Err(BecaError::category_not_found(txn.category_id.as_str()));
            }
            let sum = sums.entry(&txn.category_id).or_default();
            *sum = sum.checked_add(txn.amount).ok_or_else(|| {
                BecaError::Validation(format!("Spending in '{}' is too large", txn.category_id))
            })?;
            total_spent = total_spent.checked_add(txn.amount).ok_or_else(|| {
                BecaError::Validation("Total spending is too large".into())
            })?;
        }

        for category in &categories {
            let sum = sums.get(&category.id).copied().unwrap_or_default();
            if sum != category.spent {
                return Err(BecaError::Validation(format!(
                    "Category '{}' records {} spent but its transactions sum to {}",
                    category.id, category.spent, sum
                )));
            }
        }

        debug!(
            categories = categories.len(),
            transactions = transactions.len(),
            "ledger loaded"
        );

        Ok(Self {
            categories,
            transactions,
            version: 0,
            stats_cache: Cell::new(None),
        })
    }

    /// A ledger populated with the startup fixtures
    pub fn seeded() -> BecaResult<Self> {
        Self::new(seed::initial_categories(), seed::initial_transactions())
    }

    /// Categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up a category by id
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// The `n` most recent transactions
    pub fn recent_transactions(&self, n: usize) -> &[Transaction] {
        &self.transactions[..n.min(self.transactions.len())]
    }

    /// Transactions charged to one category, newest first
    pub fn transactions_for<'a>(
        &'a self,
        id: &'a CategoryId,
    ) -> impl Iterator<Item = &'a Transaction> + 'a {
        self.transactions.iter().filter(move |t| &t.category_id == id)
    }

    /// Monotonic counter of applied mutations
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Aggregate totals, recomputed only after a mutation
    pub fn stats(&self) -> Stats {
        if let Some((version, stats)) = self.stats_cache.get() {
            if version == self.version {
                return stats;
            }
        }

        let stats = Stats::compute(&self.categories, &self.transactions);
        self.stats_cache.set(Some((self.version, stats)));
        stats
    }

    /// Record an expense dated today
    pub fn record_expense(
        &mut self,
        description: &str,
        category_id: &CategoryId,
        amount: Money,
    ) -> BecaResult<TransactionId> {
        self.record_expense_on(Local::now().date_naive(), description, category_id, amount)
    }

    /// Record an expense with an explicit date
    ///
    /// On error nothing is changed.
    pub fn record_expense_on(
        &mut self,
        date: NaiveDate,
        description: &str,
        category_id: &CategoryId,
        amount: Money,
    ) -> BecaResult<TransactionId> {
        let result = self.check_expense(description, category_id, amount);
        let index = match result {
            Ok(index) => index,
            Err(err) => {
                warn!(category = %category_id, %amount, error = %err, "expense rejected");
                return Err(err);
            }
        };

        let txn = Transaction::new(date, description.trim(), category_id.clone(), amount);
        let id = txn.id;

        self.categories[index].spent += amount;
        self.transactions.insert(0, txn);
        self.version += 1;

        info!(%id, category = %category_id, %amount, "expense recorded");
        Ok(id)
    }

    /// Parse a raw form submission and record it dated today
    pub fn submit(&mut self, form: &ExpenseForm) -> BecaResult<TransactionId> {
        let input = form.parse().map_err(|err| {
            warn!(error = %err, "expense form rejected");
            err
        })?;
        self.record_expense(&input.description, &input.category_id, input.amount)
    }

    /// Validate an expense and return the index of its category
    fn check_expense(
        &self,
        description: &str,
        category_id: &CategoryId,
        amount: Money,
    ) -> BecaResult<usize> {
        if description.trim().is_empty() {
            return Err(BecaError::Validation("Description cannot be empty".into()));
        }

        if !amount.is_positive() {
            return Err(BecaError::Validation(format!(
                "Amount must be greater than zero (got {})",
                amount
            )));
        }

        let index = self
            .categories
            .iter()
            .position(|c| &c.id == category_id)
            .ok_or_else(|| BecaError::category_not_found(category_id.as_str()))?;

        let fits = self.categories[index].spent.checked_add(amount).is_some()
            && self.stats().total_spent.checked_add(amount).is_some();
        if !fits {
            return Err(BecaError::Validation(format!("Amount {} is too large", amount)));
        }

        Ok(index)
    }
}
