//! Read-only ledger state handed to the advice client

use serde::Serialize;

use crate::ledger::Ledger;
use crate::models::{Category, Transaction};

/// How many recent transactions are quoted in the prompt
pub const RECENT_TRANSACTIONS: usize = 5;

/// Owned copy of what the advice prompt needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceSnapshot {
    /// Every category, in display order
    pub categories: Vec<Category>,
    /// The most recent transactions, newest first
    pub recent_transactions: Vec<Transaction>,
}

impl AdviceSnapshot {
    /// Capture categories and the most recent transactions from a ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self::new(
            ledger.categories(),
            ledger.recent_transactions(RECENT_TRANSACTIONS),
        )
    }

    /// Build a snapshot from categories and the transactions to quote, as given
    pub fn new(categories: &[Category], recent_transactions: &[Transaction]) -> Self {
        Self {
            categories: categories.to_vec(),
            recent_transactions: recent_transactions.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money};

    #[test]
    fn test_snapshot_takes_newest_five() {
        let mut ledger = Ledger::seeded().unwrap();
        ledger
            .record_expense("Coffee", &CategoryId::from("comida"), Money::from_cents(350))
            .unwrap();

        let snapshot = AdviceSnapshot::from_ledger(&ledger);
        assert_eq!(snapshot.categories.len(), 8);
        assert_eq!(snapshot.recent_transactions.len(), RECENT_TRANSACTIONS);
        assert_eq!(snapshot.recent_transactions[0].description, "Coffee");
        assert_eq!(
            snapshot.recent_transactions.as_slice(),
            ledger.recent_transactions(RECENT_TRANSACTIONS)
        );
        assert_eq!(
            snapshot.recent_transactions.as_slice(),
            &ledger.transactions()[..RECENT_TRANSACTIONS]
        );
    }

    #[test]
    fn test_snapshot_with_few_transactions() {
        let snapshot = AdviceSnapshot::new(&[], &[]);
        assert!(snapshot.recent_transactions.is_empty());
    }
}
