//! Category chart projections
//!
//! Two views of the category list: the spending distribution (only
//! categories with spending) and the budget comparison (every category).

use serde::Serialize;

use crate::models::{Category, CategoryId, Money};

/// One category's slice of the charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub category_id: CategoryId,
    pub name: String,
    pub spent: Money,
    pub budget: Money,
}

impl BreakdownEntry {
    fn from_category(category: &Category) -> Self {
        Self {
            category_id: category.id.clone(),
            name: category.name.clone(),
            spent: category.spent,
            budget: category.budget,
        }
    }

    /// This entry's share of `total` spending, in percent
    pub fn share_of(&self, total: Money) -> f64 {
        self.spent.percentage_of(total).unwrap_or(0.0)
    }
}

/// Spending distribution: categories with spending, in declaration order
pub fn category_breakdown(categories: &[Category]) -> Vec<BreakdownEntry> {
    categories
        .iter()
        .filter(|c| !c.spent.is_zero())
        .map(BreakdownEntry::from_category)
        .collect()
}

/// Budget against spending for every category, in declaration order
pub fn budget_comparison(categories: &[Category]) -> Vec<BreakdownEntry> {
    categories.iter().map(BreakdownEntry::from_category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category::new("gym", "Gym", "🏋️", Money::from_cents(8000)),
            Category::new("juegos", "Juegos", "🎮", Money::from_cents(6000))
                .with_spent(Money::from_cents(6000)),
            Category::new("comida", "Comida", "🍔", Money::from_cents(10000)),
            Category::new("otros", "Otros", "❓", Money::from_cents(10000))
                .with_spent(Money::from_cents(295)),
        ]
    }

    #[test]
    fn test_breakdown_skips_unspent_categories() {
        let entries = category_breakdown(&categories());
        let ids: Vec<_> = entries.iter().map(|e| e.category_id.as_str()).collect();
        assert_eq!(ids, vec!["juegos", "otros"]);
        assert_eq!(entries[0].spent, Money::from_cents(6000));
        assert_eq!(entries[0].budget, Money::from_cents(6000));
    }

    #[test]
    fn test_comparison_keeps_everything() {
        let entries = budget_comparison(&categories());
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].name, "Gym");
        assert!(entries[0].spent.is_zero());
    }

    #[test]
    fn test_share_of_total() {
        let entries = category_breakdown(&categories());
        let total: Money = entries.iter().map(|e| e.spent).sum();
        let shares: f64 = entries.iter().map(|e| e.share_of(total)).sum();
        assert!((shares - 100.0).abs() < 1e-9);
        assert_eq!(entries[0].share_of(Money::zero()), 0.0);
    }
}
