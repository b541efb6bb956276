//! Category display formatting

use crate::models::Category;
use crate::reports::CategoryProgress;

use super::report::{fit, format_bar, format_percentage};

const NAME_WIDTH: usize = 14;
const BAR_WIDTH: usize = 10;

/// "spent / budget" pair shown next to a category
pub fn format_spent_of_budget(category: &Category) -> String {
    format!("{} / {}", category.spent, category.budget)
}

/// "Quedan: X" label for the budget left in a category
pub fn format_remaining(category: &Category) -> String {
    format!("Quedan: {}", CategoryProgress::of(category).remaining)
}

/// One line per category: label, bar, spent/budget, usage, remaining and status
pub fn format_category_row(category: &Category) -> String {
    let progress = CategoryProgress::of(category);
    format!(
        "{} {} {:>20} {:>5}  {:<17}  {}",
        fit(&category.to_string(), NAME_WIDTH),
        format_bar(progress.percentage, 100.0, BAR_WIDTH),
        format_spent_of_budget(category),
        format_percentage(progress.percentage),
        format_remaining(category),
        progress.status
    )
}

/// Format all categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No hay categorías.\n".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(&format_category_row(category));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_category_row() {
        let juegos = Category::new("juegos", "Juegos", "🎮", Money::from_cents(6_000))
            .with_spent(Money::from_cents(6_000));
        let row = format_category_row(&juegos);
        assert!(row.contains("🎮 Juegos"));
        assert!(row.contains("60.00€ / 60.00€"));
        assert!(row.contains("100%"));
        assert!(row.contains("Quedan: 0.00€"));
        assert!(row.ends_with("Agotado"));
    }

    #[test]
    fn test_row_shows_remaining_budget() {
        let otros = Category::new("otros", "Otros", "📦", Money::from_cents(10_000))
            .with_spent(Money::from_cents(295));
        assert_eq!(format_remaining(&otros), "Quedan: 97.05€");
        assert!(format_category_row(&otros).contains("Quedan: 97.05€"));

        let over = Category::new("ocio", "Ocio", "🎉", Money::from_cents(1_000))
            .with_spent(Money::from_cents(1_250));
        assert_eq!(format_remaining(&over), "Quedan: -2.50€");
    }

    #[test]
    fn test_zero_budget_row() {
        let empty = Category::new("x", "Nada", "❓", Money::zero());
        let row = format_category_row(&empty);
        assert!(row.contains("0%"));
        assert!(row.ends_with("OK"));
    }

    #[test]
    fn test_empty_list() {
        assert!(format_category_list(&[]).contains("No hay categorías"));
    }
}
