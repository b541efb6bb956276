//! Initial fixtures loaded at startup

use chrono::NaiveDate;

use crate::models::{Category, CategoryId, Money, Transaction};

/// The fixed category set, in display order
pub fn initial_categories() -> Vec<Category> {
    vec![
        Category::new("gym", "Gym", "🏋️", Money::from_cents(8_000)),
        Category::new("juegos", "Juegos", "🎮", Money::from_cents(6_000))
            .with_spent(Money::from_cents(6_000)),
        Category::new("ropa", "Ropa", "👕", Money::from_cents(60_000)),
        Category::new("portatil", "Portátil", "💻", Money::from_cents(60_000)),
        Category::new("comida", "Comida", "🍔", Money::from_cents(10_000)),
        Category::new("ocio", "Ocio", "🎉", Money::from_cents(6_000)),
        Category::new("reventa", "Reventa", "♻️", Money::from_cents(10_000)),
        Category::new("otros", "Otros", "❓", Money::from_cents(10_000))
            .with_spent(Money::from_cents(295)),
    ]
}

/// The fixed transaction set, newest first
pub fn initial_transactions() -> Vec<Transaction> {
    let date = NaiveDate::from_ymd_opt(2025, 12, 23).unwrap_or_default();
    let entry = |description: &str, category: &str, cents: i64| {
        Transaction::new(
            date,
            description,
            CategoryId::from(category),
            Money::from_cents(cents),
        )
    };

    vec![
        entry("Detroit: Become Human", "juegos", 399),
        entry("Cyberpunk 2077", "juegos", 2_099),
        entry("Red Dead Redemption 2", "juegos", 1_999),
        entry("The Witcher 3: Wild Hunt", "juegos", 299),
        entry("Grand Theft Auto V Enhanced (Part 1)", "juegos", 1_204),
        entry("Grand Theft Auto V Enhanced (Part 2)", "otros", 295),
    ]
}
