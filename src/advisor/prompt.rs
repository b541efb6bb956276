//! Prompt construction for budget reviews

use std::fmt::Write;

use crate::models::{Category, Money};
use crate::reports::{category_status, CategoryStatus};

use super::snapshot::AdviceSnapshot;

/// Number of largest-budget categories named as big one-off purchases
const HIGH_TICKET_EXAMPLES: usize = 2;

/// Build the review prompt for a snapshot
pub fn build_prompt(snapshot: &AdviceSnapshot, reference_budget: Money) -> String {
    let mut prompt = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(prompt, "Analyze this student budget for \"TU BECA\":");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Categories:");
    for category in &snapshot.categories {
        let _ = writeln!(
            prompt,
            "{} {}: Budget {}, Spent {}",
            category.emoji, category.name, category.budget, category.spent
        );
    }

    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Recent Transactions:");
    if snapshot.recent_transactions.is_empty() {
        let _ = writeln!(prompt, "- (none)");
    }
    for txn in &snapshot.recent_transactions {
        let _ = writeln!(
            prompt,
            "- {}: {} ({})",
            txn.date.format("%Y-%m-%d"),
            txn.description,
            txn.amount
        );
    }

    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Total Budget: {}", reference_budget);
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Please provide:");
    let _ = writeln!(prompt, "1. A quick summary of the current financial health.");
    let _ = writeln!(
        prompt,
        "2. Specific advice on the categories where the budget is nearly or already exhausted{}.",
        examples(&exhausted_categories(&snapshot.categories))
    );
    let _ = writeln!(
        prompt,
        "3. Suggestions for the high-ticket items{}.",
        examples(&high_ticket_categories(&snapshot.categories))
    );
    let _ = writeln!(prompt, "4. An overall rating out of 10.");
    let _ = writeln!(prompt);
    let _ = write!(
        prompt,
        "Keep the tone professional yet encouraging for a student. Answer in Spanish."
    );

    prompt
}

/// Names of categories in the warning or exceeded band
fn exhausted_categories(categories: &[Category]) -> Vec<&str> {
    categories
        .iter()
        .filter(|c| category_status(c) != CategoryStatus::Ok)
        .map(|c| c.name.as_str())
        .collect()
}

/// Names of the categories with the largest budgets
fn high_ticket_categories(categories: &[Category]) -> Vec<&str> {
    let mut by_budget: Vec<&Category> = categories
        .iter()
        .filter(|c| c.budget.is_positive())
        .collect();
    // Stable sort keeps declaration order among equal budgets.
    by_budget.sort_by(|a, b| b.budget.cmp(&a.budget));
    by_budget
        .into_iter()
        .take(HIGH_TICKET_EXAMPLES)
        .map(|c| c.name.as_str())
        .collect()
}

fn examples(names: &[&str]) -> String {
    if names.is_empty() {
        return String::new();
    }
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    format!(" (like {})", quoted.join(" or "))
}
