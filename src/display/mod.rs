//! Display formatting for terminal output
//!
//! Plain-text renderings of the ledger used by `beca --summary`, plus the
//! small formatting helpers the dashboard shares.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::{
    format_category_list, format_category_row, format_remaining, format_spent_of_budget,
};
pub use report::{fit, format_bar, format_percentage, format_remaining_share, separator};
pub use transaction::{category_label, format_transaction_register, format_transaction_row};

use crate::advisor::RECENT_TRANSACTIONS;
use crate::ledger::Ledger;

/// Plain-text dashboard: totals, categories and recent transactions
pub fn format_summary(ledger: &Ledger) -> String {
    let stats = ledger.stats();
    let mut output = String::new();

    output.push_str("TU BECA\n");
    output.push_str(&separator(69));
    output.push('\n');
    output.push_str(&format!("Presupuesto total: {}\n", stats.total_budget));
    output.push_str(&format!("Gastado:           {}\n", stats.total_spent));
    output.push_str(&format!(
        "Restante:          {} ({})\n",
        stats.total_remaining,
        format_remaining_share(&stats)
    ));

    output.push_str("\nCategorías\n");
    output.push_str(&format_category_list(ledger.categories()));

    output.push_str("\nÚltimos gastos\n");
    output.push_str(&format_transaction_register(
        ledger.recent_transactions(RECENT_TRANSACTIONS),
        |txn| ledger.category(&txn.category_id),
    ));

    output
}
