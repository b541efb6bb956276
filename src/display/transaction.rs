//! Transaction display formatting
//!
//! Register rows for the plain-text summary and the dashboard table.

use crate::models::{Category, Transaction};

use super::report::{fit, separator};

/// Dates are shown day first
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Label for a transaction's category, falling back to the raw id
pub fn category_label(txn: &Transaction, category: Option<&Category>) -> String {
    match category {
        Some(c) => c.to_string(),
        None => txn.category_id.to_string(),
    }
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, category: Option<&Category>) -> String {
    format!(
        "{} {} {} {:>10}",
        txn.date.format(DATE_FORMAT),
        fit(&txn.description, 32),
        fit(&category_label(txn, category), 14),
        format!("-{}", txn.amount)
    )
}

/// Format transactions as a register, resolving categories through `lookup`
pub fn format_transaction_register<'a, F>(transactions: &[Transaction], lookup: F) -> String
where
    F: Fn(&Transaction) -> Option<&'a Category>,
{
    if transactions.is_empty() {
        return "No hay gastos registrados.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {} {} {:>10}\n",
        "Fecha",
        fit("Descripción", 32),
        fit("Categoría", 14),
        "Importe"
    ));
    output.push_str(&separator(69));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, lookup(txn)));
        output.push('\n');
    }

    output
}
