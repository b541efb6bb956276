//! Transaction table, newest first

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{category_label, transaction::DATE_FORMAT};
use crate::tui::app::{App, FocusedPanel};

/// Render the transaction table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Transactions;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let transactions = app.ledger.transactions();
    let block = Block::default()
        .title(format!(" Últimos gastos ({}) ", transactions.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if transactions.is_empty() {
        let text = Paragraph::new("No hay gastos. Pulsa 'a' para añadir uno.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Min(20),    // Description
        Constraint::Length(16), // Category
        Constraint::Length(12), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Fecha").style(bold),
        Cell::from("Descripción").style(bold),
        Cell::from("Categoría").style(bold),
        Cell::from("Importe").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            let category = app.ledger.category(&txn.category_id);
            Row::new(vec![
                Cell::from(txn.date.format(DATE_FORMAT).to_string()),
                Cell::from(txn.description.clone()),
                Cell::from(category_label(txn, category)),
                Cell::from(format!("-{}", txn.amount)).style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.selected_transaction_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
