//! Category list with progress and status

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::display::{format_bar, format_percentage, format_remaining, format_spent_of_budget};
use crate::reports::CategoryProgress;
use crate::tui::app::{App, FocusedPanel};

use super::status_color;

/// Render the category table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Categories;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Categorías ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let widths = [
        Constraint::Length(14), // Category
        Constraint::Length(8),  // Bar
        Constraint::Length(16), // Spent / budget
        Constraint::Length(6),  // Percentage
        Constraint::Length(15), // Remaining
        Constraint::Min(8),     // Status
    ];

    let rows: Vec<Row> = app
        .ledger
        .categories()
        .iter()
        .map(|category| {
            let progress = CategoryProgress::of(category);
            let color = status_color(progress.status);

            Row::new(vec![
                Cell::from(category.to_string()),
                Cell::from(format_bar(progress.percentage, 100.0, 8))
                    .style(Style::default().fg(color)),
                Cell::from(format_spent_of_budget(category)),
                Cell::from(format_percentage(progress.percentage)),
                Cell::from(format_remaining(category)),
                Cell::from(progress.status.to_string()).style(Style::default().fg(color)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.selected_category_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
