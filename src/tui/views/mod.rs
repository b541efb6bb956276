//! TUI Views module
//!
//! The dashboard panels: stat cards, charts, category list, advice panel,
//! transaction table and status bar.

pub mod advice;
pub mod categories;
pub mod charts;
pub mod status_bar;
pub mod summary;
pub mod transactions;

use ratatui::{style::Color, Frame};

use crate::reports::CategoryStatus;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::DashboardLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = DashboardLayout::new(frame.area());

    summary::render(frame, app, layout.stats);
    charts::render_comparison(frame, app, layout.comparison);
    charts::render_distribution(frame, app, layout.distribution);
    categories::render(frame, app, layout.categories);
    advice::render(frame, app, layout.advice);
    transactions::render(frame, app, layout.transactions);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Colour used for a category's bar and status label
pub fn status_color(status: CategoryStatus) -> Color {
    match status {
        CategoryStatus::Ok => Color::Green,
        CategoryStatus::Warning => Color::Yellow,
        CategoryStatus::Exceeded => Color::Red,
    }
}
