//! Layout definitions for the TUI
//!
//! The dashboard is a single screen: stat cards on top, charts, the category
//! list beside the advice panel, the transaction table and a status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard
pub struct DashboardLayout {
    /// Total / spent / remaining cards
    pub stats: Rect,
    /// Budget vs. spent bars
    pub comparison: Rect,
    /// Spending distribution
    pub distribution: Rect,
    /// Category list with progress
    pub categories: Rect,
    /// AI advice panel
    pub advice: Rect,
    /// Transaction table
    pub transactions: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl DashboardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),      // Stat cards
                Constraint::Length(10),     // Charts
                Constraint::Min(10),        // Categories + advice
                Constraint::Percentage(25), // Transactions
                Constraint::Length(1),      // Status bar
            ])
            .split(area);

        let cards = vertical[0];

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical[1]);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical[2]);

        Self {
            stats: cards,
            comparison: charts[0],
            distribution: charts[1],
            categories: middle[0],
            advice: middle[1],
            transactions: vertical[3],
            status_bar: vertical[4],
        }
    }
}

/// Split the stat strip into three equal cards
pub fn stat_cards(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
