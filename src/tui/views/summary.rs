//! Stat cards: total budget, spent and remaining

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::{format_percentage, format_remaining_share};
use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::stat_cards;

/// Render the three stat cards
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app.ledger.stats();
    let [total, spent, remaining] = stat_cards(area);

    render_card(
        frame,
        total,
        "Presupuesto total",
        stats.total_budget,
        Color::Cyan,
        "Beca completa".to_string(),
    );
    render_card(
        frame,
        spent,
        "Gastado",
        stats.total_spent,
        Color::Red,
        format!("{} del total", format_percentage(stats.spent_percentage())),
    );

    let remaining_color = if stats.total_remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };
    render_card(
        frame,
        remaining,
        "Restante",
        stats.total_remaining,
        remaining_color,
        format_remaining_share(&stats),
    );
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    amount: Money,
    color: Color,
    caption: String,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(Span::styled(
            amount.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(caption, Style::default().fg(Color::Gray))),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        area,
    );
}
