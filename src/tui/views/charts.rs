//! Budget charts
//!
//! A grouped bar chart comparing budget and spending per category, and a
//! distribution of spending across the categories that have any.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::{fit, format_bar, format_percentage};
use crate::reports::{budget_comparison, category_breakdown};
use crate::tui::app::App;

const BUDGET_COLOR: Color = Color::Blue;
const SPENT_COLOR: Color = Color::Red;

/// Slice colours, reused in order
const PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
    Color::LightCyan,
    Color::LightMagenta,
];

/// Budget vs. spent, whole euros
pub fn render_comparison(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" Presupuesto "),
            Span::styled("■", Style::default().fg(BUDGET_COLOR)),
            Span::raw(" vs gastado "),
            Span::styled("■ ", Style::default().fg(SPENT_COLOR)),
        ]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let entries = budget_comparison(app.ledger.categories());
    let mut chart = BarChart::default()
        .block(block)
        .bar_width(2)
        .bar_gap(0)
        .group_gap(2);

    for entry in &entries {
        let budget = entry.budget.units().max(0) as u64;
        let spent = entry.spent.units().max(0) as u64;
        let group = BarGroup::default()
            .label(Line::from(fit(&entry.name, 6)))
            .bars(&[
                Bar::default()
                    .value(budget)
                    .text_value(String::new())
                    .style(Style::default().fg(BUDGET_COLOR)),
                Bar::default()
                    .value(spent)
                    .text_value(String::new())
                    .style(Style::default().fg(SPENT_COLOR)),
            ]);
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
}

/// Share of total spending per category
pub fn render_distribution(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Distribución del gasto ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let entries = category_breakdown(app.ledger.categories());
    if entries.is_empty() {
        frame.render_widget(
            Paragraph::new("Todavía no hay gastos.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let total = app.ledger.stats().total_spent;
    let bar_width = (area.width as usize).saturating_sub(28).clamp(4, 20);

    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let share = entry.share_of(total);
            let color = PALETTE[i % PALETTE.len()];
            Line::from(vec![
                Span::styled(fit(&entry.name, 10), Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(format_bar(share, 100.0, bar_width), Style::default().fg(color)),
                Span::raw(format!(" {:>6}", format_percentage(share))),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
