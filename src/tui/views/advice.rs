//! AI advice panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::advisor::{advice_paragraphs, AdviceState};
use crate::tui::app::App;

/// Render the advice panel for the current session state
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" ✨ Consejos IA ")
        .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let lines: Vec<Line> = match app.advice.state() {
        AdviceState::Idle => vec![
            Line::from("Obtén un análisis de tu presupuesto con IA."),
            Line::from(""),
            Line::from(vec![
                Span::styled("[i]", Style::default().fg(Color::Yellow)),
                Span::raw(" Analizar mis gastos"),
            ]),
        ],
        AdviceState::Pending { .. } => vec![Line::from(Span::styled(
            "Analizando tu presupuesto...",
            Style::default().fg(Color::Yellow),
        ))],
        AdviceState::Resolved { text } => with_clear_hint(advice_lines(text, Color::White)),
        AdviceState::Failed { message } => with_clear_hint(advice_lines(message, Color::Red)),
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn advice_lines(text: &str, color: Color) -> Vec<Line<'static>> {
    advice_paragraphs(text)
        .into_iter()
        .map(|p| Line::from(Span::styled(p.to_string(), Style::default().fg(color))))
        .collect()
}

fn with_clear_hint(mut lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[c]", Style::default().fg(Color::Yellow)),
        Span::raw(" Limpiar análisis"),
    ]));
    lines
}
