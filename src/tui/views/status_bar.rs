//! Status bar view
//!
//! Shows the advice model, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(" TU BECA ", Style::default().fg(Color::Cyan))];

    spans.push(Span::raw("│ "));
    if app.settings.has_api_key() {
        spans.push(Span::styled(
            format!("IA: {} ", app.settings.advisor.model),
            Style::default().fg(Color::Magenta),
        ));
    } else {
        spans.push(Span::styled("IA: sin clave ", Style::default().fg(Color::DarkGray)));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(message.as_str(), Style::default().fg(Color::Yellow)));
    }

    let hints = " a:Gasto  i:IA  c:Limpiar  Tab:Panel  q:Salir ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
