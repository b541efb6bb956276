//! Add-expense dialog
//!
//! Modal form with description, category and amount fields, tab
//! navigation, validation feedback and save/cancel.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ledger::ExpenseForm;
use crate::models::Category;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Description,
    Category,
    Amount,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Description,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Category => Self::Description,
            Self::Amount => Self::Category,
        }
    }
}

/// State for the expense form dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub description_input: TextInput,
    /// Index into the ledger's category list
    pub category_index: usize,
    pub amount_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create an empty form focused on the description
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: ExpenseField::Description,
            description_input: TextInput::new()
                .label("Descripción")
                .placeholder("¿En qué has gastado?"),
            category_index: 0,
            amount_input: TextInput::new().label("Importe").placeholder("0,00"),
            error_message: None,
        };
        state.update_focus();
        state
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.description_input.focused = self.focused_field == ExpenseField::Description;
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
    }

    /// The focused text input; the category field has none
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Description => Some(&mut self.description_input),
            ExpenseField::Category => None,
            ExpenseField::Amount => Some(&mut self.amount_input),
        }
    }

    /// Select the next category, wrapping around
    pub fn next_category(&mut self, count: usize) {
        if count > 0 {
            self.category_index = (self.category_index + 1) % count;
        }
    }

    /// Select the previous category, wrapping around
    pub fn prev_category(&mut self, count: usize) {
        if count > 0 {
            self.category_index = (self.category_index + count - 1) % count;
        }
    }

    /// Raw form for the ledger to validate
    pub fn to_form(&self, categories: &[Category]) -> ExpenseForm {
        let category = categories
            .get(self.category_index)
            .map(|c| c.id.as_str())
            .unwrap_or_default();
        ExpenseForm::new(
            self.description_input.value(),
            category,
            self.amount_input.value(),
        )
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Añadir gasto ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    frame.render_widget(Paragraph::new(form.description_input.to_line()), chunks[0]);
    frame.render_widget(
        Paragraph::new(category_line(form, app.ledger.categories())),
        chunks[1],
    );
    frame.render_widget(Paragraph::new(form.amount_input.to_line()), chunks[2]);

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
        frame.render_widget(
            Paragraph::new(error_line).wrap(ratatui::widgets::Wrap { trim: true }),
            chunks[4],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Campo  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Categoría  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Guardar  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancelar"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[5]);
}

fn category_line(form: &ExpenseFormState, categories: &[Category]) -> Line<'static> {
    let focused = form.focused_field == ExpenseField::Category;
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let name = categories
        .get(form.category_index)
        .map(|c| c.to_string())
        .unwrap_or_else(|| "(sin categorías)".to_string());

    Line::from(vec![
        Span::styled(format!("{:>12}: ", "Categoría"), label_style),
        Span::styled(format!("◀ {} ▶", name), value_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::seed::initial_categories;

    #[test]
    fn test_field_cycle() {
        let mut state = ExpenseFormState::new();
        assert!(state.description_input.focused);
        state.next_field();
        assert_eq!(state.focused_field, ExpenseField::Category);
        assert!(state.focused_input().is_none());
        state.next_field();
        assert!(state.amount_input.focused);
        assert!(!state.description_input.focused);
        state.next_field();
        assert_eq!(state.focused_field, ExpenseField::Description);
        state.prev_field();
        assert_eq!(state.focused_field, ExpenseField::Amount);
    }

    #[test]
    fn test_category_wraps() {
        let mut state = ExpenseFormState::new();
        state.prev_category(8);
        assert_eq!(state.category_index, 7);
        state.next_category(8);
        assert_eq!(state.category_index, 0);
        state.next_category(0);
        assert_eq!(state.category_index, 0);
    }

    #[test]
    fn test_to_form() {
        let categories = initial_categories();
        let mut state = ExpenseFormState::new();
        for c in "Coffee".chars() {
            state.description_input.insert(c);
        }
        state.category_index = 4;
        state.amount_input = TextInput::new().content("3,50");

        let form = state.to_form(&categories);
        assert_eq!(form, ExpenseForm::new("Coffee", "comida", "3,50"));
    }
}
