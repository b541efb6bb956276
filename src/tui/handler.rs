//! Event handler for the TUI
//!
//! Routes keyboard events to the dashboard or the open dialog.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::dialogs::expense::ExpenseField;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.active_dialog {
        ActiveDialog::AddExpense => handle_expense_dialog_key(app, key),
        ActiveDialog::None => handle_dashboard_key(app, key),
    }
}

/// Handle keys on the dashboard
fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('i') => app.request_advice(),
        KeyCode::Char('c') => app.clear_advice(),

        KeyCode::Tab | KeyCode::BackTab => app.toggle_panel_focus(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        _ => {}
    }
    Ok(())
}

/// Handle keys inside the add-expense dialog
fn handle_expense_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let category_count = app.ledger.categories().len();
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return Ok(());
        }
        KeyCode::Enter => {
            app.submit_expense();
            return Ok(());
        }
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),

        KeyCode::Left | KeyCode::Right if form.focused_field == ExpenseField::Category => {
            if key.code == KeyCode::Left {
                form.prev_category(category_count);
            } else {
                form.next_category(category_count);
            }
        }

        code => {
            let Some(input) = form.focused_input() else {
                return Ok(());
            };
            match code {
                KeyCode::Char(c) => input.insert(c),
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                _ => return Ok(()),
            }
            form.clear_error();
        }
    }
    Ok(())
}
