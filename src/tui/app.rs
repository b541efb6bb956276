//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::warn;

use crate::advisor::{AdviceClient, AdviceSession, AdviceSnapshot};
use crate::config::Settings;
use crate::error::BecaError;
use crate::ledger::Ledger;

use super::dialogs::expense::ExpenseFormState;

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Categories,
    Transactions,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
}

/// Main application state
pub struct App<'a> {
    /// The budget ledger
    pub ledger: Ledger,

    /// Application settings
    pub settings: &'a Settings,

    /// Advice request state
    pub advice: AdviceSession,

    advisor: Arc<AdviceClient>,

    runtime: Handle,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected category index
    pub selected_category_index: usize,

    /// Selected transaction index
    pub selected_transaction_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Expense form state
    pub expense_form: ExpenseFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(
        ledger: Ledger,
        settings: &'a Settings,
        advisor: Arc<AdviceClient>,
        runtime: Handle,
    ) -> Self {
        Self {
            ledger,
            settings,
            advice: AdviceSession::new(),
            advisor,
            runtime,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            selected_category_index: 0,
            selected_transaction_index: 0,
            status_message: None,
            expense_form: ExpenseFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Toggle focus between the category list and the transaction table
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Categories => FocusedPanel::Transactions,
            FocusedPanel::Transactions => FocusedPanel::Categories,
        };
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::AddExpense {
            self.expense_form = ExpenseFormState::new();
            // Preselect the highlighted category.
            self.expense_form.category_index = self.selected_category_index;
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Move selection up in the focused panel
    pub fn move_up(&mut self) {
        let index = match self.focused_panel {
            FocusedPanel::Categories => &mut self.selected_category_index,
            FocusedPanel::Transactions => &mut self.selected_transaction_index,
        };
        *index = index.saturating_sub(1);
    }

    /// Move selection down in the focused panel
    pub fn move_down(&mut self) {
        let (index, max) = match self.focused_panel {
            FocusedPanel::Categories => (
                &mut self.selected_category_index,
                self.ledger.categories().len(),
            ),
            FocusedPanel::Transactions => (
                &mut self.selected_transaction_index,
                self.ledger.transactions().len(),
            ),
        };
        if *index < max.saturating_sub(1) {
            *index += 1;
        }
    }

    /// Submit the expense dialog. On success the dialog closes; otherwise the
    /// error stays in the dialog and the ledger is untouched.
    pub fn submit_expense(&mut self) {
        let form = self.expense_form.to_form(self.ledger.categories());
        match self.ledger.submit(&form) {
            Ok(_) => {
                self.close_dialog();
                self.selected_transaction_index = 0;
                self.set_status(format!("Gasto añadido: {}", form.description.trim()));
            }
            Err(e) => self.expense_form.set_error(e.to_string()),
        }
    }

    /// Start an advice request for the current ledger
    pub fn request_advice(&mut self) {
        let snapshot = AdviceSnapshot::from_ledger(&self.ledger);
        match self
            .advice
            .spawn(&self.runtime, Arc::clone(&self.advisor), snapshot)
        {
            Ok(_) => self.set_status("Analizando tu presupuesto..."),
            Err(BecaError::AdviceInFlight) => self.set_status("Ya hay un análisis en curso"),
            Err(e) => {
                warn!(error = %e, "could not start advice request");
                self.set_status(e.to_string());
            }
        }
    }

    /// Clear the advice panel, discarding any pending result
    pub fn clear_advice(&mut self) {
        self.advice.reset();
        self.clear_status();
    }

    /// Periodic update: collect a finished advice request
    pub fn tick(&mut self) {
        if self.advice.poll() {
            self.clear_status();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::{AdviceState, TextGenerator};
    use crate::error::BecaResult;
    use crate::models::Money;
    use async_trait::async_trait;
    use std::time::Duration;

    struct Echo;

    #[async_trait]
    impl TextGenerator for Echo {
        fn name(&self) -> &'static str {
            "Echo"
        }

        async fn generate(&self, _prompt: &str) -> BecaResult<String> {
            Ok("Buen trabajo".to_string())
        }
    }

    fn app(settings: &Settings) -> App<'_> {
        let advisor = Arc::new(AdviceClient::new(Arc::new(Echo), Money::zero()));
        App::new(
            Ledger::seeded().unwrap(),
            settings,
            advisor,
            Handle::current(),
        )
    }

    #[tokio::test]
    async fn test_navigation_bounds() {
        let settings = Settings::default();
        let mut app = app(&settings);

        app.move_up();
        assert_eq!(app.selected_category_index, 0);
        for _ in 0..20 {
            app.move_down();
        }
        assert_eq!(app.selected_category_index, 7);

        app.toggle_panel_focus();
        for _ in 0..20 {
            app.move_down();
        }
        assert_eq!(app.selected_transaction_index, 5);
        assert_eq!(app.selected_category_index, 7);
    }

    #[tokio::test]
    async fn test_submit_expense() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.selected_category_index = 4;
        app.open_dialog(ActiveDialog::AddExpense);
        assert_eq!(app.expense_form.category_index, 4);

        for c in "Coffee".chars() {
            app.expense_form.description_input.insert(c);
        }
        for c in "3,50".chars() {
            app.expense_form.amount_input.insert(c);
        }
        app.submit_expense();

        assert!(!app.has_dialog());
        assert_eq!(app.ledger.transactions()[0].description, "Coffee");
        assert_eq!(app.ledger.stats().total_spent, Money::from_cents(6_645));
    }

    #[tokio::test]
    async fn test_invalid_expense_keeps_dialog_open() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.open_dialog(ActiveDialog::AddExpense);
        for c in "Coffee".chars() {
            app.expense_form.description_input.insert(c);
        }
        app.submit_expense();

        assert!(app.has_dialog());
        assert!(app.expense_form.error_message.is_some());
        assert_eq!(app.ledger.transactions().len(), 6);
    }

    #[tokio::test]
    async fn test_advice_roundtrip_and_clear() {
        let settings = Settings::default();
        let mut app = app(&settings);

        app.request_advice();
        assert!(app.advice.is_pending());
        app.request_advice();
        assert_eq!(app.status_message.as_deref(), Some("Ya hay un análisis en curso"));

        for _ in 0..100 {
            app.tick();
            if !app.advice.is_pending() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(app.advice.text(), Some("Buen trabajo"));

        app.clear_advice();
        assert_eq!(app.advice.state(), &AdviceState::Idle);
    }
}
