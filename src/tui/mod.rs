//! Terminal User Interface module
//!
//! The single-screen budget dashboard built with ratatui: stat cards,
//! charts, category list, transaction table, AI advice panel and the
//! add-expense dialog.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
