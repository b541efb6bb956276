//! Configuration module for Beca
//!
//! Settings are taken from the environment (optionally seeded from a `.env`
//! file by the binary) and never persisted.

pub mod settings;

pub use settings::{AdvisorSettings, Settings};
