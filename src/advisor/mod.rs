//! AI budget advisor
//!
//! Builds a review prompt from the ledger, sends it to a text-generation
//! service and tracks the request for the dashboard.

pub mod client;
pub mod prompt;
pub mod provider;
pub mod session;
pub mod snapshot;

pub use client::{advice_paragraphs, AdviceClient, EMPTY_RESPONSE_MESSAGE, FALLBACK_MESSAGE};
pub use prompt::build_prompt;
pub use provider::{GeminiClient, TextGenerator};
pub use session::{AdviceSession, AdviceState, RequestId};
pub use snapshot::{AdviceSnapshot, RECENT_TRANSACTIONS};
