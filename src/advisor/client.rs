//! Budget review client
//!
//! Wraps a [`TextGenerator`] with the prompt format and the user-facing
//! failure text. `request_advice` never fails: any problem is logged and the
//! fixed apology is returned in place of advice.

use std::sync::Arc;

use tracing::{error, info};

use crate::config::AdvisorSettings;
use crate::error::BecaResult;
use crate::models::Money;

use super::prompt::build_prompt;
use super::provider::{GeminiClient, TextGenerator};
use super::snapshot::AdviceSnapshot;

/// Shown when the service could not be reached or answered with an error
pub const FALLBACK_MESSAGE: &str = "Lo siento, no he podido analizar tu presupuesto en este momento. Por favor, inténtalo de nuevo más tarde.";

/// Shown when the service answered but produced no text
pub const EMPTY_RESPONSE_MESSAGE: &str = "Error al obtener feedback.";

/// Client producing budget advice
#[derive(Clone)]
pub struct AdviceClient {
    generator: Arc<dyn TextGenerator>,
    reference_budget: Money,
}

impl AdviceClient {
    /// Create a client around any text generator
    pub fn new(generator: Arc<dyn TextGenerator>, reference_budget: Money) -> Self {
        Self {
            generator,
            reference_budget,
        }
    }

    /// Create a Gemini-backed client from settings
    pub fn from_settings(settings: &AdvisorSettings) -> BecaResult<Self> {
        let gemini = GeminiClient::new(settings)?;
        Ok(Self::new(Arc::new(gemini), settings.reference_budget))
    }

    /// The prompt that would be sent for a snapshot
    pub fn prompt_for(&self, snapshot: &AdviceSnapshot) -> String {
        build_prompt(snapshot, self.reference_budget)
    }

    /// Ask for advice, surfacing service failures to the caller.
    ///
    /// An empty completion is not a failure; it resolves to
    /// [`EMPTY_RESPONSE_MESSAGE`].
    pub async fn try_advice(&self, snapshot: &AdviceSnapshot) -> BecaResult<String> {
        let prompt = self.prompt_for(snapshot);
        let text = self.generator.generate(&prompt).await?;

        if text.trim().is_empty() {
            info!(provider = self.generator.name(), "advice service returned no text");
            return Ok(EMPTY_RESPONSE_MESSAGE.to_string());
        }

        info!(
            provider = self.generator.name(),
            chars = text.chars().count(),
            "received budget advice"
        );
        Ok(text)
    }

    /// Ask for advice; failures yield [`FALLBACK_MESSAGE`]
    pub async fn request_advice(&self, snapshot: &AdviceSnapshot) -> String {
        match self.try_advice(snapshot).await {
            Ok(text) => text,
            Err(e) => {
                error!(provider = self.generator.name(), error = %e, "budget analysis failed");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}

/// Split advice text into display paragraphs (one per non-blank line)
pub fn advice_paragraphs(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BecaError;
    use crate::ledger::Ledger;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records prompts and replies with a canned result
    struct FakeGenerator {
        reply: Mutex<Option<BecaResult<String>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeGenerator {
        fn replying(reply: BecaResult<String>) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Some(reply)),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        fn name(&self) -> &'static str {
            "Fake"
        }

        async fn generate(&self, prompt: &str) -> BecaResult<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(BecaError::Network("no reply queued".into())))
        }
    }

    fn snapshot() -> AdviceSnapshot {
        AdviceSnapshot::from_ledger(&Ledger::seeded().unwrap())
    }

    #[tokio::test]
    async fn test_advice_text_returned() {
        let fake = FakeGenerator::replying(Ok("Vas bien. Nota: 8/10".into()));
        let client = AdviceClient::new(fake.clone(), Money::from_cents(170_000));

        let advice = client.request_advice(&snapshot()).await;
        assert_eq!(advice, "Vas bien. Nota: 8/10");

        let prompts = fake.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Total Budget: 1700.00€"));
    }

    #[tokio::test]
    async fn test_failure_yields_fallback() {
        let fake = FakeGenerator::replying(Err(BecaError::Service {
            status: 503,
            message: "overloaded".into(),
        }));
        let client = AdviceClient::new(fake, Money::from_cents(170_000));

        assert_eq!(client.request_advice(&snapshot()).await, FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_try_advice_surfaces_error() {
        let fake = FakeGenerator::replying(Err(BecaError::Network("offline".into())));
        let client = AdviceClient::new(fake, Money::zero());

        let err = client.try_advice(&snapshot()).await.unwrap_err();
        assert!(err.is_advice_failure());
    }

    #[tokio::test]
    async fn test_empty_text_yields_message() {
        let fake = FakeGenerator::replying(Ok("  \n".into()));
        let client = AdviceClient::new(fake, Money::zero());

        assert_eq!(client.request_advice(&snapshot()).await, EMPTY_RESPONSE_MESSAGE);
    }

    #[tokio::test]
    async fn test_missing_api_key_yields_fallback() {
        let client = AdviceClient::from_settings(&AdvisorSettings::default()).unwrap();
        assert_eq!(client.request_advice(&snapshot()).await, FALLBACK_MESSAGE);
    }

    #[test]
    fn test_advice_paragraphs() {
        let text = "Resumen: bien.\n\n  \nConsejo: menos juegos.  \nNota: 7/10";
        assert_eq!(
            advice_paragraphs(text),
            vec!["Resumen: bien.", "Consejo: menos juegos.", "Nota: 7/10"]
        );
        assert!(advice_paragraphs("").is_empty());
    }
}
