//! Lifecycle of a single advice request as seen by the dashboard
//!
//! ```text
//! Idle --begin--> Pending --finish(ok)--> Resolved
//!                    |   --finish(err)-> Failed
//!                    +----reset-------> Idle  (late result discarded)
//! ```
//!
//! Only one request may be pending. Results are tagged with the request that
//! produced them so a result arriving after a reset is ignored.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::{debug, error};

use crate::error::{BecaError, BecaResult};

use super::client::{AdviceClient, FALLBACK_MESSAGE};
use super::snapshot::AdviceSnapshot;

/// Identifies one advice request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// Current state of the advice panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AdviceState {
    #[default]
    Idle,
    Pending {
        request: RequestId,
    },
    Resolved {
        text: String,
    },
    Failed {
        message: String,
    },
}

/// Advice session owned by the UI thread
#[derive(Debug, Default)]
pub struct AdviceSession {
    state: AdviceState,
    next_request: u64,
    inflight: Option<(RequestId, oneshot::Receiver<BecaResult<String>>)>,
}

impl AdviceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AdviceState {
        &self.state
    }

    /// Whether a request is pending
    pub fn is_pending(&self) -> bool {
        matches!(self.state, AdviceState::Pending { .. })
    }

    /// Text to show in the advice panel, if any
    pub fn text(&self) -> Option<&str> {
        match &self.state {
            AdviceState::Resolved { text } => Some(text),
            AdviceState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Start a new request. Fails while another is pending.
    pub fn begin(&mut self) -> BecaResult<RequestId> {
        if self.is_pending() {
            return Err(BecaError::AdviceInFlight);
        }
        self.next_request += 1;
        let request = RequestId(self.next_request);
        self.state = AdviceState::Pending { request };
        debug!(request = request.0, "advice request started");
        Ok(request)
    }

    /// Apply the outcome of a request. Returns false if the outcome was
    /// stale (the session was reset or moved on) and has been dropped.
    pub fn finish(&mut self, request: RequestId, outcome: BecaResult<String>) -> bool {
        match self.state {
            AdviceState::Pending { request: current } if current == request => {}
            _ => {
                debug!(request = request.0, "discarding stale advice result");
                return false;
            }
        }

        self.state = match outcome {
            Ok(text) => AdviceState::Resolved { text },
            Err(e) => {
                error!(request = request.0, error = %e, "advice request failed");
                AdviceState::Failed {
                    message: FALLBACK_MESSAGE.to_string(),
                }
            }
        };
        self.inflight = None;
        true
    }

    /// Return to idle, discarding any pending result
    pub fn reset(&mut self) {
        self.state = AdviceState::Idle;
        self.inflight = None;
    }

    /// Begin a request and run it on the given runtime. The result is
    /// collected by [`poll`](Self::poll).
    pub fn spawn(
        &mut self,
        handle: &Handle,
        client: Arc<AdviceClient>,
        snapshot: AdviceSnapshot,
    ) -> BecaResult<RequestId> {
        let request = self.begin()?;
        let (tx, rx) = oneshot::channel();

        handle.spawn(async move {
            let outcome = client.try_advice(&snapshot).await;
            // The receiver is gone if the session was reset.
            let _ = tx.send(outcome);
        });

        self.inflight = Some((request, rx));
        Ok(request)
    }

    /// Collect a finished background request without blocking.
    /// Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let Some((request, mut rx)) = self.inflight.take() else {
            return false;
        };

        match rx.try_recv() {
            Ok(outcome) => self.finish(request, outcome),
            Err(oneshot::error::TryRecvError::Empty) => {
                self.inflight = Some((request, rx));
                false
            }
            Err(oneshot::error::TryRecvError::Closed) => self.finish(
                request,
                Err(BecaError::Network(
                    "advice task ended without a result".into(),
                )),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::TextGenerator;
    use crate::ledger::Ledger;
    use crate::models::Money;
    use async_trait::async_trait;
    use std::time::Duration;

    #[test]
    fn test_begin_and_resolve() {
        let mut session = AdviceSession::new();
        assert_eq!(session.state(), &AdviceState::Idle);

        let request = session.begin().unwrap();
        assert!(session.is_pending());
        assert!(session.text().is_none());

        assert!(session.finish(request, Ok("Nota: 9/10".into())));
        assert_eq!(session.text(), Some("Nota: 9/10"));
    }

    #[test]
    fn test_failure_shows_fallback() {
        let mut session = AdviceSession::new();
        let request = session.begin().unwrap();
        session.finish(request, Err(BecaError::MissingApiKey));

        assert!(matches!(session.state(), AdviceState::Failed { .. }));
        assert_eq!(session.text(), Some(FALLBACK_MESSAGE));
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failure_is_logged_as_error() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut session = AdviceSession::new();
            let request = session.begin().unwrap();
            session.finish(request, Err(BecaError::Network("timed out".into())));
        });

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        let line = output
            .lines()
            .find(|l| l.contains("advice request failed"))
            .unwrap();
        assert!(line.contains("ERROR"));
        assert!(line.contains("timed out"));
    }

    #[test]
    fn test_single_request_in_flight() {
        let mut session = AdviceSession::new();
        session.begin().unwrap();
        assert!(matches!(session.begin(), Err(BecaError::AdviceInFlight)));
    }

    #[test]
    fn test_reset_discards_late_result() {
        let mut session = AdviceSession::new();
        let request = session.begin().unwrap();
        session.reset();

        assert!(!session.finish(request, Ok("tarde".into())));
        assert_eq!(session.state(), &AdviceState::Idle);
    }

    #[test]
    fn test_old_request_cannot_overwrite_new_one() {
        let mut session = AdviceSession::new();
        let first = session.begin().unwrap();
        session.reset();
        let second = session.begin().unwrap();

        assert!(!session.finish(first, Ok("vieja".into())));
        assert!(session.finish(second, Ok("nueva".into())));
        assert_eq!(session.text(), Some("nueva"));
    }

    #[test]
    fn test_can_ask_again_after_result() {
        let mut session = AdviceSession::new();
        let request = session.begin().unwrap();
        session.finish(request, Ok("uno".into()));
        assert!(session.begin().is_ok());
    }

    struct Canned(&'static str);

    #[async_trait]
    impl TextGenerator for Canned {
        fn name(&self) -> &'static str {
            "Canned"
        }

        async fn generate(&self, _prompt: &str) -> BecaResult<String> {
            Ok(self.0.to_string())
        }
    }

    fn snapshot() -> AdviceSnapshot {
        AdviceSnapshot::from_ledger(&Ledger::seeded().unwrap())
    }

    #[tokio::test]
    async fn test_spawn_and_poll() {
        let client = Arc::new(AdviceClient::new(Arc::new(Canned("Ánimo")), Money::zero()));
        let mut session = AdviceSession::new();
        session
            .spawn(&Handle::current(), client, snapshot())
            .unwrap();

        let mut applied = false;
        for _ in 0..100 {
            if session.poll() {
                applied = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        assert!(applied);
        assert_eq!(session.text(), Some("Ánimo"));
        assert!(!session.poll());
    }

    #[tokio::test]
    async fn test_reset_while_spawned() {
        let client = Arc::new(AdviceClient::new(Arc::new(Canned("tarde")), Money::zero()));
        let mut session = AdviceSession::new();
        session
            .spawn(&Handle::current(), client, snapshot())
            .unwrap();
        session.reset();

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!session.poll());
        assert_eq!(session.state(), &AdviceState::Idle);
    }
}
