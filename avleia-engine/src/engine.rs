use crate::session::{ConversationSession, ExchangeResult, SubmitOutcome, ms};
use crate::traits::{ConfirmationStore, ReplyProvider};
use avleia_core::extract::{CONFIRMATION_TRIGGER, extract_confirmation};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

const STAGE_SENDING: &str = "sending";
const STAGE_EXTRACTING: &str = "extracting";

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Exact trimmed user message that arms extraction for the next reply.
    pub trigger_phrase: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trigger_phrase: CONFIRMATION_TRIGGER.into(),
        }
    }
}

/// Drives one chat exchange: append user message, call the backend, land
/// the reply (or the fallback line), and on the trigger phrase extract and
/// persist the booking confirmation.
pub struct ChatEngine {
    cfg: EngineConfig,
    provider: Arc<dyn ReplyProvider>,
    confirmations: Arc<dyn ConfirmationStore>,
}

impl ChatEngine {
    pub fn new(
        cfg: EngineConfig,
        provider: Arc<dyn ReplyProvider>,
        confirmations: Arc<dyn ConfirmationStore>,
    ) -> Self {
        Self {
            cfg,
            provider,
            confirmations,
        }
    }

    /// Runs the full exchange (submit -> remote reply -> optional extract).
    pub async fn submit(
        &self,
        session: &mut ConversationSession,
        input: &str,
    ) -> ExchangeResult {
        self.submit_with_hook(session, input, |_stage| async {}).await
    }

    /// Same as `submit`, but emits a stage hook as the exchange progresses.
    ///
    /// The hook is intended for UI progress (e.g. a typing indicator) and
    /// must be fast.
    pub async fn submit_with_hook<F, Fut>(
        &self,
        session: &mut ConversationSession,
        input: &str,
        on_stage: F,
    ) -> ExchangeResult
    where
        F: Fn(&'static str) -> Fut,
        Fut: Future<Output = ()>,
    {
        let outcome = session.begin_exchange(input);
        if outcome != SubmitOutcome::Accepted {
            return ExchangeResult::rejected(outcome);
        }

        // begin_exchange stored the trimmed text; send exactly that.
        let message = session
            .history()
            .last()
            .map(|m| m.text.clone())
            .unwrap_or_default();

        on_stage(STAGE_SENDING).await;

        let t0 = Instant::now();
        let reply = self
            .provider
            .reply(session.session_id().as_str(), &message)
            .await;
        let reply_ms = ms(t0.elapsed());

        match reply {
            Ok(reply) => {
                session.complete_exchange(reply.clone());

                let mut confirmation = None;
                if message == self.cfg.trigger_phrase {
                    on_stage(STAGE_EXTRACTING).await;
                    let record = extract_confirmation(&reply);
                    // Best-effort: the store logs its own failures and the
                    // chat flow never blocks on it.
                    self.confirmations.write(&record);
                    confirmation = Some(record);
                }

                ExchangeResult::done(reply, confirmation, reply_ms)
            }
            Err(e) => {
                session.fail_exchange();
                ExchangeResult::failed(e.to_string(), reply_ms)
            }
        }
    }
}
