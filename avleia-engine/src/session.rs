use avleia_core::types::{ConfirmationRecord, Message, SessionId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Seeded into a fresh session before the user types anything.
pub const GREETING_MESSAGES: [&str; 2] =
    ["Welcome to the Theater Box Office!", "How can I help you today?"];

/// The one bot line a failed exchange ever produces; raw errors stay out of
/// the transcript.
pub const FALLBACK_REPLY: &str = "Σφάλμα σύνδεσης. Παρακαλώ δοκιμάστε ξανά.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    Accepted,
    RejectedEmpty,
    RejectedBusy,
}

/// Ordered message history for one user. History is append-only and a user
/// message always precedes its bot reply; the busy flag serializes
/// exchanges, so a submission while one is in flight is rejected, not
/// queued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSession {
    session_id: SessionId,
    history: Vec<Message>,
    busy: bool,
}

impl ConversationSession {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            history: Vec::new(),
            busy: false,
        }
    }

    /// A fresh session opened by the chat screen, greetings included.
    pub fn greeted(session_id: SessionId) -> Self {
        let mut session = Self::new(session_id);
        for text in GREETING_MESSAGES {
            session.history.push(Message::bot(text));
        }
        session
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Starts an exchange: appends the trimmed user message and marks the
    /// session busy. Rejections leave the history untouched.
    pub fn begin_exchange(&mut self, input: &str) -> SubmitOutcome {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::RejectedEmpty;
        }
        if self.busy {
            return SubmitOutcome::RejectedBusy;
        }

        self.history.push(Message::user(trimmed));
        self.busy = true;
        SubmitOutcome::Accepted
    }

    /// Lands the bot reply for the outstanding exchange.
    pub fn complete_exchange(&mut self, reply: impl Into<String>) {
        self.history.push(Message::bot(reply));
        self.busy = false;
    }

    /// Lands the fixed fallback line instead of a reply.
    pub fn fail_exchange(&mut self) {
        self.history.push(Message::bot(FALLBACK_REPLY));
        self.busy = false;
    }
}

/// Terminal state of one exchange. In-flight progress ("sending",
/// "extracting") is reported through the engine's stage hook instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExchangeStage {
    Rejected,
    Done,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExchangeTimings {
    pub reply_ms: Option<u64>,
}

/// Outcome of one `ChatEngine::submit` call, shaped for UI display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeResult {
    pub stage: ExchangeStage,

    // A stable string label for UI display.
    // This is intentionally not derived from `Debug`.
    pub stage_label: Option<String>,

    pub outcome: SubmitOutcome,
    pub reply: Option<String>,
    pub confirmation: Option<ConfirmationRecord>,
    pub timings: ExchangeTimings,
    pub error: Option<String>,
}

impl ExchangeResult {
    pub fn rejected(outcome: SubmitOutcome) -> Self {
        Self {
            stage: ExchangeStage::Rejected,
            stage_label: Some("rejected".into()),
            outcome,
            reply: None,
            confirmation: None,
            timings: ExchangeTimings::default(),
            error: None,
        }
    }

    pub fn done(reply: String, confirmation: Option<ConfirmationRecord>, reply_ms: u64) -> Self {
        Self {
            stage: ExchangeStage::Done,
            stage_label: Some("done".into()),
            outcome: SubmitOutcome::Accepted,
            reply: Some(reply),
            confirmation,
            timings: ExchangeTimings {
                reply_ms: Some(reply_ms),
            },
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>, reply_ms: u64) -> Self {
        Self {
            stage: ExchangeStage::Failed,
            stage_label: Some("failed".into()),
            outcome: SubmitOutcome::Accepted,
            reply: None,
            confirmation: None,
            timings: ExchangeTimings {
                reply_ms: Some(reply_ms),
            },
            error: Some(error.into()),
        }
    }
}

pub fn ms(d: Duration) -> u64 {
    d.as_millis().try_into().unwrap_or(u64::MAX)
}
