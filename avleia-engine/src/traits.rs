use async_trait::async_trait;
use avleia_core::types::ConfirmationRecord;
use thiserror::Error;

/// Why a reply did not arrive. Callers only ever show the fixed fallback
/// line, but transport and protocol failures log differently.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("protocol failure: {0}")]
    Protocol(String),
}

#[async_trait]
pub trait ReplyProvider: Send + Sync {
    /// One request/response exchange with the chat backend. The session id
    /// is opaque here and passed through unchanged.
    async fn reply(&self, session_id: &str, message: &str) -> Result<String, ReplyError>;
}

/// The shared persisted confirmation slot, injected rather than reached for
/// globally so the single-slot behavior stays testable and swappable.
///
/// Both operations are best-effort: a failing backing store logs and
/// degrades (write dropped, read absent), it never surfaces to the chat.
pub trait ConfirmationStore: Send + Sync {
    fn write(&self, record: &ConfirmationRecord);
    fn read(&self) -> Option<ConfirmationRecord>;
}
