use anyhow::{Context, anyhow};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ChatReplyResponse {
    reply: Option<String>,
}

/// Decodes the box-office chat response body. A body that is not JSON or
/// carries no `reply` field is an error; the caller treats that as a
/// protocol failure, distinct from transport failures.
pub fn parse_chat_reply(body: &[u8]) -> anyhow::Result<String> {
    let resp: ChatReplyResponse = serde_json::from_slice(body).context("decode chat reply JSON")?;
    resp.reply.ok_or_else(|| anyhow!("no reply field in chat response"))
}
