use avleia_core::config::AppConfig;
use avleia_core::scripted::scripted_reply;
use avleia_engine::traits::{ReplyError, ReplyProvider};
use avleia_providers::box_office::{BoxOfficeChatConfig, build_chat_request};
use avleia_providers::parse::parse_chat_reply;
use avleia_providers::runtime::{HttpTimeouts, execute};

#[derive(Clone)]
pub struct RemoteReplyProvider {
    cfg: BoxOfficeChatConfig,
    timeouts: HttpTimeouts,
}

impl std::fmt::Debug for RemoteReplyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteReplyProvider")
            .field("base_url", &self.cfg.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

impl RemoteReplyProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            cfg: BoxOfficeChatConfig {
                base_url: base_url.into(),
                api_key: api_key.into(),
            },
            timeouts: HttpTimeouts::default(),
        }
    }

    pub fn from_config(cfg: &AppConfig, api_key: impl Into<String>) -> Self {
        Self {
            cfg: BoxOfficeChatConfig {
                base_url: cfg.chat_base_url.clone(),
                api_key: api_key.into(),
            },
            timeouts: HttpTimeouts::from_secs(cfg.connect_timeout_secs, cfg.request_timeout_secs),
        }
    }
}

#[async_trait::async_trait]
impl ReplyProvider for RemoteReplyProvider {
    async fn reply(&self, session_id: &str, message: &str) -> Result<String, ReplyError> {
        let req = build_chat_request(&self.cfg, session_id, message);
        let resp = execute(&req, &self.timeouts)
            .await
            .map_err(|e| ReplyError::Transport(e.to_string()))?;

        if !(200..=299).contains(&resp.status) {
            return Err(ReplyError::Transport(format!(
                "chat request failed: status={} body={}",
                resp.status,
                String::from_utf8_lossy(&resp.body)
            )));
        }

        parse_chat_reply(&resp.body).map_err(|e| ReplyError::Protocol(e.to_string()))
    }
}

/// Offline responder backed by the canned keyword replies; used by the demo
/// and whenever no backend is configured.
#[derive(Debug, Clone, Default)]
pub struct ScriptedReplyProvider;

#[async_trait::async_trait]
impl ReplyProvider for ScriptedReplyProvider {
    async fn reply(&self, _session_id: &str, message: &str) -> Result<String, ReplyError> {
        Ok(scripted_reply(message).to_string())
    }
}
