use crate::request::{Body, HttpRequest};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxOfficeChatConfig {
    pub base_url: String,

    // Empty when the backend is open; sent as a bearer token otherwise.
    pub api_key: String,
}

pub fn build_chat_request(
    cfg: &BoxOfficeChatConfig,
    session_id: &str,
    message: &str,
) -> HttpRequest {
    let url = join_url(&cfg.base_url, "/chat");

    let payload = json!({
        "session_id": session_id,
        "message": message,
    });

    let mut headers = vec![("Content-Type".into(), "application/json".into())];
    if !cfg.api_key.trim().is_empty() {
        headers.push(("Authorization".into(), format!("Bearer {}", cfg.api_key)));
    }

    HttpRequest {
        method: "POST".into(),
        url,
        headers,
        body: Body::Json(payload.to_string()),
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
