use avleia_core::types::{ConfirmationRecord, SessionId};
use avleia_engine::engine::{ChatEngine, EngineConfig};
use avleia_engine::session::{ConversationSession, ExchangeStage, FALLBACK_REPLY};
use avleia_engine::traits::{ConfirmationStore, ReplyError, ReplyProvider};
use avleia_providers::box_office::{BoxOfficeChatConfig, build_chat_request};
use avleia_providers::parse::parse_chat_reply;
use avleia_providers::runtime::{HttpTimeouts, execute};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct HttpReplyProvider {
    base_url: String,
}

#[async_trait::async_trait]
impl ReplyProvider for HttpReplyProvider {
    async fn reply(&self, session_id: &str, message: &str) -> Result<String, ReplyError> {
        let cfg = BoxOfficeChatConfig {
            base_url: self.base_url.clone(),
            api_key: String::new(),
        };

        let req = build_chat_request(&cfg, session_id, message);
        let resp = execute(&req, &HttpTimeouts::default())
            .await
            .map_err(|e| ReplyError::Transport(e.to_string()))?;

        if !(200..=299).contains(&resp.status) {
            return Err(ReplyError::Transport(format!("bad status {}", resp.status)));
        }

        parse_chat_reply(&resp.body).map_err(|e| ReplyError::Protocol(e.to_string()))
    }
}

#[derive(Default)]
struct MemoryStore {
    slot: Mutex<Option<ConfirmationRecord>>,
}

impl ConfirmationStore for MemoryStore {
    fn write(&self, record: &ConfirmationRecord) {
        *self.slot.lock().unwrap() = Some(record.clone());
    }

    fn read(&self) -> Option<ConfirmationRecord> {
        self.slot.lock().unwrap().clone()
    }
}

fn engine(base_url: String, store: Arc<MemoryStore>) -> ChatEngine {
    ChatEngine::new(
        EngineConfig::default(),
        Arc::new(HttpReplyProvider { base_url }),
        store,
    )
}

#[tokio::test]
async fn end_to_end_trigger_exchange_persists_the_confirmation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_partial_json(
            serde_json::json!({"session_id": "sess-1", "message": "Επιβεβαιωση Κρατησης"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"reply":"Η κράτηση για «Hamlet» επιβεβαιώθηκε για 3/3/2026 στις 19:30."}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::default());
    let eng = engine(server.uri(), store.clone());
    let mut session = ConversationSession::new(SessionId::new("sess-1"));

    let res = eng.submit(&mut session, "Επιβεβαιωση Κρατησης").await;

    assert_eq!(res.stage, ExchangeStage::Done);
    assert_eq!(session.history().len(), 2);
    assert_eq!(
        store.read(),
        Some(ConfirmationRecord {
            date: "3/3/2026".into(),
            time: "19:30".into(),
            performance: "Hamlet".into(),
        })
    );
}

#[tokio::test]
async fn end_to_end_non_trigger_exchange_leaves_the_store_alone() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"reply":"Η κράτηση για «Hamlet» επιβεβαιώθηκε για 3/3/2026 στις 19:30."}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::default());
    let eng = engine(server.uri(), store.clone());
    let mut session = ConversationSession::new(SessionId::new("sess-1"));

    let res = eng.submit(&mut session, "Πότε παίζει ο Άμλετ;").await;

    assert_eq!(res.stage, ExchangeStage::Done);
    assert!(res.confirmation.is_none());
    assert!(store.read().is_none());
}

#[tokio::test]
async fn server_error_turns_into_the_fallback_line() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::default());
    let eng = engine(server.uri(), store.clone());
    let mut session = ConversationSession::new(SessionId::new("sess-1"));

    let res = eng.submit(&mut session, "hello").await;

    assert_eq!(res.stage, ExchangeStage::Failed);
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history()[1].text, FALLBACK_REPLY);
    assert!(store.read().is_none());
}

#[tokio::test]
async fn missing_reply_field_is_a_protocol_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"status":"ok"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::default());
    let eng = engine(server.uri(), store);
    let mut session = ConversationSession::new(SessionId::new("sess-1"));

    let res = eng.submit(&mut session, "hello").await;

    assert_eq!(res.stage, ExchangeStage::Failed);
    assert!(res.error.as_deref().unwrap().contains("protocol"));
    assert_eq!(session.history()[1].text, FALLBACK_REPLY);
}
