use std::sync::Arc;

use avleia_core::extract::CONFIRMATION_TRIGGER;
use avleia_core::types::{Sender, SessionId};
use avleia_engine::engine::{ChatEngine, EngineConfig};
use avleia_engine::session::ConversationSession;
use avleia_engine::traits::ReplyProvider;
use avleia_runtime::chat::{RemoteReplyProvider, ScriptedReplyProvider};
use avleia_runtime::config_store::ConfigStore;
use avleia_runtime::confirmation_store::FileConfirmationStore;
use avleia_runtime::ticket::TicketDetails;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Demo CLI: run a short conversation ending in the confirmation trigger,
    // then show the ticket the booking screen would render.
    // Point AVLEIA_CONFIG at a config file or set CHAT_BASE_URL to talk to
    // a real backend; otherwise the scripted offline responder answers.

    let base_url = std::env::var("CHAT_BASE_URL").unwrap_or_default();
    let api_key = std::env::var("CHAT_API_KEY").unwrap_or_default();

    let provider: Arc<dyn ReplyProvider> = if let Ok(config_path) = std::env::var("AVLEIA_CONFIG") {
        let cfg = ConfigStore::at_path(config_path).load()?;
        Arc::new(RemoteReplyProvider::from_config(&cfg, api_key))
    } else if !base_url.trim().is_empty() {
        Arc::new(RemoteReplyProvider::new(base_url, api_key))
    } else {
        Arc::new(ScriptedReplyProvider)
    };

    let storage_path = std::env::temp_dir().join("avleia").join("storage.json");
    let store = Arc::new(FileConfirmationStore::at_path(&storage_path));

    let engine = ChatEngine::new(EngineConfig::default(), provider, store.clone());
    let mut session = ConversationSession::greeted(SessionId::random());

    for input in ["hello", "I want to book tickets", CONFIRMATION_TRIGGER] {
        let result = engine
            .submit_with_hook(&mut session, input, |stage| async move {
                println!("[stage] {stage}");
            })
            .await;
        println!(
            "stage={:?} reply_ms={:?} error={:?}",
            result.stage, result.timings.reply_ms, result.error
        );
    }

    println!("\n--- transcript ({}) ---", session.session_id().as_str());
    for message in session.history() {
        let who = match message.sender {
            Sender::User => "you",
            Sender::Bot => "bot",
        };
        println!("[{who}] {}", message.text);
    }

    let ticket = TicketDetails::load_from(store.as_ref());
    println!("\n--- ticket ---");
    println!("{} @ {}", ticket.event, ticket.venue);
    println!("{} {} | {} | {}", ticket.date, ticket.time, ticket.seat, ticket.price);
    println!("booking id: {}", ticket.booking_id);
    println!("(slot file: {})", store.path().display());

    Ok(())
}
