use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::error::ApiError;
use crate::config::FolioConfig;
use crate::contact::{ContactMessage, ContactStore, NewContact};
use crate::intent::{classify, pick_hook};
use crate::memory::ConversationMemory;
use crate::profile::{ContentSource, FileContent, StaticContent, fetch_or_bundled};
use crate::prompt::{PromptContext, compose};
use crate::provider::{self, CompletionProvider, ProviderError, build_messages};
use crate::types::ChatMessage;

pub struct AppState {
    pub config: FolioConfig,
    /// Conversation history for every session. One coarse lock: a request
    /// appends and trims under a single write guard.
    pub memory: RwLock<ConversationMemory>,
    pub contacts: RwLock<ContactStore>,
    pub content: Arc<dyn ContentSource>,
    /// `None` when no API key is configured; chat requests then fail fast.
    pub provider: Option<Arc<dyn CompletionProvider>>,
}

impl AppState {
    /// Build state from config, resolving the content source and provider.
    pub fn from_config(config: FolioConfig) -> anyhow::Result<Self> {
        let content: Arc<dyn ContentSource> = match config.content.profile_path.as_deref() {
            Some(path) => Arc::new(FileContent::new(path)),
            None => Arc::new(StaticContent),
        };

        let provider = match provider::from_config(&config.provider) {
            Ok(p) => Some(Arc::new(p) as Arc<dyn CompletionProvider>),
            Err(e) => {
                warn!("chat disabled until configured: {e}");
                None
            }
        };

        Self::new(config, content, provider)
    }

    pub fn new(
        config: FolioConfig,
        content: Arc<dyn ContentSource>,
        provider: Option<Arc<dyn CompletionProvider>>,
    ) -> anyhow::Result<Self> {
        let memory = ConversationMemory::new(config.memory.max_messages, config.memory.max_age()?);
        Ok(Self {
            config,
            memory: RwLock::new(memory),
            contacts: RwLock::new(ContactStore::new()),
            content,
            provider,
        })
    }
}

pub async fn run(config: FolioConfig) -> anyhow::Result<()> {
    let is_loopback = config.gateway.bind == "127.0.0.1" || config.gateway.bind == "::1";
    let addr = format!("{}:{}", config.gateway.bind, config.gateway.port);

    let state = Arc::new(AppState::from_config(config)?);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("foliobot listening on {addr}");
    if is_loopback {
        info!("bound to loopback — local access only");
    } else {
        warn!("bound to {addr} — reachable from the network");
    }

    axum::serve(listener, app).await?;
    Ok(())
}

/// HTTP routes over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(chat_handler))
        .route("/api/contact", post(create_contact).get(list_contacts))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Body of `POST /api/chat`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    pub session_id: Option<String>,
}

/// Handle a chat turn.
///
/// 1. Fail fast if no provider is configured
/// 2. Classify the latest message
/// 3. Append the request's messages to session memory and trim
/// 4. Fetch profile data (bundled fallback on failure)
/// 5. Compose the system prompt and call the provider
/// 6. Relay the provider's JSON verbatim
async fn chat_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let provider = state
        .provider
        .clone()
        .ok_or(ApiError::Provider(ProviderError::MissingApiKey))?;

    let request: ChatRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let session = request
        .session_id
        .unwrap_or_else(|| state.config.gateway.default_session.clone());
    let latest = request.messages.last().cloned();
    let intent = classify(latest.as_ref().map(|m| m.content.as_str()).unwrap_or(""));

    let now = Utc::now();
    let recent = {
        let mut memory = state.memory.write().await;
        memory.append(&session, request.messages, now);
        memory.trim(&session, now)
    };

    let profile = fetch_or_bundled(state.content.as_ref()).await.into_inner();
    let hook = pick_hook(intent, &mut rand::thread_rng());
    let system_prompt = compose(&PromptContext {
        intent,
        recent: &recent,
        profile: &profile,
        hook,
    });
    let messages = build_messages(&system_prompt, &recent, latest.as_ref());

    info!(
        session = %session,
        %intent,
        memory = recent.len(),
        outbound = messages.len(),
        "forwarding chat request"
    );

    let reply = provider.complete(&messages).await.map_err(|e| {
        warn!(session = %session, "chat provider error: {e}");
        ApiError::from(e)
    })?;
    Ok(Json(reply))
}

async fn create_contact(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let submission: NewContact =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let stored = {
        let mut contacts = state.contacts.write().await;
        contacts.create(submission)?
    };

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "message": "Message sent successfully!",
            "id": stored.id,
        })),
    ))
}

async fn list_contacts(State(state): State<Arc<AppState>>) -> Json<Vec<ContactMessage>> {
    let contacts = state.contacts.read().await;
    Json(contacts.list())
}
