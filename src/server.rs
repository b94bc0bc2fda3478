use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use dept_lookup::Mapping;
use serde_json::json;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::Credentials;
use crate::line::{LineClient, ReplySender, SIGNATURE_HEADER, WebhookPayload, verify_signature};
use crate::reply::respond;

/// Webhook bodies are small JSON documents; anything larger is rejected.
pub const MAX_BODY_SIZE: usize = 65_536;

#[derive(Clone)]
pub struct AppState {
    pub mapping: Arc<Mapping>,
    /// `None` when credentials are missing; `/callback` then answers 500.
    pub channel: Option<Arc<LineChannel>>,
}

pub struct LineChannel {
    pub channel_secret: String,
    pub sender: Arc<dyn ReplySender>,
}

impl AppState {
    pub fn new(mapping: Mapping, credentials: Option<Credentials>) -> Self {
        let channel = credentials.map(|credentials| {
            Arc::new(LineChannel {
                channel_secret: credentials.channel_secret,
                sender: Arc::new(LineClient::new(credentials.access_token)),
            })
        });
        Self {
            mapping: Arc::new(mapping),
            channel,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/callback", post(handle_callback))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(host: &str, port: u16, state: AppState) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid listen address {host}:{port}"))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, records = state.mapping.len(), "webhook server listening");
    axum::serve(listener, router(state))
        .await
        .context("webhook server stopped")?;
    Ok(())
}

/// GET /health
async fn handle_health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// POST /callback
async fn handle_callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(channel) = state.channel.as_ref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            "LINE credentials not configured.",
        )
            .into_response();
    };

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    if !verify_signature(&channel.channel_secret, &body, signature) {
        warn!(
            "webhook signature verification failed (signature: {})",
            if signature.is_empty() { "missing" } else { "invalid" }
        );
        return (StatusCode::BAD_REQUEST, "Invalid signature").into_response();
    }

    let payload: WebhookPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("invalid webhook payload: {err}");
            return (StatusCode::BAD_REQUEST, "Invalid payload").into_response();
        }
    };

    for event in &payload.events {
        let Some((reply_token, text)) = event.text_message() else {
            continue;
        };
        let message = respond(&state.mapping, text);
        if let Err(err) = channel.sender.reply(reply_token, &[message]).await {
            error!("failed to send LINE reply: {err:#}");
        }
    }

    (StatusCode::OK, "OK").into_response()
}
