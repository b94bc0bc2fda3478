//! LINE Messaging API plumbing: webhook signature check, inbound event
//! payloads, outbound reply messages and the reply client.

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::Sha256;

use crate::fallback::QuickReplyChip;

pub const SIGNATURE_HEADER: &str = "x-line-signature";
pub const REPLY_ENDPOINT: &str = "https://api.line.me/v2/bot/message/reply";

type HmacSha256 = Hmac<Sha256>;

/// Checks `x-line-signature`: base64 HMAC-SHA256 of the raw body keyed by the
/// channel secret. Comparison is constant time.
pub fn verify_signature(channel_secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = BASE64_STANDARD.decode(signature.trim()) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(channel_secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

/// Produces the signature LINE would send for `body`.
pub fn sign(channel_secret: &str, body: &[u8]) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes())
        .map_err(|err| anyhow!("invalid channel secret: {err}"))?;
    mac.update(body);
    Ok(BASE64_STANDARD.encode(mac.finalize().into_bytes()))
}

#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    #[serde(rename_all = "camelCase")]
    Message {
        #[serde(default)]
        reply_token: Option<String>,
        message: MessageContent,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MessageContent {
    Text {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        text: Option<String>,
    },
    #[serde(other)]
    Other,
}

impl Event {
    /// Reply token and text of a text message event. A missing text reads as empty.
    pub fn text_message(&self) -> Option<(&str, &str)> {
        match self {
            Event::Message {
                reply_token: Some(token),
                message: MessageContent::Text { text, .. },
            } => Some((token.as_str(), text.as_deref().unwrap_or(""))),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMessage {
    #[serde(rename = "type")]
    kind: &'static str,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_reply: Option<QuickReply>,
}

impl TextMessage {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: "text",
            text: text.into(),
            quick_reply: None,
        }
    }

    pub fn with_quick_replies(text: impl Into<String>, chips: &[QuickReplyChip]) -> Self {
        Self {
            quick_reply: Some(QuickReply {
                items: chips.iter().map(QuickReplyItem::from).collect(),
            }),
            ..Self::plain(text)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickReply {
    pub items: Vec<QuickReplyItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickReplyItem {
    #[serde(rename = "type")]
    kind: &'static str,
    pub action: MessageAction,
}

/// Tapping the chip sends `text` back as the user's next message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageAction {
    #[serde(rename = "type")]
    kind: &'static str,
    pub label: String,
    pub text: String,
}

impl From<&QuickReplyChip> for QuickReplyItem {
    fn from(chip: &QuickReplyChip) -> Self {
        Self {
            kind: "action",
            action: MessageAction {
                kind: "message",
                label: chip.label.to_string(),
                text: chip.text.to_string(),
            },
        }
    }
}

#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn reply(&self, reply_token: &str, messages: &[TextMessage]) -> Result<()>;
}

pub struct LineClient {
    http: reqwest::Client,
    access_token: String,
    endpoint: String,
}

impl LineClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_token: access_token.into(),
            endpoint: REPLY_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl ReplySender for LineClient {
    async fn reply(&self, reply_token: &str, messages: &[TextMessage]) -> Result<()> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(&json!({
                "replyToken": reply_token,
                "messages": messages,
            }))
            .send()
            .await
            .context("send LINE reply request")?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("LINE reply API error: {status} {body}");
        }
        Ok(())
    }
}
