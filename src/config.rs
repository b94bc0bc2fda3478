use std::env;

use tracing::warn;

pub const ACCESS_TOKEN_VAR: &str = "CHANNEL_ACCESS_TOKEN";
pub const CHANNEL_SECRET_VAR: &str = "CHANNEL_SECRET";

/// LINE channel credentials. Both values are required to process webhooks.
#[derive(Clone)]
pub struct Credentials {
    pub access_token: String,
    pub channel_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("channel_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Reads credentials from the environment. Missing values disable webhook
    /// processing instead of stopping the process.
    pub fn from_env() -> Option<Self> {
        let credentials = Self::from_values(
            env::var(ACCESS_TOKEN_VAR).ok(),
            env::var(CHANNEL_SECRET_VAR).ok(),
        );
        if credentials.is_none() {
            warn!(
                "{ACCESS_TOKEN_VAR} or {CHANNEL_SECRET_VAR} not set; /callback will answer 500 until both are configured"
            );
        }
        credentials
    }

    pub fn from_values(
        access_token: Option<String>,
        channel_secret: Option<String>,
    ) -> Option<Self> {
        Some(Self {
            access_token: non_blank(access_token)?,
            channel_secret: non_blank(channel_secret)?,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
