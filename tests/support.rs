#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use dept_responder::line::{ReplySender, TextMessage};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Captures outbound replies instead of calling the LINE API.
#[derive(Default)]
pub struct RecordingSender {
    pub sent: Mutex<Vec<(String, Vec<TextMessage>)>>,
    pub fail: bool,
}

impl RecordingSender {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(String, Vec<TextMessage>)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplySender for RecordingSender {
    async fn reply(&self, reply_token: &str, messages: &[TextMessage]) -> anyhow::Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((reply_token.to_string(), messages.to_vec()));
        if self.fail {
            anyhow::bail!("429 Too Many Requests");
        }
        Ok(())
    }
}
