//! Relay client: sends one built prompt per user action and renders the reply as panel text.
//!
//! The transport is a trait so the panel logic can be exercised without a running relay.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::prep::actions::Action;
use crate::prep::prompts::{THINKING, UNREACHABLE};

pub const DEFAULT_RELAY_URL: &str = "http://localhost:3001/api/generate";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("relay request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Relay reply as seen by the front-end. Read the same way whatever the HTTP status.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayReply {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RelayReply {
    /// Text written into the panel's output area.
    pub fn render(&self) -> String {
        match self.answer.as_deref() {
            Some(answer) if !answer.is_empty() => answer.to_string(),
            _ => {
                let reason = self
                    .error
                    .as_deref()
                    .filter(|e| !e.is_empty())
                    .unwrap_or("Unknown error");
                format!("Error: {reason}")
            }
        }
    }
}

#[async_trait]
pub trait RelayTransport: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<RelayReply, TransportError>;
}

/// Talks to a running relay over HTTP.
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Result<Self, TransportError> {
        Ok(Self {
            client: Client::builder().build()?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RelayTransport for HttpTransport {
    async fn generate(&self, prompt: &str) -> Result<RelayReply, TransportError> {
        debug!("POST {}", self.url);
        let reply = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "prompt": prompt }))
            .send()
            .await?
            .json::<RelayReply>()
            .await?;
        Ok(reply)
    }
}

/// Runs one panel action end to end and returns the text for its output area.
///
/// Blank required input short-circuits with the panel's message and no relay call.
/// `on_pending` receives the placeholder shown while the relay is working.
pub async fn run<T, F>(action: &Action, transport: &T, mut on_pending: F) -> String
where
    T: RelayTransport + ?Sized,
    F: FnMut(&str),
{
    let prompt = match action.build_prompt() {
        Ok(prompt) => prompt,
        Err(blank) => return blank.to_string(),
    };

    on_pending(THINKING);

    match transport.generate(&prompt).await {
        Ok(reply) => reply.render(),
        Err(e) => {
            error!("{e}");
            UNREACHABLE.to_string()
        }
    }
}
