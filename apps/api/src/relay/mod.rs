// Relay Service: one prompt in, one answer out.
// Upstream calls go through llm_client; nothing here talks HTTP to a provider directly.

pub mod handlers;
pub mod models;

use crate::config::Config;
use crate::llm_client::{LlmClient, LlmError, Provider, RelayMode};

/// Fixed reply served in mock mode, without any network call.
pub const MOCK_ANSWER: &str = "MOCK MODE: Please provide an 'sk-...' or 'gsk_...' key.";

/// Number of prompt characters echoed in the per-request log line.
const PROMPT_PREVIEW_CHARS: usize = 40;

/// The answering backend, fixed for the lifetime of the process.
#[derive(Clone)]
pub enum Relay {
    Live { provider: Provider, client: LlmClient },
    Mock,
}

impl Relay {
    /// Resolves the mode from the configured credential and builds the matching backend.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        match RelayMode::detect(&config.openai_api_key) {
            RelayMode::Live(provider) => Ok(Relay::Live {
                provider,
                client: LlmClient::new(config.openai_api_key.clone(), provider)?,
            }),
            RelayMode::Mock => Ok(Relay::Mock),
        }
    }

    pub fn mode(&self) -> RelayMode {
        match self {
            Relay::Live { provider, .. } => RelayMode::Live(*provider),
            Relay::Mock => RelayMode::Mock,
        }
    }

    pub async fn answer(&self, prompt: &str) -> Result<String, LlmError> {
        match self {
            Relay::Live { client, .. } => client.complete(prompt).await,
            Relay::Mock => Ok(MOCK_ANSWER.to_string()),
        }
    }
}

/// First few characters of a prompt, cut on a char boundary.
pub fn prompt_preview(prompt: &str) -> &str {
    match prompt.char_indices().nth(PROMPT_PREVIEW_CHARS) {
        Some((idx, _)) => &prompt[..idx],
        None => prompt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> Config {
        Config {
            openai_api_key: key.to_string(),
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_from_config_follows_credential_prefix() {
        let relay = Relay::from_config(&config_with_key("gsk_test")).unwrap();
        assert_eq!(relay.mode(), RelayMode::Live(Provider::Groq));

        let relay = Relay::from_config(&config_with_key("sk-test")).unwrap();
        assert_eq!(relay.mode(), RelayMode::Live(Provider::OpenAi));

        let relay = Relay::from_config(&config_with_key("not-a-key")).unwrap();
        assert_eq!(relay.mode(), RelayMode::Mock);
    }

    #[tokio::test]
    async fn test_mock_answers_with_canned_text() {
        let answer = Relay::Mock.answer("anything at all").await.unwrap();
        assert_eq!(answer, MOCK_ANSWER);
    }

    #[test]
    fn test_prompt_preview_truncates_to_forty_chars() {
        let prompt = "a".repeat(100);
        assert_eq!(prompt_preview(&prompt).len(), 40);
        assert_eq!(prompt_preview("short"), "short");
    }

    #[test]
    fn test_prompt_preview_respects_multibyte_chars() {
        let prompt = "é".repeat(50);
        let preview = prompt_preview(&prompt);
        assert_eq!(preview.chars().count(), 40);
        assert_eq!(preview.len(), 80);
    }
}
