//! Provider selection from the configured credential.

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

pub const OPENAI_MODEL: &str = "gpt-4o-mini";
pub const GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// An upstream chat-completions provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Groq,
}

impl Provider {
    pub fn base_url(&self) -> &'static str {
        match self {
            Provider::OpenAi => OPENAI_BASE_URL,
            Provider::Groq => GROQ_BASE_URL,
        }
    }

    pub fn model(&self) -> &'static str {
        match self {
            Provider::OpenAi => OPENAI_MODEL,
            Provider::Groq => GROQ_MODEL,
        }
    }
}

/// How the relay answers prompts. Resolved once at startup, read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayMode {
    Live(Provider),
    /// No recognised credential: every request gets a canned answer.
    Mock,
}

impl RelayMode {
    /// Pure function of the credential string.
    pub fn detect(api_key: &str) -> Self {
        if api_key.starts_with("sk-") {
            RelayMode::Live(Provider::OpenAi)
        } else if api_key.starts_with("gsk_") {
            RelayMode::Live(Provider::Groq)
        } else {
            RelayMode::Mock
        }
    }

    /// Human-readable mode for the startup log and health endpoint.
    pub fn label(&self) -> &'static str {
        match self {
            RelayMode::Live(Provider::OpenAi) => "OpenAI",
            RelayMode::Live(Provider::Groq) => "Groq (Llama 3.3)",
            RelayMode::Mock => "MOCK",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sk_prefix_selects_openai() {
        let mode = RelayMode::detect("sk-proj-123");
        assert_eq!(mode, RelayMode::Live(Provider::OpenAi));
        assert_eq!(Provider::OpenAi.model(), "gpt-4o-mini");
        assert_eq!(Provider::OpenAi.base_url(), "https://api.openai.com/v1");
    }

    #[test]
    fn test_gsk_prefix_selects_groq() {
        let mode = RelayMode::detect("gsk_test");
        assert_eq!(mode, RelayMode::Live(Provider::Groq));
        assert_eq!(Provider::Groq.model(), "llama-3.3-70b-versatile");
        assert_eq!(Provider::Groq.base_url(), "https://api.groq.com/openai/v1");
    }

    #[test]
    fn test_unrecognised_keys_select_mock() {
        for key in ["", "abc", "SK-upper", "gsk-dash", " sk-leading-space", "sk", "gsk"] {
            assert_eq!(RelayMode::detect(key), RelayMode::Mock, "key {key:?}");
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(RelayMode::Live(Provider::OpenAi).label(), "OpenAI");
        assert_eq!(RelayMode::Live(Provider::Groq).label(), "Groq (Llama 3.3)");
        assert_eq!(RelayMode::Mock.label(), "MOCK");
    }
}
