//! Server configuration, read from environment variables.

use crate::prompt::Persona;
use std::net::SocketAddr;

/// Configuration for the Uranai server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP API listen address
    pub api_addr: SocketAddr,

    /// Persona used for AI prompt templates
    pub persona: Persona,

    /// Generative-text provider; `None` disables the AI feature and every
    /// analysis is served from the local fallback tables.
    pub ai: Option<AiConfig>,
}

/// Outbound generative-text provider settings.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl AiConfig {
    /// Full generateContent URL for the configured model.
    pub fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ServerConfig {
    /// Create config from environment variables with sensible defaults.
    ///
    /// The AI feature is enabled by the presence of `GEMINI_API_KEY`,
    /// matching how the feature flag is derived everywhere else.
    pub fn from_env() -> Self {
        let api_addr = std::env::var("URANAI_API_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid URANAI_API_ADDR");

        let persona = std::env::var("URANAI_PERSONA")
            .ok()
            .map(|s| s.parse().expect("Invalid URANAI_PERSONA"))
            .unwrap_or(Persona::Warm);

        let ai = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(|api_key| AiConfig {
                api_key,
                base_url: std::env::var("URANAI_AI_BASE_URL").unwrap_or_else(|_| {
                    "https://generativelanguage.googleapis.com/v1beta".to_string()
                }),
                model: std::env::var("URANAI_AI_MODEL")
                    .unwrap_or_else(|_| "gemini-2.0-flash-exp".to_string()),
            });

        Self {
            api_addr,
            persona,
            ai,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_includes_model_and_key() {
        let ai = AiConfig {
            api_key: "k123".to_string(),
            base_url: "https://example.test/v1".to_string(),
            model: "test-model".to_string(),
        };
        assert_eq!(
            ai.api_url(),
            "https://example.test/v1/models/test-model:generateContent?key=k123"
        );
    }
}
