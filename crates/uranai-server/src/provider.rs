//! Outbound call to the generative-text provider.
//!
//! One POST per analysis, no retry, no explicit timeout beyond the
//! transport default. Every failure mode maps to an [`Error`] so the
//! caller can substitute the fallback reading.

use crate::config::AiConfig;
use crate::error::{Error, Result};
use serde_json::{json, Value};

/// Send a prompt to the provider and extract the generated text.
pub async fn generate(client: &reqwest::Client, config: &AiConfig, prompt: &str) -> Result<String> {
    let body = json!({
        "contents": [{
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": {
            "temperature": 0.7,
            "topK": 30,
            "topP": 0.9,
            "maxOutputTokens": 4096,
            "candidateCount": 1
        }
    });

    tracing::debug!(model = %config.model, "sending analysis request to provider");

    let response = client.post(config.api_url()).json(&body).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        tracing::error!(%status, %detail, "provider returned error status");
        return Err(Error::Provider(format!("status {status}")));
    }

    let data: Value = response.json().await?;
    extract_text(&data)
}

/// Pull `candidates[0].content.parts[0].text` out of a provider response.
fn extract_text(data: &Value) -> Result<String> {
    let candidate = data
        .get("candidates")
        .and_then(|c| c.get(0))
        .ok_or_else(|| Error::InvalidResponse("no candidates".to_string()))?;

    // Truncation and safety blocks still carry text, but are worth a trace.
    match candidate.get("finishReason").and_then(Value::as_str) {
        Some("MAX_TOKENS") => tracing::warn!("provider response truncated at max tokens"),
        Some("SAFETY") => tracing::warn!("provider response blocked by safety filters"),
        _ => {}
    }

    candidate
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(Value::as_str)
        .map(|text| text.trim().to_string())
        .ok_or_else(|| Error::InvalidResponse("missing content text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_well_formed_response() {
        let data = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "  a reading  " }] },
                "finishReason": "STOP"
            }]
        });
        assert_eq!(extract_text(&data).unwrap(), "a reading");
    }

    #[test]
    fn missing_candidates_is_an_error() {
        assert!(extract_text(&json!({})).is_err());
        assert!(extract_text(&json!({ "candidates": [] })).is_err());
    }

    #[test]
    fn malformed_content_is_an_error() {
        let data = json!({
            "candidates": [{ "content": { "parts": [] } }]
        });
        assert!(extract_text(&data).is_err());
    }
}
