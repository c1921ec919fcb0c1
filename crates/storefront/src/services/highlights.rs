//! AI marketing-copy generation via an OpenAI-compatible chat API.
//!
//! Generates three short selling points for a product from its name and
//! description. The model is asked for strict JSON; because LLM output is
//! not reliably well-formed, [`parse_highlights`] tolerates the common
//! near-miss shapes (nested object, bare array) before giving up.
//!
//! Generated copy never changes for a given product within a process
//! lifetime: successful results are cached by product id so repeat views
//! do not re-spend tokens.

use std::sync::Arc;

use moka::future::Cache;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::config::HighlightsConfig;

/// Upper bound on cached products; the catalog is a single page.
const CACHE_CAPACITY: u64 = 1_000;

/// Errors that can occur when generating highlights.
#[derive(Debug, Error)]
pub enum HighlightsError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the API response envelope.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The model produced output with no usable highlights in it.
    #[error("Malformed model output: {0}")]
    Malformed(String),
}

/// Client for the highlight generation API.
#[derive(Clone)]
pub struct HighlightsClient {
    inner: Arc<HighlightsClientInner>,
}

struct HighlightsClientInner {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    cache: Cache<String, Vec<String>>,
}

impl HighlightsClient {
    /// Create a new highlights client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &HighlightsConfig) -> Result<Self, HighlightsError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.api_key.expose_secret());
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&auth_value)
                .map_err(|e| HighlightsError::Parse(format!("Invalid API key format: {e}")))?,
        );
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let cache = Cache::builder().max_capacity(CACHE_CAPACITY).build();

        Ok(Self {
            inner: Arc::new(HighlightsClientInner {
                client,
                endpoint: format!("{}/chat/completions", config.base_url),
                model: config.model.clone(),
                cache,
            }),
        })
    }

    /// Generate highlights for a product.
    ///
    /// `cache_key` is the product id when the caller has one; requests
    /// without a key skip the cache entirely.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails or the model output cannot be
    /// recovered into a list of highlights.
    #[instrument(skip(self, description, tags))]
    pub async fn generate(
        &self,
        name: &str,
        description: &str,
        tags: &[String],
        cache_key: Option<&str>,
    ) -> Result<Vec<String>, HighlightsError> {
        if let Some(key) = cache_key
            && let Some(cached) = self.inner.cache.get(key).await
        {
            tracing::debug!("Cache hit for highlights");
            return Ok(cached);
        }

        let highlights = self.request_highlights(name, description, tags).await?;

        if let Some(key) = cache_key
            && !highlights.is_empty()
        {
            self.inner
                .cache
                .insert(key.to_string(), highlights.clone())
                .await;
        }

        Ok(highlights)
    }

    async fn request_highlights(
        &self,
        name: &str,
        description: &str,
        tags: &[String],
    ) -> Result<Vec<String>, HighlightsError> {
        let mut prompt = format!(
            "Write exactly 3 short, persuasive selling points for this product. \
             Each must be at most 15 words. \
             Respond with a JSON object of the form \
             {{\"highlights\": [\"...\", \"...\", \"...\"]}}.\n\n\
             Product name: {name}\nProduct description: {description}"
        );
        if !tags.is_empty() {
            prompt.push_str("\nProduct tags: ");
            prompt.push_str(&tags.join(", "));
        }

        let body = ChatRequest {
            model: &self.inner.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a marketing copywriter for an e-commerce store. \
                              Respond with valid JSON only."
                        .to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .json(&body)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(HighlightsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| HighlightsError::Parse(e.to_string()))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| HighlightsError::Parse("No choices in response".to_string()))?;

        parse_highlights(&content)
    }
}

/// Extract a highlight list from model output.
///
/// Accepts, in order of preference:
/// 1. `{"highlights": ["...", ...]}` (the requested shape)
/// 2. an object whose first value is either a string array or an object
///    containing a `highlights` array (models sometimes nest or rename)
/// 3. a bare `["...", ...]` array
///
/// # Errors
///
/// Returns [`HighlightsError::Malformed`] when no string array can be
/// recovered.
pub fn parse_highlights(content: &str) -> Result<Vec<String>, HighlightsError> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| HighlightsError::Malformed(format!("not JSON: {e}")))?;

    if let Some(highlights) = value.get("highlights").and_then(string_array) {
        return Ok(highlights);
    }

    if let Some(object) = value.as_object() {
        for nested in object.values() {
            if let Some(highlights) = string_array(nested) {
                return Ok(highlights);
            }
            if let Some(highlights) = nested.get("highlights").and_then(string_array) {
                return Ok(highlights);
            }
        }
    }

    if let Some(highlights) = string_array(&value) {
        return Ok(highlights);
    }

    Err(HighlightsError::Malformed(format!(
        "no highlights array in: {}",
        content.chars().take(200).collect::<String>()
    )))
}

/// A JSON value as a non-empty array of strings, if it is one.
fn string_array(value: &serde_json::Value) -> Option<Vec<String>> {
    let array = value.as_array()?;
    if array.is_empty() {
        return None;
    }
    array
        .iter()
        .map(|v| v.as_str().map(ToString::to_string))
        .collect()
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_requested_shape() {
        let highlights =
            parse_highlights(r#"{"highlights": ["Fast shipping", "Great value", "Handmade"]}"#)
                .unwrap();
        assert_eq!(highlights.len(), 3);
        assert_eq!(highlights[0], "Fast shipping");
    }

    #[test]
    fn test_recovers_renamed_key() {
        let highlights =
            parse_highlights(r#"{"selling_points": ["One", "Two", "Three"]}"#).unwrap();
        assert_eq!(highlights, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_recovers_nested_highlights() {
        let highlights =
            parse_highlights(r#"{"result": {"highlights": ["One", "Two"]}}"#).unwrap();
        assert_eq!(highlights, vec!["One", "Two"]);
    }

    #[test]
    fn test_recovers_bare_array() {
        let highlights = parse_highlights(r#"["One", "Two", "Three"]"#).unwrap();
        assert_eq!(highlights.len(), 3);
    }

    #[test]
    fn test_rejects_non_json() {
        let err = parse_highlights("Sure! Here are three highlights:").unwrap_err();
        assert!(matches!(err, HighlightsError::Malformed(_)));
    }

    #[test]
    fn test_rejects_non_string_array() {
        let err = parse_highlights(r#"{"highlights": [1, 2, 3]}"#).unwrap_err();
        assert!(matches!(err, HighlightsError::Malformed(_)));
    }

    #[test]
    fn test_rejects_empty_object() {
        let err = parse_highlights("{}").unwrap_err();
        assert!(matches!(err, HighlightsError::Malformed(_)));
    }
}
