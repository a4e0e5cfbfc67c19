//! Streaming client for the Gemini generative language API.

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use futures_util::StreamExt;
use log::warn;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{ChatMessage, CoachStream, MessageRole};

const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct StreamingResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(thiserror::Error, Debug)]
pub enum CoachError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub struct GeminiClient {
    api_key: Option<String>,
    client: Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            client: Client::new(),
            base_url: API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Creates a client from the `GEMINI_API_KEY` environment variable. With
    /// the variable unset every consultation degrades to the offline fallback
    /// instead of failing.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(GEMINI_API_KEY_ENV).ok(),
            client: Client::new(),
            base_url: API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends the conversation and returns a stream of response text chunks.
    /// Chunks that cannot be parsed are logged and skipped.
    pub async fn stream_generate(
        &self,
        messages: &[ChatMessage],
    ) -> Result<CoachStream, CoachError> {
        let api_key = self.api_key.as_ref().ok_or(CoachError::MissingApiKey)?;
        let url = format!(
            "{}/models/{}:streamGenerateContent?key={api_key}",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("alt", "sse")])
            .json(&Self::build_request(messages))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CoachError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(Box::pin(response.bytes_stream().filter_map(
            |result| async move {
                match result {
                    Ok(bytes) => {
                        let text = sse_chunk_text(&String::from_utf8_lossy(&bytes));
                        if text.is_empty() { None } else { Some(text) }
                    }
                    Err(err) => {
                        warn!("response stream interrupted: {err}");
                        None
                    }
                }
            },
        )))
    }

    fn build_request(messages: &[ChatMessage]) -> GeminiRequest {
        let mut contents = vec![];
        let mut system_instruction = None;

        for message in messages {
            let content = Content {
                role: match message.role {
                    MessageRole::System => None,
                    MessageRole::User => Some("user".to_string()),
                    MessageRole::Assistant => Some("model".to_string()),
                },
                parts: vec![Part {
                    text: message.content.clone(),
                }],
            };
            if message.role == MessageRole::System {
                system_instruction = Some(content);
            } else {
                contents.push(content);
            }
        }

        GeminiRequest {
            contents,
            system_instruction,
        }
    }
}

impl Debug for GeminiClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// Extracts the response text from one server-sent-event payload. Events are
/// `data: ` lines carrying a JSON-encoded candidate list.
fn sse_chunk_text(payload: &str) -> String {
    let mut text = String::new();
    for line in payload.lines() {
        let Some(data) = line.strip_prefix("data: ") else {
            continue;
        };
        if data.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<StreamingResponse>(data) {
            Ok(response) => {
                let parts = response
                    .candidates
                    .as_ref()
                    .and_then(|c| c.first())
                    .and_then(|c| c.content.as_ref())
                    .map(|c| c.parts.as_slice())
                    .unwrap_or_default();
                for part in parts {
                    text.push_str(&part.text);
                }
            }
            Err(err) => {
                warn!("failed to parse streaming chunk: {err}");
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::single_event(
        "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"Buen \"}]}}]}\n\n",
        "Buen "
    )]
    #[case::two_events(
        "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"volumen\"}]}}]}\n\n\
         data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\" total.\"}]}}]}\n\n",
        "volumen total."
    )]
    #[case::no_candidates("data: {\"candidates\":[]}\n\n", "")]
    #[case::malformed("data: {oops\n\n", "")]
    #[case::not_an_event("retry: 1000\n\n", "")]
    fn test_sse_chunk_text(#[case] payload: &str, #[case] expected: &str) {
        assert_eq!(sse_chunk_text(payload), expected);
    }

    #[test]
    fn test_build_request_separates_system_instruction() {
        let request = GeminiClient::build_request(&[
            ChatMessage::system("persona"),
            ChatMessage::user("hola"),
            ChatMessage::assistant("hola, atleta"),
        ]);

        assert!(request.system_instruction.is_some());
        assert_eq!(request.contents.len(), 2);
        assert_eq!(request.contents[0].role.as_deref(), Some("user"));
        assert_eq!(request.contents[1].role.as_deref(), Some("model"));

        let document = serde_json::to_string(&request).unwrap();
        assert!(document.contains("\"system_instruction\""));
        assert!(document.contains("\"text\":\"hola, atleta\""));
    }
}
