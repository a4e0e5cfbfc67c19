//! AI coach chat client.
//!
//! Wraps the Gemini streaming API behind a conversation that grounds every
//! answer in the athlete's workout archive. Failures never surface to the
//! caller as errors; the stream degrades to a fixed offline message.

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod gemini;
pub mod prompt;

pub use gemini::{CoachError, GeminiClient};

use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};

use futures_util::{Stream, StreamExt, stream};
use log::warn;

use bloomfit_domain::Workout;

/// Shown instead of a model response whenever the API cannot be reached.
pub const FALLBACK_MESSAGE: &str =
    "Entrenador desconectado. Revisa tu conexión a la red de BloomFit.";

pub type CoachStream = Pin<Box<dyn Stream<Item = String> + Send>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Whether a chat input is worth sending at all.
#[must_use]
pub fn is_sendable(text: &str) -> bool {
    !text.trim().is_empty()
}

/// A conversation with the coach. The persona is fixed; every user turn is
/// wrapped in a context prompt carrying the recent workout history.
pub struct CoachSession {
    client: GeminiClient,
    history: Arc<Mutex<Vec<ChatMessage>>>,
}

impl CoachSession {
    #[must_use]
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            history: Arc::new(Mutex::new(vec![ChatMessage::system(
                prompt::SYSTEM_INSTRUCTION,
            )])),
        }
    }

    #[must_use]
    pub fn history(&self) -> Vec<ChatMessage> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sends a consultation and returns the response as a stream of text
    /// chunks. On any request failure the stream yields the offline fallback
    /// message instead. The full response is appended to the conversation
    /// history once the stream is exhausted.
    pub async fn send_message_stream(&self, message: &str, archive: &[Workout]) -> CoachStream {
        let messages = {
            let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
            history.push(ChatMessage::user(prompt::context_prompt(message, archive)));
            history.clone()
        };

        let inner = match self.client.stream_generate(&messages).await {
            Ok(stream) => stream,
            Err(err) => {
                warn!("coach request failed: {err}");
                self.record_response(FALLBACK_MESSAGE.to_string());
                return Box::pin(stream::once(async { FALLBACK_MESSAGE.to_string() }));
            }
        };

        let history = Arc::clone(&self.history);
        Box::pin(stream::unfold(
            (inner, String::new(), history),
            |(mut inner, mut response, history)| async move {
                match inner.next().await {
                    Some(chunk) => {
                        response.push_str(&chunk);
                        Some((chunk, (inner, response, history)))
                    }
                    None => {
                        if !response.is_empty() {
                            history
                                .lock()
                                .unwrap_or_else(PoisonError::into_inner)
                                .push(ChatMessage::assistant(response));
                        }
                        None
                    }
                }
            },
        ))
    }

    fn record_response(&self, content: String) {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ChatMessage::assistant(content));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn unreachable_session() -> CoachSession {
        // Nothing listens on the discard port, connections are refused at once.
        CoachSession::new(GeminiClient::new("test-key").with_base_url("http://127.0.0.1:9"))
    }

    #[rstest]
    #[case("¿Cómo va mi progreso?", true)]
    #[case("a", true)]
    #[case("", false)]
    #[case("   \n\t", false)]
    fn test_is_sendable(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_sendable(text), expected);
    }

    #[test]
    fn test_new_session_starts_with_persona() {
        let session = CoachSession::new(GeminiClient::new("test-key"));
        let history = session.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].role, MessageRole::System);
        assert!(history[0].content.starts_with("Eres BloomFit AI"));
    }

    #[tokio::test]
    async fn test_unreachable_api_yields_fallback() {
        let session = unreachable_session();

        let stream = session.send_message_stream("¿Qué tal mi semana?", &[]).await;
        let chunks = stream.collect::<Vec<_>>().await;

        assert_eq!(chunks, vec![FALLBACK_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_missing_api_key_yields_fallback() {
        let client = GeminiClient::from_env().with_base_url("http://127.0.0.1:9");
        let session = CoachSession::new(client);

        let stream = session.send_message_stream("hola", &[]).await;
        let chunks = stream.collect::<Vec<_>>().await;

        assert_eq!(chunks, vec![FALLBACK_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_history_grows_by_one_exchange() {
        let session = unreachable_session();

        let stream = session.send_message_stream("¿Subo peso?", &[]).await;
        let _chunks = stream.collect::<Vec<_>>().await;

        let history = session.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].role, MessageRole::User);
        assert!(history[1].content.contains("Consulta del Atleta: \"¿Subo peso?\""));
        assert_eq!(history[2].role, MessageRole::Assistant);
        assert_eq!(history[2].content, FALLBACK_MESSAGE);
    }
}
