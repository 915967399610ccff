//! The chat session wrapper: one lazily-created hosted session per
//! assistant, one send operation, and a closed error-to-fallback mapping so
//! the calling surface never sees a failure as anything but a reply string.

use async_trait::async_trait;
use tracing::{debug, warn};

use lumi_gemini::{ChatSession, GeminiClient, GeminiError};

use crate::config::AssistantConfig;
use crate::persona;

/// A live conversation handle the assistant can push turns through.
#[async_trait]
pub trait SessionBackend: Send {
    async fn send(&mut self, message: &str) -> Result<String, GeminiError>;
}

#[async_trait]
impl SessionBackend for ChatSession {
    async fn send(&mut self, message: &str) -> Result<String, GeminiError> {
        self.send_message(message).await
    }
}

/// Builds the session on first use. Injected so tests can substitute a
/// scripted backend for the hosted service.
pub trait SessionConnector: Send {
    type Session: SessionBackend;

    fn connect(&self) -> Result<Self::Session, GeminiError>;
}

/// Production connector: a Gemini chat session configured with the fixed
/// persona and model. A missing credential is replaced with a placeholder so
/// construction cannot fail on configuration alone; the hosted call rejects
/// the placeholder and the send path degrades to the fallback string.
pub struct GeminiConnector {
    config: AssistantConfig,
}

impl GeminiConnector {
    pub fn new(config: AssistantConfig) -> Self {
        Self { config }
    }
}

impl SessionConnector for GeminiConnector {
    type Session = ChatSession;

    fn connect(&self) -> Result<ChatSession, GeminiError> {
        let api_key = self
            .config
            .api_key
            .clone()
            .unwrap_or_else(|| persona::PLACEHOLDER_API_KEY.to_string());

        let mut client = GeminiClient::new(api_key)?;
        if let Some(base_url) = &self.config.base_url {
            client = client.with_base_url(base_url.clone());
        }

        client
            .start_chat()
            .model(self.config.model.as_str())
            .system(persona::SYSTEM_INSTRUCTION)
            .build()
    }
}

/// The LUMI assistant. Owns at most one live session, created on the first
/// send and reused afterwards; holds no transcript of its own.
pub struct Assistant<C: SessionConnector> {
    connector: C,
    session: Option<C::Session>,
}

/// The production assistant type.
pub type GeminiAssistant = Assistant<GeminiConnector>;

impl Assistant<GeminiConnector> {
    pub fn new(config: AssistantConfig) -> Self {
        Self::with_connector(GeminiConnector::new(config))
    }
}

impl<C: SessionConnector> Assistant<C> {
    pub fn with_connector(connector: C) -> Self {
        Self {
            connector,
            session: None,
        }
    }

    /// Relay one user message and return the reply text.
    ///
    /// Always returns a string and never fails: any transport, credential or
    /// service error comes back as the connectivity fallback, and a reply
    /// with no text comes back as the interrupted fallback. Successful
    /// replies are returned unmodified. One attempt per call; resubmitting
    /// is the caller's retry path.
    pub async fn send_message(&mut self, text: &str) -> String {
        match self.dispatch(text).await {
            Ok(reply) => reply,
            Err(error) => fallback_for(&error).to_string(),
        }
    }

    /// The fallible send underneath [`send_message`](Self::send_message);
    /// the transcript layer uses this to mark fallback lines.
    pub(crate) async fn dispatch(&mut self, text: &str) -> Result<String, GeminiError> {
        let outcome = match self.ensure_session() {
            Ok(session) => session.send(text).await,
            Err(error) => Err(error),
        };

        if let Err(error) = &outcome {
            warn!(error = %error, "assistant turn failed, substituting fallback");
        }

        outcome
    }

    /// Reuse the existing session or build one. A connect failure leaves the
    /// slot empty so the next send attempts a fresh connect.
    fn ensure_session(&mut self) -> Result<&mut C::Session, GeminiError> {
        if self.session.is_none() {
            let session = self.connector.connect()?;
            debug!("chat session established");
            self.session = Some(session);
        }

        self.session
            .as_mut()
            .ok_or_else(|| GeminiError::internal("session missing after initialization"))
    }
}

/// The closed failure-to-fallback mapping: exactly two user-visible
/// non-success outcomes exist, both ordinary strings.
pub(crate) fn fallback_for(error: &GeminiError) -> &'static str {
    match error {
        GeminiError::EmptyResponse { .. } => persona::EMPTY_REPLY_FALLBACK,
        _ => persona::CONNECTIVITY_FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_response_maps_to_interrupted_fallback() {
        let error = GeminiError::empty_response("no candidates");
        assert_eq!(fallback_for(&error), persona::EMPTY_REPLY_FALLBACK);
    }

    #[test]
    fn every_other_error_maps_to_connectivity_fallback() {
        let errors = vec![
            GeminiError::authentication("bad key"),
            GeminiError::rate_limit("slow down", Some(30)),
            GeminiError::invalid_request("bad payload"),
            GeminiError::api_error(503, "overloaded".to_string()),
            GeminiError::internal("unexpected"),
        ];

        for error in errors {
            assert_eq!(fallback_for(&error), persona::CONNECTIVITY_FALLBACK);
        }
    }

    #[test]
    fn gemini_connector_builds_a_session_without_a_credential() {
        let connector = GeminiConnector::new(AssistantConfig::default());
        assert!(connector.connect().is_ok());
    }
}
