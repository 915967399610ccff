//! Stateful multi-turn chat on top of the one-shot `generateContent` call.
//!
//! The hosted API is itself stateless; a [`ChatSession`] owns the turn
//! history and replays it on every call, which is what the hosted "chat"
//! abstraction does under the hood.

use tracing::debug;

use crate::client::GeminiClient;
use crate::error::GeminiError;
use crate::types::{Content, GenerateContentRequest, GenerationConfig};

/// Builder for a [`ChatSession`]. Obtained from [`GeminiClient::start_chat`].
pub struct ChatBuilder {
    client: GeminiClient,
    model: Option<String>,
    system_instruction: Option<String>,
    generation_config: GenerationConfig,
}

impl ChatBuilder {
    pub(crate) fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: None,
            system_instruction: None,
            generation_config: GenerationConfig::default(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn system(mut self, text: impl Into<String>) -> Self {
        self.system_instruction = Some(text.into());
        self
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.generation_config.temperature = Some(temp);
        self
    }

    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.generation_config.max_output_tokens = Some(tokens);
        self
    }

    pub fn build(self) -> Result<ChatSession, GeminiError> {
        let model = self
            .model
            .ok_or_else(|| GeminiError::invalid_request("Model is required"))?;

        Ok(ChatSession {
            client: self.client,
            model,
            system_instruction: self.system_instruction,
            generation_config: self.generation_config,
            history: Vec::new(),
        })
    }
}

/// An ongoing conversation with a fixed model and system instruction.
///
/// Turns are committed to the session history only after the service returns
/// a reply with text, so a failed call leaves the session exactly as it was
/// and resubmitting the same message does not duplicate turns.
pub struct ChatSession {
    client: GeminiClient,
    model: String,
    system_instruction: Option<String>,
    generation_config: GenerationConfig,
    history: Vec<Content>,
}

impl ChatSession {
    /// Send the next user turn and return the model's reply text.
    ///
    /// A successful HTTP exchange that carries no usable text (empty
    /// candidate list, safety-blocked candidate, text-less parts) is
    /// [`GeminiError::EmptyResponse`].
    pub async fn send_message(&mut self, message: &str) -> Result<String, GeminiError> {
        let mut contents = self.history.clone();
        contents.push(Content::user(message));

        let request = GenerateContentRequest {
            contents,
            system_instruction: self
                .system_instruction
                .as_deref()
                .map(Content::user),
            generation_config: Some(self.generation_config.clone()),
        };

        let response = self.client.generate_content(&self.model, &request).await?;

        let reply = response.text().ok_or_else(|| {
            let reason = response
                .prompt_feedback
                .as_ref()
                .and_then(|feedback| feedback.block_reason.as_deref())
                .unwrap_or("no text in candidates");
            GeminiError::empty_response(format!("Model returned no reply text: {}", reason))
        })?;

        self.history.push(Content::user(message));
        self.history.push(Content::model(reply.clone()));
        debug!(turns = self.history.len(), "chat turn committed");

        Ok(reply)
    }

    /// The committed turns so far, oldest first.
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_model() {
        let client = GeminiClient::new("test-key").unwrap();
        let session = client.start_chat().system("Be brief.").build();
        assert!(matches!(
            session,
            Err(GeminiError::InvalidRequest { .. })
        ));
    }

    #[test]
    fn new_session_has_empty_history() {
        let client = GeminiClient::new("test-key").unwrap();
        let session = client
            .start_chat()
            .model("gemini-3-flash-preview")
            .system("Be brief.")
            .build()
            .unwrap();

        assert!(session.history().is_empty());
        assert_eq!(session.model(), "gemini-3-flash-preview");
    }
}
