//! LUMI, the resident assistant of the MKA portfolio.
//!
//! The assistant wraps a single Gemini chat session behind a deliberately
//! small contract: sending a message always yields a reply string. Failures
//! surface as one of two in-character fallback lines instead of errors, so a
//! rendering layer never needs an error path of its own. The crate also
//! carries the static portfolio content the assistant speaks for.
//!
//! ```no_run
//! use lumi_assistant::{Assistant, AssistantConfig};
//!
//! # async fn run() {
//! let mut assistant = Assistant::new(AssistantConfig::from_env());
//! let reply = assistant.send_message("What is Nebula Stream?").await;
//! println!("{reply}");
//! # }
//! ```

pub mod assistant;
pub mod config;
pub mod persona;
pub mod portfolio;
pub mod transcript;

pub use assistant::{
    Assistant, GeminiAssistant, GeminiConnector, SessionBackend, SessionConnector,
};
pub use config::AssistantConfig;
pub use transcript::{ChatMessage, ChatRole, Conversation};
