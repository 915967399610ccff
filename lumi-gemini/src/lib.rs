//! # lumi-gemini
//!
//! A minimal client for the Google Gemini `generateContent` API, carrying
//! exactly what the LUMI portfolio assistant needs: one-shot generation and
//! a stateful [`ChatSession`] that replays the conversation on every call.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lumi_gemini::{models, GeminiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::new(std::env::var("GEMINI_API_KEY")?)?;
//!     let mut chat = client
//!         .start_chat()
//!         .model(models::GEMINI_3_FLASH)
//!         .system("You are a concise portfolio concierge.")
//!         .build()?;
//!
//!     let reply = chat.send_message("What does Karim build?").await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod client;
pub mod error;
pub mod models;
pub mod types;

pub use chat::{ChatBuilder, ChatSession};
pub use client::GeminiClient;
pub use error::GeminiError;
