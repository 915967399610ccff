//! Fixed persona and reply policy for the LUMI assistant, plus the sentinel
//! strings the wrapper substitutes for a reply when the hosted call fails.

use lumi_gemini::models;

/// Display name of the assistant unit.
pub const ASSISTANT_NAME: &str = "LUMI";

/// The one model the assistant runs on.
pub const ASSISTANT_MODEL: &str = models::GEMINI_3_FLASH;

/// System instruction establishing persona, tone and reply-length policy.
pub const SYSTEM_INSTRUCTION: &str = r#"You are LUMI, the AI assistant for Muhammad Karim Anggara's portfolio.
Karim is an "AI Vibe Coder" - a creative technologist.

About Karim:
- Role: AI Vibe Coder / Senior Frontend Engineer.
- Vibe: Cyberpunk, Neon, Futuristic.
- Tech Stack: React, Framer Motion, Google GenAI SDK.

Your Role:
- Answer questions about Karim's skills and projects.
- Be cool, professional but edgy.
- Use emojis like ⚡️, 🧠, 💻, 🚀.
- Keep responses short (under 50 words)."#;

/// Opening line every conversation starts with.
pub const GREETING: &str = "Protocol MKA_LUMI online. How can I assist your discovery process? ⚡️";

/// Returned in place of a reply for any transport, credential or service
/// failure, including a failed session setup.
pub const CONNECTIVITY_FALLBACK: &str =
    "Connection instability detected. Please ensure GEMINI_API_KEY is set in the environment.";

/// Returned when the service answered but the payload carried no text.
pub const EMPTY_REPLY_FALLBACK: &str = "Thinking process interrupted.";

/// Substituted for a missing credential so session setup itself never fails;
/// the hosted call is allowed to reject it instead.
pub const PLACEHOLDER_API_KEY: &str = "temporary_key";
