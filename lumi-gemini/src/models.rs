//! Model id constants for the Gemini models this crate is used with.
//!
//! Ids are sourced from the official model catalog.

/// Gemini 3 Flash - Pro-level intelligence at Flash speed
/// Released: Preview, Context: 1M/64k
pub const GEMINI_3_FLASH_ID: &str = "gemini-3-flash-preview";
pub const GEMINI_3_FLASH_NAME: &str = "Gemini 3 Flash";

/// Gemini 3 Pro - Most intelligent model for complex reasoning
/// Released: Preview, Context: 1M/64k
pub const GEMINI_3_PRO_ID: &str = "gemini-3-pro-preview";
pub const GEMINI_3_PRO_NAME: &str = "Gemini 3 Pro";

// Short aliases
pub const GEMINI_3_FLASH: &str = GEMINI_3_FLASH_ID;
pub const GEMINI_3_PRO: &str = GEMINI_3_PRO_ID;
