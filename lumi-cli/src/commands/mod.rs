//! Command implementations for the lumi CLI
//!
//! Each top-level subcommand lives in its own module; the chat command is
//! the interactive surface, the rest print portfolio content.

pub mod about;
pub mod chat;
pub mod contact;
pub mod work;

pub use about::*;
pub use chat::*;
pub use contact::*;
pub use work::*;
