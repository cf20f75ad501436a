//! # Cutsel Assistant
//!
//! Boundary types for the conversational collaborator: an explicit chat
//! transcript, the premise document, and system-prompt assembly over the
//! engine's candidate sets. The model call itself is an opaque
//! [`ChatBackend`]; a backend failure becomes a diagnostic text reply,
//! never a structured error, so the query core is unaffected by assistant
//! availability.

mod backend;
mod premise;
mod prompt;
mod transcript;

pub use backend::{reply_or_diagnostic, ChatBackend};
pub use premise::Premise;
pub use prompt::{build_system_prompt, PromptContext};
pub use transcript::{ChatMessage, Role, Transcript};
