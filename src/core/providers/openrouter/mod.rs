//! OpenRouter provider
//!
//! Chat-completion calls constrained to answer with exactly one JSON object.
//! The reply is passed through the normalizer, so callers always get a
//! `CompletionResult` back, never an error.
//!
//! Documentation: https://openrouter.ai/docs

pub mod client;
pub mod error;
pub(crate) mod models;

pub use client::{MAX_TOKENS, OpenRouterClient, SYSTEM_PROMPT, TEMPERATURE};
pub use error::CompletionTransportError;
