//! LLM-backed curriculum generation.
//!
//! Provides a chat-completions REST client, the prompts sent to it, static
//! fallback payloads, and [`LlmProvider`], which plugs into the
//! [`CurriculumProvider`](autopath_core::provider::CurriculumProvider) seam
//! and never surfaces a downstream failure to its caller.

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod messages;
pub mod prompts;
pub mod provider;

pub use client::ChatClient;
pub use config::LlmConfig;
pub use error::LlmError;
pub use provider::LlmProvider;
