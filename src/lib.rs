//! A command-line chat client for OpenAI-compatible chat completion APIs.
//!
//! The library half holds the wire types in [`types`], the HTTP collaborator
//! in [`client`], and the conversation-owning [`chat::ChatSession`].

// Public modules
pub mod chat;
pub mod client;
pub mod error;
pub mod observability;
pub mod types;
pub mod utils;

// Re-exports
pub use client::{API_KEY_ENV, BASE_URL_ENV, Completions, OpenAi};
pub use error::{Error, Result};
pub use observability::register_biometrics;
pub use types::*;
