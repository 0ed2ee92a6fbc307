//! Chat application module for conversations with a completion model.
//!
//! This module provides the session and CLI plumbing behind the `gpt-cli`
//! binary. It supports:
//!
//! - An interactive read-eval-print loop
//! - One-shot messages and batch input from a file or stdin
//! - Optional system instructions seeded before the first exchange
//!
//! # Architecture
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: conversation history and the request/response exchange
//! - [`render`]: where echoed input, replies, and errors are written

mod config;
mod render;
mod session;

pub use config::{ChatArgs, ChatConfig, DEFAULT_USER};
pub use render::{BufferRenderer, PlainTextRenderer, RenderEvent, Renderer};
pub use session::{ChatSession, Conversation, SessionStats};
