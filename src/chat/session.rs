//! Core chat session management.
//!
//! This module provides the [`ChatSession`] struct which owns the
//! conversation and drives one request/response exchange per [`send`].
//!
//! [`send`]: ChatSession::send

use crate::chat::config::ChatConfig;
use crate::chat::render::Renderer;
use crate::client::Completions;
use crate::error::{Error, Result};
use crate::observability::{SESSION_FAILED_TURNS, SESSION_TURNS};
use crate::types::{CompletionRequest, CompletionResponse, Message, Model, Role, Usage};

/// Ordered, append-only history of a session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Creates an empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All turns, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True if no turn has been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent turn.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    fn snapshot_with(&self, pending: &Message) -> Vec<Message> {
        let mut messages = Vec::with_capacity(self.messages.len() + 1);
        messages.extend_from_slice(&self.messages);
        messages.push(pending.clone());
        messages
    }
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    /// The model used for the session.
    pub model: Model,
    /// The number of messages in the conversation.
    pub message_count: usize,
    /// Number of completion requests that produced a reply.
    pub total_requests: u64,
    /// Number of sends that failed.
    pub failed_requests: u64,
    /// Token usage summed over all replies.
    pub usage: Usage,
    /// Identifier of the most recent completion, if any.
    pub last_response_id: Option<String>,
}

/// A chat session that manages conversation state and API interactions.
///
/// A failed [`send`](ChatSession::send) leaves the conversation exactly as it
/// was: the user turn is only recorded together with the reply to it.
pub struct ChatSession<C: Completions> {
    client: C,
    config: ChatConfig,
    conversation: Conversation,
    usage_totals: Usage,
    request_count: u64,
    failure_count: u64,
    last_response_id: Option<String>,
}

impl<C: Completions> ChatSession<C> {
    /// Creates a new chat session.
    ///
    /// If the configuration carries instructions they become the first turn.
    pub fn new(client: C, config: ChatConfig) -> Self {
        let mut session = Self {
            client,
            config,
            conversation: Conversation::new(),
            usage_totals: Usage::default(),
            request_count: 0,
            failure_count: 0,
            last_response_id: None,
        };
        if let Some(instructions) = session.config.instructions.clone() {
            session.add_system_prompt(instructions);
        }
        session
    }

    /// Appends a system turn.
    ///
    /// Only meaningful before the first user turn; ordering is not enforced.
    pub fn add_system_prompt(&mut self, prompt: impl Into<String>) {
        let message = Message::system(prompt);
        tracing::debug!(%message, "adding instructions");
        self.conversation.push(message);
    }

    /// Sends user input and returns the assistant's reply.
    ///
    /// This method:
    /// 1. Echoes the input through `renderer` when `echo` is set
    /// 2. Builds a request from the history plus the new user turn
    /// 3. Waits for the completion service
    /// 4. Parses the payload and records both turns
    ///
    /// # Errors
    ///
    /// Returns the service error or [`Error::MalformedResponse`]. On error the
    /// conversation is left unchanged.
    pub async fn send(
        &mut self,
        input: &str,
        echo: bool,
        renderer: &mut dyn Renderer,
    ) -> Result<String> {
        if echo {
            renderer.print_echo(input);
        }

        let user = Message::user(input);
        tracing::debug!(message = %user, "sending message");

        match self.exchange(&user).await {
            Ok(response) => self.commit(user, response),
            Err(err) => {
                self.failure_count = self.failure_count.saturating_add(1);
                SESSION_FAILED_TURNS.click();
                Err(err)
            }
        }
    }

    async fn exchange(&self, user: &Message) -> Result<CompletionResponse> {
        let mut request = CompletionRequest::new(
            self.config.model.clone(),
            self.conversation.snapshot_with(user),
        );
        if let Some(tag) = &self.config.user {
            request = request.with_user(tag.clone());
        }

        let payload = self.client.create(&request).await?;
        let response = CompletionResponse::parse(&payload)?;
        tracing::debug!(
            id = %response.id,
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            "received completion"
        );
        Ok(response)
    }

    fn commit(&mut self, user: Message, response: CompletionResponse) -> Result<String> {
        let reply = response
            .message()
            .cloned()
            .ok_or_else(|| Error::malformed_response("completion payload has no choices", None))?;
        if reply.role() != Role::Assistant {
            tracing::debug!(role = %reply.role(), "reply is not tagged as assistant");
        }
        // The canonical reply is always recorded as an assistant turn.
        let reply = Message::assistant(reply.content());
        tracing::debug!(message = %reply, "received message");

        self.conversation.push(user);
        self.conversation.push(reply.clone());
        self.usage_totals = self.usage_totals + response.usage;
        self.request_count = self.request_count.saturating_add(1);
        self.last_response_id = Some(response.id);
        SESSION_TURNS.click();

        Ok(reply.content().to_string())
    }

    /// Returns the conversation so far.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Returns all turns, oldest first.
    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    /// Returns the number of messages in the conversation.
    pub fn message_count(&self) -> usize {
        self.conversation.len()
    }

    /// Returns the current model.
    pub fn model(&self) -> &Model {
        &self.config.model
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Returns the completion collaborator.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            model: self.config.model.clone(),
            message_count: self.message_count(),
            total_requests: self.request_count,
            failed_requests: self.failure_count,
            usage: self.usage_totals,
            last_response_id: self.last_response_id.clone(),
        }
    }
}
