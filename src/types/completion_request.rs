use serde::{Deserialize, Serialize};

use crate::types::{Message, Model};

/// Body of a chat completion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionRequest {
    /// The model that should produce the reply.
    pub model: Model,

    /// The conversation so far, oldest turn first.
    pub messages: Vec<Message>,

    /// Opaque tag identifying the end user to the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl CompletionRequest {
    /// Create a new `CompletionRequest` from a conversation snapshot.
    pub fn new(model: Model, messages: Vec<Message>) -> Self {
        Self {
            model,
            messages,
            user: None,
        }
    }

    /// Tag the request with an end-user identifier.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}
