use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Token accounting for one completion call.
///
/// The service bills and rate-limits by tokens, so the session keeps a running
/// total of these.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    /// Tokens in the submitted conversation.
    pub prompt_tokens: u32,

    /// Tokens in the generated reply.
    pub completion_tokens: u32,

    /// Sum of prompt and completion tokens.
    pub total_tokens: u32,
}

impl Usage {
    /// Create a new `Usage`, deriving the total.
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }
}

impl Add for Usage {
    type Output = Usage;

    fn add(self, rhs: Usage) -> Usage {
        Usage {
            prompt_tokens: self.prompt_tokens.saturating_add(rhs.prompt_tokens),
            completion_tokens: self.completion_tokens.saturating_add(rhs.completion_tokens),
            total_tokens: self.total_tokens.saturating_add(rhs.total_tokens),
        }
    }
}
