use serde::{Deserialize, Serialize};

use crate::types::{FinishReason, Message};

/// One candidate completion returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Choice {
    /// The generated turn.
    pub message: Message,

    /// Why generation of this choice ended.
    pub finish_reason: FinishReason,

    /// Position of this choice in the response.
    pub index: u32,
}
