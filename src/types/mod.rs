// Public modules
pub mod choice;
pub mod completion_request;
pub mod completion_response;
pub mod finish_reason;
pub mod message;
pub mod model;
pub mod usage;

// Re-exports
pub use choice::Choice;
pub use completion_request::CompletionRequest;
pub use completion_response::CompletionResponse;
pub use finish_reason::{FinishReason, FinishReasonParseError};
pub use message::{Message, Role};
pub use model::{KnownModel, Model};
pub use usage::Usage;
