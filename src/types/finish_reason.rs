use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reasons why the model stopped generating a choice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// The model reached a natural stopping point or a stop sequence
    Stop,

    /// The reply hit the token limit for the request
    Length,

    /// Content was omitted by the service's content filter
    ContentFilter,

    /// The model called one or more tools
    ToolCalls,

    /// The model called a function (legacy form of tool calls)
    FunctionCall,

    /// A reason this client does not know about
    #[serde(other)]
    Unknown,
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinishReason::Stop => write!(f, "stop"),
            FinishReason::Length => write!(f, "length"),
            FinishReason::ContentFilter => write!(f, "content_filter"),
            FinishReason::ToolCalls => write!(f, "tool_calls"),
            FinishReason::FunctionCall => write!(f, "function_call"),
            FinishReason::Unknown => write!(f, "unknown"),
        }
    }
}

/// Error returned when parsing an invalid finish reason string.
#[derive(Debug)]
pub struct FinishReasonParseError {
    /// The invalid string value that could not be parsed.
    pub invalid_value: String,
}

impl fmt::Display for FinishReasonParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown finish reason: {}", self.invalid_value)
    }
}

impl std::error::Error for FinishReasonParseError {}

impl FromStr for FinishReason {
    type Err = FinishReasonParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stop" => Ok(FinishReason::Stop),
            "length" => Ok(FinishReason::Length),
            "content_filter" => Ok(FinishReason::ContentFilter),
            "tool_calls" => Ok(FinishReason::ToolCalls),
            "function_call" => Ok(FinishReason::FunctionCall),
            _ => Err(FinishReasonParseError {
                invalid_value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialization() {
        let reason: FinishReason = serde_json::from_str(r#""stop""#).unwrap();
        assert_eq!(reason, FinishReason::Stop);

        let reason: FinishReason = serde_json::from_str(r#""content_filter""#).unwrap();
        assert_eq!(reason, FinishReason::ContentFilter);
    }

    #[test]
    fn unrecognized_reason_is_unknown() {
        let reason: FinishReason = serde_json::from_str(r#""eos_token""#).unwrap();
        assert_eq!(reason, FinishReason::Unknown);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(FinishReason::Length.to_string(), "length");
        assert_eq!(
            "tool_calls".parse::<FinishReason>().unwrap(),
            FinishReason::ToolCalls
        );
        let err = "eos_token".parse::<FinishReason>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown finish reason: eos_token");
    }
}
