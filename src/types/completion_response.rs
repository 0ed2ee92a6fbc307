use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::{Error, Result};
use crate::types::{Choice, Message, Model, Usage};

/// A chat completion returned by the service.
///
/// Build one with [`CompletionResponse::parse`] or
/// [`CompletionResponse::from_json`]; both validate the payload against the
/// schema and require at least one choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Unique identifier for the completion.
    pub id: String,

    /// Object type tag, `chat.completion` for this endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// When the completion was created.
    #[serde(with = "crate::utils::time")]
    pub created: OffsetDateTime,

    /// The model that produced the completion.
    pub model: Model,

    /// Token accounting for the call.
    pub usage: Usage,

    /// Candidate completions, in index order.
    pub choices: Vec<Choice>,
}

impl CompletionResponse {
    /// Parse a decoded JSON payload into a typed response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResponse`] if `id`, `created`, `model`,
    /// `usage` or `choices` are missing or of the wrong type, or if there are
    /// no choices.
    pub fn parse(payload: &serde_json::Value) -> Result<Self> {
        let response = Self::deserialize(payload).map_err(|e| {
            Error::malformed_response(
                format!("completion payload does not match schema: {e}"),
                Some(Box::new(e)),
            )
        })?;
        response.validate()
    }

    /// Parse a raw JSON string into a typed response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResponse`] under the same conditions as
    /// [`CompletionResponse::parse`], or if `json` is not JSON at all.
    pub fn from_json(json: &str) -> Result<Self> {
        let response = serde_json::from_str::<Self>(json).map_err(|e| {
            Error::malformed_response(
                format!("completion payload does not match schema: {e}"),
                Some(Box::new(e)),
            )
        })?;
        response.validate()
    }

    /// The first choice's message: the canonical reply.
    pub fn message(&self) -> Option<&Message> {
        self.choices.first().map(|choice| &choice.message)
    }

    fn validate(self) -> Result<Self> {
        if self.choices.is_empty() {
            return Err(Error::malformed_response(
                "completion payload has no choices",
                None,
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FinishReason, KnownModel, Role};
    use serde_json::{Value, json};
    use time::macros::datetime;

    fn payload() -> Value {
        json!({
            "id": "chatcmpl-6p9XYPYSTTRi0xEviKjjilqrWU2Ve",
            "object": "chat.completion",
            "created": 1677649420,
            "model": "gpt-3.5-turbo",
            "usage": {"prompt_tokens": 56, "completion_tokens": 31, "total_tokens": 87},
            "choices": [
                {
                    "message": {
                        "role": "assistant",
                        "content": "Some text",
                    },
                    "finish_reason": "stop",
                    "index": 0,
                }
            ],
        })
    }

    fn without(field: &str) -> Value {
        let mut payload = payload();
        payload.as_object_mut().unwrap().remove(field);
        payload
    }

    #[test]
    fn parse_well_formed() {
        let response = CompletionResponse::parse(&payload()).unwrap();

        assert_eq!(response.id, "chatcmpl-6p9XYPYSTTRi0xEviKjjilqrWU2Ve");
        assert_eq!(response.object.as_deref(), Some("chat.completion"));
        assert_eq!(response.created, datetime!(2023-03-01 05:43:40 UTC));
        assert_eq!(response.created.unix_timestamp(), 1677649420);
        assert_eq!(response.model, Model::Known(KnownModel::Gpt35Turbo));
        assert_eq!(response.usage.prompt_tokens, 56);
        assert_eq!(response.usage.completion_tokens, 31);
        assert_eq!(response.usage.total_tokens, 87);
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.role(), Role::Assistant);
        assert_eq!(response.choices[0].message.content(), "Some text");
        assert_eq!(response.choices[0].finish_reason, FinishReason::Stop);
        assert_eq!(response.choices[0].index, 0);
        assert_eq!(response.message(), Some(&Message::assistant("Some text")));
    }

    #[test]
    fn from_json_matches_parse() {
        let text = payload().to_string();
        assert_eq!(
            CompletionResponse::from_json(&text).unwrap(),
            CompletionResponse::parse(&payload()).unwrap()
        );
    }

    #[test]
    fn object_is_optional() {
        let response = CompletionResponse::parse(&without("object")).unwrap();
        assert!(response.object.is_none());
    }

    #[test]
    fn missing_required_fields() {
        for field in ["id", "created", "model", "usage", "choices"] {
            let err = CompletionResponse::parse(&without(field)).unwrap_err();
            assert!(err.is_malformed_response(), "{field}: {err}");
        }
    }

    #[test]
    fn empty_choices() {
        let mut payload = payload();
        payload["choices"] = json!([]);
        let err = CompletionResponse::parse(&payload).unwrap_err();
        assert!(err.is_malformed_response());
    }

    #[test]
    fn wrong_shapes() {
        let mut payload = payload();
        payload["usage"] = json!("lots");
        assert!(
            CompletionResponse::parse(&payload)
                .unwrap_err()
                .is_malformed_response()
        );

        let mut payload = self::payload();
        payload["choices"][0]["message"]["role"] = json!("tool");
        assert!(
            CompletionResponse::parse(&payload)
                .unwrap_err()
                .is_malformed_response()
        );

        assert!(
            CompletionResponse::parse(&json!(["not", "an", "object"]))
                .unwrap_err()
                .is_malformed_response()
        );
        assert!(
            CompletionResponse::from_json("<html>")
                .unwrap_err()
                .is_malformed_response()
        );
    }
}
