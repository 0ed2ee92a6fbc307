use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Who authored a conversational turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that steer the assistant.
    System,

    /// Text typed or piped in by the person at the terminal.
    User,

    /// A reply generated by the model.
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "system" => Ok(Role::System),
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            _ => Err(Error::invalid_role(s)),
        }
    }
}

/// One conversational turn.
///
/// Messages are immutable once built; the fields are only reachable through
/// accessors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    /// Create a new `Message` with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a new `Message` from a textual role.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRole`] unless `role` is one of `system`, `user`
    /// or `assistant`.
    pub fn create(role: &str, content: impl Into<String>) -> Result<Self> {
        Ok(Self::new(role.parse()?, content))
    }

    /// Create a new system `Message`.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a new user `Message`.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a new assistant `Message`.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// The author of this turn.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The text of this turn.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.role, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn create_with_known_roles() {
        let message = Message::create("system", "You are terse.").unwrap();
        assert_eq!(message.role(), Role::System);
        assert_eq!(message.content(), "You are terse.");

        assert_eq!(Message::create("user", "Hi").unwrap(), Message::user("Hi"));
        assert_eq!(
            Message::create("assistant", "Hello.").unwrap(),
            Message::assistant("Hello.")
        );
    }

    #[test]
    fn create_rejects_unknown_role() {
        let err = Message::create("tool", "{}").unwrap_err();
        assert!(err.is_invalid_role());

        // Roles are case sensitive on the wire.
        assert!(Message::create("User", "Hi").unwrap_err().is_invalid_role());
    }

    #[test]
    fn wire_shape() {
        let message = Message::user("Hello!");
        assert_eq!(
            to_value(&message).unwrap(),
            json!({
                "role": "user",
                "content": "Hello!"
            })
        );
    }

    #[test]
    fn deserialize_rejects_unknown_role() {
        let result = serde_json::from_value::<Message>(json!({
            "role": "narrator",
            "content": "Once upon a time"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Message::assistant("Hello.").to_string(), "assistant: Hello.");
        assert_eq!(Role::System.to_string(), "system");
    }
}
