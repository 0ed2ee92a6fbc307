use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Represents a chat model identifier.
///
/// This can be a predefined model or a custom string value for models the
/// service adds later, fine-tunes, or models served by a compatible endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Model {
    /// Known model versions
    Known(KnownModel),

    /// Custom model identifier
    Custom(String),
}

/// Known chat model versions
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownModel {
    /// GPT-3.5 Turbo (latest alias)
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,

    /// GPT-3.5 Turbo (2023-03-01 snapshot)
    #[serde(rename = "gpt-3.5-turbo-0301")]
    Gpt35Turbo0301,

    /// GPT-4 (latest alias)
    #[serde(rename = "gpt-4")]
    Gpt4,

    /// GPT-4 Turbo
    #[serde(rename = "gpt-4-turbo")]
    Gpt4Turbo,

    /// GPT-4o
    #[serde(rename = "gpt-4o")]
    Gpt4o,

    /// GPT-4o mini
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini,
}

impl KnownModel {
    const ALL: [KnownModel; 6] = [
        KnownModel::Gpt35Turbo,
        KnownModel::Gpt35Turbo0301,
        KnownModel::Gpt4,
        KnownModel::Gpt4Turbo,
        KnownModel::Gpt4o,
        KnownModel::Gpt4oMini,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            KnownModel::Gpt35Turbo => "gpt-3.5-turbo",
            KnownModel::Gpt35Turbo0301 => "gpt-3.5-turbo-0301",
            KnownModel::Gpt4 => "gpt-4",
            KnownModel::Gpt4Turbo => "gpt-4-turbo",
            KnownModel::Gpt4o => "gpt-4o",
            KnownModel::Gpt4oMini => "gpt-4o-mini",
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Known(KnownModel::Gpt35Turbo)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Known(known_model) => write!(f, "{}", known_model),
            Model::Custom(custom) => write!(f, "{}", custom),
        }
    }
}

impl fmt::Display for KnownModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(KnownModel::ALL
            .iter()
            .find(|known| known.as_str() == s)
            .map(|known| Model::Known(*known))
            .unwrap_or_else(|| Model::Custom(s.to_string())))
    }
}

impl From<KnownModel> for Model {
    fn from(model: KnownModel) -> Self {
        Model::Known(model)
    }
}

impl From<String> for Model {
    fn from(model: String) -> Self {
        Model::Custom(model)
    }
}

impl From<&str> for Model {
    fn from(model: &str) -> Self {
        Model::Custom(model.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_serialization() {
        let model = Model::Known(KnownModel::Gpt35Turbo);
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""gpt-3.5-turbo""#);

        let model = Model::Known(KnownModel::Gpt4oMini);
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""gpt-4o-mini""#);
    }

    #[test]
    fn custom_model_serialization() {
        let model = Model::Custom("ft:gpt-3.5-turbo:acme".to_string());
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#""ft:gpt-3.5-turbo:acme""#);
    }

    #[test]
    fn model_deserialization() {
        let model: Model = serde_json::from_str(r#""gpt-3.5-turbo""#).unwrap();
        assert_eq!(model, Model::Known(KnownModel::Gpt35Turbo));

        // Responses often name a dated snapshot the enum does not list.
        let model: Model = serde_json::from_str(r#""gpt-3.5-turbo-0613""#).unwrap();
        assert_eq!(model, Model::Custom("gpt-3.5-turbo-0613".to_string()));
    }

    #[test]
    fn parse() {
        assert_eq!(
            "gpt-4o".parse::<Model>().unwrap(),
            Model::Known(KnownModel::Gpt4o)
        );
        assert_eq!(
            "llama3".parse::<Model>().unwrap(),
            Model::Custom("llama3".to_string())
        );
    }

    #[test]
    fn display_and_default() {
        assert_eq!(Model::default().to_string(), "gpt-3.5-turbo");
        assert_eq!(Model::from("local").to_string(), "local");
    }
}
