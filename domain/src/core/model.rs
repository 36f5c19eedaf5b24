//! Model value object representing a hosted completion model

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Completion models served by the Mistral platform (Value Object)
///
/// Every request of a session goes to the same model; the identifier is
/// sent verbatim in the `model` field of the request body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    MistralLarge,
    MistralMedium,
    MistralSmall,
    MinistralEight,
    OpenMistralNemo,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::MistralLarge => "mistral-large-latest",
            Model::MistralMedium => "mistral-medium-latest",
            Model::MistralSmall => "mistral-small-latest",
            Model::MinistralEight => "ministral-8b-latest",
            Model::OpenMistralNemo => "open-mistral-nemo",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a model outside the known catalogue
    pub fn is_custom(&self) -> bool {
        matches!(self, Model::Custom(_))
    }
}

impl Default for Model {
    /// Returns the default model (mistral-large-latest)
    fn default() -> Self {
        Model::MistralLarge
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s {
            "" => return Err(DomainError::InvalidModel("model name cannot be empty".into())),
            "mistral-large-latest" => Model::MistralLarge,
            "mistral-medium-latest" => Model::MistralMedium,
            "mistral-small-latest" => Model::MistralSmall,
            "ministral-8b-latest" => Model::MinistralEight,
            "open-mistral-nemo" => Model::OpenMistralNemo,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_models_parse_back() {
        for model in [
            Model::MistralLarge,
            Model::MistralMedium,
            Model::MistralSmall,
            Model::MinistralEight,
            Model::OpenMistralNemo,
        ] {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
            assert!(!parsed.is_custom());
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "codestral-latest".parse().unwrap();
        assert_eq!(model, Model::Custom("codestral-latest".to_string()));
        assert_eq!(model.to_string(), "codestral-latest");
        assert!(model.is_custom());
    }

    #[test]
    fn test_empty_model_rejected() {
        assert!("".parse::<Model>().is_err());
        assert!("   ".parse::<Model>().is_err());
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default().as_str(), "mistral-large-latest");
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<Model>("\"\"").is_err());
        let model: Model = serde_json::from_str("\"mistral-small-latest\"").unwrap();
        assert_eq!(model, Model::MistralSmall);
    }
}
