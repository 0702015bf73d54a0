//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::application::config::PassgenConfig;
use crate::application::generate_password::GeneratePasswordInput;
use crate::domain::value_objects::{Complexity, ExcludeSet, PasswordLength};
use crate::error::PassgenResult;

/// `length` arrives as a JSON number or as a numeric string.
/// Fractional numbers are truncated toward zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LengthField {
    Number(i64),
    Fraction(f64),
    Text(String),
}

/// `exclude` arrives as a list of characters or as one string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExcludeField {
    List(Vec<String>),
    Text(String),
}

/// Request for POST /passgen/generate
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub length: Option<LengthField>,
    /// `None` when absent; an explicit `null` or non-string is kept
    #[serde(default, deserialize_with = "present")]
    pub complexity: Option<Value>,
    #[serde(default)]
    pub exclude: Option<ExcludeField>,
}

impl GenerateRequest {
    /// Validate against the domain and fill in configured defaults
    pub fn into_input(self, config: &PassgenConfig) -> PassgenResult<GeneratePasswordInput> {
        let length = match self.length {
            None => config.default_length,
            Some(LengthField::Number(n)) => PasswordLength::new(n)?,
            Some(LengthField::Fraction(f)) => PasswordLength::from_fraction(f)?,
            Some(LengthField::Text(s)) => PasswordLength::parse(&s)?,
        };

        let complexity = match self.complexity {
            None => config.default_complexity,
            Some(Value::String(name)) => Complexity::parse(&name),
            // null, numbers, lists: no tier name matches
            Some(_) => Complexity::High,
        };

        let exclude = match self.exclude {
            None => ExcludeSet::default(),
            Some(ExcludeField::List(entries)) => ExcludeSet::from_entries(entries),
            Some(ExcludeField::Text(text)) => ExcludeSet::from_text(&text),
        };

        Ok(GeneratePasswordInput {
            length,
            complexity,
            exclude,
        })
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Response for POST /passgen/generate
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub password: String,
}
