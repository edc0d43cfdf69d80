#![deny(missing_docs)]

//! # Schema Definitions
//!
//! The JSON-Schema-like record describing a single field. Callers create and
//! pre-populate a `Definition` with type information, then hand it to the
//! comment handler which fills in the documentation-derived members.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema definition for a single field or type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    /// The JSON type (e.g. `string`, `integer`, `array`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// Optional format specifier (e.g. `uuid`, `date-time`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Reference to a named definition.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Item schema for arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Definition>>,
    /// Value schema for maps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<Definition>>,
    /// Whether `null` is accepted.
    #[serde(default, skip_serializing_if = "is_false")]
    pub nullable: bool,
    /// Allowed literal values.
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    /// Default value, if documented.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Alternative schemas.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<Definition>,
    /// Illustrative examples, kept verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    /// Plain-text description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// HTML rendering of `description`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub html_description: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Definition {
    /// A definition with just a JSON type.
    pub fn typed(type_: impl Into<String>) -> Self {
        Self {
            type_: Some(type_.into()),
            ..Default::default()
        }
    }

    /// A definition pointing at another named definition.
    pub fn reference_to(target: impl Into<String>) -> Self {
        Self {
            reference: Some(target.into()),
            ..Default::default()
        }
    }

    /// An array of `items`.
    pub fn array_of(items: Definition) -> Self {
        Self {
            type_: Some("array".to_string()),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    /// An object whose values follow `values`.
    pub fn map_of(values: Definition) -> Self {
        Self {
            type_: Some("object".to_string()),
            additional_properties: Some(Box::new(values)),
            ..Default::default()
        }
    }

    /// Sets the format specifier.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Marks the definition as accepting `null`.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Serializes the definition into a JSON value.
    pub fn to_value(&self) -> AppResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| AppError::General(format!("Failed to serialize definition: {}", e)))
    }
}
