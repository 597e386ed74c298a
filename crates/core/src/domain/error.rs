// Domain Error Types - structured validation failures

use serde::Serialize;
use thiserror::Error;

/// Location root for request body fields
pub const BODY: &str = "body";

/// Location root for fields read back through the output schema
pub const RESPONSE: &str = "response";

/// Machine-readable category of a field error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// Required field absent
    Missing,
    /// Value present but not a string
    StringType,
    /// String present but fails a format check (email syntax)
    ValueError,
    /// Value not a JSON object
    ModelType,
    /// Body could not be decoded as JSON
    JsonInvalid,
    /// Value not an RFC 3339 timestamp
    DatetimeType,
}

impl std::fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldErrorKind::Missing => write!(f, "missing"),
            FieldErrorKind::StringType => write!(f, "string_type"),
            FieldErrorKind::ValueError => write!(f, "value_error"),
            FieldErrorKind::ModelType => write!(f, "model_type"),
            FieldErrorKind::JsonInvalid => write!(f, "json_invalid"),
            FieldErrorKind::DatetimeType => write!(f, "datetime_type"),
        }
    }
}

/// One failed check, addressed by its location path (e.g. `["body", "email"]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(loc: Vec<String>, kind: FieldErrorKind, msg: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind,
        }
    }

    pub fn missing(root: &str, field: &str) -> Self {
        Self::new(field_loc(root, field), FieldErrorKind::Missing, "Field required")
    }

    pub fn string_type(root: &str, field: &str) -> Self {
        Self::new(
            field_loc(root, field),
            FieldErrorKind::StringType,
            "Input should be a valid string",
        )
    }

    pub fn value_error(root: &str, field: &str, msg: impl Into<String>) -> Self {
        Self::new(field_loc(root, field), FieldErrorKind::ValueError, msg)
    }

    pub fn datetime_type(root: &str, field: &str) -> Self {
        Self::new(
            field_loc(root, field),
            FieldErrorKind::DatetimeType,
            "Input should be a valid datetime",
        )
    }

    pub fn model_type(root: &str) -> Self {
        Self::new(
            vec![root.to_string()],
            FieldErrorKind::ModelType,
            "Input should be a valid dictionary or object",
        )
    }

    pub fn json_invalid(msg: impl Into<String>) -> Self {
        Self::new(vec![BODY.to_string()], FieldErrorKind::JsonInvalid, msg)
    }

    /// Last path segment (the field name, or the root for whole-body errors)
    pub fn field(&self) -> &str {
        self.loc.last().map(String::as_str).unwrap_or_default()
    }
}

fn field_loc(root: &str, field: &str) -> Vec<String> {
    vec![root.to_string(), field.to_string()]
}

/// All field errors collected by one validation pass
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
#[error("{} invalid field(s): {}", .errors.len(), describe(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} ({})", e.loc.join("."), e.kind))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether any error points at `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field() == field)
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}
