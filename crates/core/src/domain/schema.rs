// Schema field reader - collects every field error in one pass

use super::email::EmailAddress;
use super::error::{FieldError, ValidationErrors};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Reads typed fields out of a JSON object, recording a `FieldError` for each
/// failed check instead of stopping at the first one.
///
/// Every accessor returns `None` exactly when it recorded an error, so a caller
/// that got `Some` from all of its reads knows the error list is empty.
pub(crate) struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    root: &'static str,
    errors: ValidationErrors,
}

impl<'a> FieldReader<'a> {
    /// Fails with a `model_type` error when `value` is not an object
    pub fn open(value: &'a Value, root: &'static str) -> Result<Self, ValidationErrors> {
        match value {
            Value::Object(object) => Ok(Self {
                object,
                root,
                errors: ValidationErrors::new(),
            }),
            _ => Err(FieldError::model_type(root).into()),
        }
    }

    pub fn required_str(&mut self, field: &str) -> Option<&'a str> {
        match self.object.get(field) {
            None => {
                self.errors.push(FieldError::missing(self.root, field));
                None
            }
            Some(Value::String(s)) => Some(s.as_str()),
            Some(_) => {
                self.errors.push(FieldError::string_type(self.root, field));
                None
            }
        }
    }

    /// Absent and `null` both read as `Some(None)`
    pub fn optional_str(&mut self, field: &str) -> Option<Option<&'a str>> {
        match self.object.get(field) {
            None | Some(Value::Null) => Some(None),
            Some(Value::String(s)) => Some(Some(s.as_str())),
            Some(_) => {
                self.errors.push(FieldError::string_type(self.root, field));
                None
            }
        }
    }

    pub fn email(&mut self, field: &str) -> Option<EmailAddress> {
        let raw = self.required_str(field)?;
        match EmailAddress::parse(raw) {
            Ok(email) => Some(email),
            Err(msg) => {
                self.errors
                    .push(FieldError::value_error(self.root, field, msg));
                None
            }
        }
    }

    /// RFC 3339 timestamp, normalized to UTC
    pub fn timestamp(&mut self, field: &str) -> Option<DateTime<Utc>> {
        let parsed = match self.object.get(field) {
            None => {
                self.errors.push(FieldError::missing(self.root, field));
                return None;
            }
            Some(Value::String(s)) => DateTime::parse_from_rfc3339(s).ok(),
            Some(_) => None,
        };

        match parsed {
            Some(dt) => Some(dt.with_timezone(&Utc)),
            None => {
                self.errors
                    .push(FieldError::datetime_type(self.root, field));
                None
            }
        }
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }
}
