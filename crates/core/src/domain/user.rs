// User Domain Model - input schema, internal record, output projection

use super::email::EmailAddress;
use super::error::{ValidationErrors, BODY, RESPONSE};
use super::schema::FieldReader;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Plain-text password as submitted.
///
/// Serializes as-is (the internal record keeps it), but never prints in
/// `Debug` output so it cannot leak through logs.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Non-cryptographic stand-in for a password hash
pub fn placeholder_hash(password: &Password) -> String {
    format!("hashed_{}", password.expose())
}

/// Validated user-creation payload
#[derive(Debug, Clone, PartialEq)]
pub struct UserCreate {
    pub username: String,
    pub email: EmailAddress,
    pub full_name: Option<String>,
    pub password: Password,
}

impl UserCreate {
    pub const FIELDS: [&'static str; 4] = ["username", "email", "full_name", "password"];

    /// Validate a request body.
    ///
    /// Unknown keys are ignored. All failing fields are reported together.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::open(body, BODY)?;

        let username = reader.required_str("username");
        let email = reader.email("email");
        let full_name = reader.optional_str("full_name");
        let password = reader.required_str("password");

        match (username, email, full_name, password) {
            (Some(username), Some(email), Some(full_name), Some(password)) => Ok(Self {
                username: username.to_string(),
                email,
                full_name: full_name.map(str::to_string),
                password: Password::new(password),
            }),
            _ => Err(reader.into_errors()),
        }
    }
}

/// Server-issued identifiers attached to each stored user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub internal_id: String,
    pub api_key: String,
}

/// Full server-side user record, sensitive fields included
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRecord {
    pub username: String,
    pub email: EmailAddress,
    pub full_name: Option<String>,
    pub join_date: DateTime<Utc>,
    pub password: Password,
    pub hashed_password: String,
    pub internal_id: String,
    pub api_key: String,
}

impl UserRecord {
    /// Serialized key order
    pub const FIELDS: [&'static str; 8] = [
        "username",
        "email",
        "full_name",
        "join_date",
        "password",
        "hashed_password",
        "internal_id",
        "api_key",
    ];

    /// Build the record for a validated payload
    ///
    /// # Arguments
    ///
    /// * `input` - Validated payload (moved into the record)
    /// * `join_date` - Creation time (injected, not read from the clock)
    /// * `credentials` - Identifiers from the secret issuer
    pub fn new(input: UserCreate, join_date: DateTime<Utc>, credentials: Credentials) -> Self {
        let hashed_password = placeholder_hash(&input.password);

        Self {
            username: input.username,
            email: input.email,
            full_name: input.full_name,
            join_date,
            password: input.password,
            hashed_password,
            internal_id: credentials.internal_id,
            api_key: credentials.api_key,
        }
    }

    /// Field names the output projection drops, in record order
    pub fn filtered_out_fields() -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .copied()
            .filter(|field| !UserOut::FIELDS.contains(field))
            .collect()
    }
}

/// Public projection of a user: the only shape ever returned to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserOut {
    pub username: String,
    pub email: EmailAddress,
    pub full_name: Option<String>,
    pub join_date: DateTime<Utc>,
}

impl UserOut {
    pub const FIELDS: [&'static str; 4] = ["username", "email", "full_name", "join_date"];

    /// Filter an arbitrary mapping down to the declared fields.
    ///
    /// Extra keys are dropped silently; a declared field that is absent or
    /// mistyped is a validation error.
    pub fn from_mapping(source: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::open(source, RESPONSE)?;

        let username = reader.required_str("username");
        let email = reader.email("email");
        let full_name = reader.optional_str("full_name");
        let join_date = reader.timestamp("join_date");

        match (username, email, full_name, join_date) {
            (Some(username), Some(email), Some(full_name), Some(join_date)) => Ok(Self {
                username: username.to_string(),
                email,
                full_name: full_name.map(str::to_string),
                join_date,
            }),
            _ => Err(reader.into_errors()),
        }
    }
}

impl From<&UserRecord> for UserOut {
    fn from(record: &UserRecord) -> Self {
        Self {
            username: record.username.clone(),
            email: record.email.clone(),
            full_name: record.full_name.clone(),
            join_date: record.join_date,
        }
    }
}
