// Email Address value type (syntax-checked, never resolved)

use serde::{Deserialize, Serialize};

const MAX_EMAIL_LEN: usize = 254;

/// Syntactically valid email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and validate an address.
    ///
    /// Error text is meant for the `msg` of a field error.
    pub fn parse(raw: &str) -> Result<Self, String> {
        Self::try_from(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_syntax(&value)
            .map_err(|reason| format!("value is not a valid email address: {}", reason))?;
        Ok(Self(value))
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn check_syntax(email: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        return Err("the address is empty");
    }

    if email.len() > MAX_EMAIL_LEN {
        return Err("the address is too long");
    }

    if email.chars().any(char::is_whitespace) {
        return Err("the address must not contain whitespace");
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err("an email address must have an @-sign");
    };

    if domain.contains('@') {
        return Err("an email address must have exactly one @-sign");
    }

    if local.is_empty() {
        return Err("there must be something before the @-sign");
    }

    if domain.is_empty() {
        return Err("there must be something after the @-sign");
    }

    if !domain.contains('.') {
        return Err("the part after the @-sign is not valid, it should have a period");
    }

    if domain.split('.').any(str::is_empty) {
        return Err("the part after the @-sign contains an empty label");
    }

    Ok(())
}
