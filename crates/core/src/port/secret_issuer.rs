// Secret Issuer Port (internal identifiers attached to every user record)

use crate::domain::Credentials;

pub const PLACEHOLDER_INTERNAL_ID: &str = "secret_123";
pub const PLACEHOLDER_API_KEY: &str = "key_abc123";

/// Issues the internal id and api key for a new record
pub trait SecretIssuer: Send + Sync {
    fn issue(&self) -> Credentials;
}

/// Fixed placeholder values (default)
pub struct PlaceholderSecrets;

impl SecretIssuer for PlaceholderSecrets {
    fn issue(&self) -> Credentials {
        Credentials {
            internal_id: PLACEHOLDER_INTERNAL_ID.to_string(),
            api_key: PLACEHOLDER_API_KEY.to_string(),
        }
    }
}

/// Fresh UUID v4 values per record
pub struct UuidSecrets;

impl SecretIssuer for UuidSecrets {
    fn issue(&self) -> Credentials {
        Credentials {
            internal_id: uuid::Uuid::new_v4().to_string(),
            api_key: format!("key_{}", uuid::Uuid::new_v4().simple()),
        }
    }
}
