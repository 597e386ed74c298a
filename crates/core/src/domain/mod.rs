// Domain Layer - Pure schemas and records

pub mod email;
pub mod error;
mod schema;
pub mod user;

// Re-exports
pub use email::EmailAddress;
pub use error::{FieldError, FieldErrorKind, ValidationErrors};
pub use user::{placeholder_hash, Credentials, Password, UserCreate, UserOut, UserRecord};
