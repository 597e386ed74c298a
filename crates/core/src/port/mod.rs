// Port Layer - Interfaces for external dependencies

pub mod secret_issuer;
pub mod time_provider;
pub mod user_repository;

// Re-exports
pub use secret_issuer::{PlaceholderSecrets, SecretIssuer, UuidSecrets};
pub use time_provider::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
pub use user_repository::UserRepository;
