// User Service - create and inspect users

pub mod create;
pub mod inspect;

pub use inspect::{DebugSnapshot, NO_USERS_MESSAGE};

use crate::domain::{UserCreate, UserOut};
use crate::error::Result;
use crate::port::{SecretIssuer, TimeProvider, UserRepository};
use std::sync::Arc;
use tracing::debug;

/// User Service with injected dependencies
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    time_provider: Arc<dyn TimeProvider>,
    secret_issuer: Arc<dyn SecretIssuer>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        time_provider: Arc<dyn TimeProvider>,
        secret_issuer: Arc<dyn SecretIssuer>,
    ) -> Self {
        Self {
            user_repo,
            time_provider,
            secret_issuer,
        }
    }

    /// Validate a raw request body, then create the user
    pub async fn create_user(&self, body: &serde_json::Value) -> Result<UserOut> {
        let input = UserCreate::from_json(body).map_err(|errors| {
            debug!(error_count = errors.len(), "User payload rejected");
            errors
        })?;

        create::execute(
            self.user_repo.as_ref(),
            self.time_provider.as_ref(),
            self.secret_issuer.as_ref(),
            input,
        )
        .await
    }

    /// First stored record next to its public projection
    pub async fn debug_snapshot(&self) -> Result<DebugSnapshot> {
        inspect::execute(self.user_repo.as_ref()).await
    }
}
