// Create User Use Case

use crate::domain::{UserCreate, UserOut, UserRecord};
use crate::error::Result;
use crate::port::{SecretIssuer, TimeProvider, UserRepository};
use tracing::{info, warn};

/// Execute create-user use case
///
/// # Arguments
///
/// * `user_repo` - Record store
/// * `time_provider` - Join date source (injected for determinism)
/// * `secret_issuer` - Internal id / api key source
/// * `input` - Validated payload
///
/// Only the public projection leaves this function; the full record goes to
/// the store.
pub async fn execute(
    user_repo: &dyn UserRepository,
    time_provider: &dyn TimeProvider,
    secret_issuer: &dyn SecretIssuer,
    input: UserCreate,
) -> Result<UserOut> {
    let record = UserRecord::new(input, time_provider.now(), secret_issuer.issue());
    let out = UserOut::from(&record);

    user_repo.append(record).await?;

    // The record is stored at this point; the count only feeds the log line
    match user_repo.count().await {
        Ok(total_users) => info!(username = %out.username, total_users, "User created"),
        Err(e) => warn!(username = %out.username, error = %e, "User created, store size unavailable"),
    }

    Ok(out)
}
