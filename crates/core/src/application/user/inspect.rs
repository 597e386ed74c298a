// Inspect Use Case - shows what the output projection drops

use crate::domain::{UserOut, UserRecord};
use crate::error::{AppError, Result};
use crate::port::UserRepository;
use serde::Serialize;

pub const NO_USERS_MESSAGE: &str = "No users created yet";

/// Debug view of the first stored user
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DebugSnapshot {
    Empty {
        message: &'static str,
    },
    Populated {
        internal_data: UserRecord,
        what_response_model_returns: UserOut,
        filtered_out_fields: Vec<&'static str>,
    },
}

/// Execute inspect use case
///
/// The projection goes through the mapping form of the output schema, the
/// same filter a serialized record would pass through.
pub async fn execute(user_repo: &dyn UserRepository) -> Result<DebugSnapshot> {
    let Some(record) = user_repo.first().await? else {
        return Ok(DebugSnapshot::Empty {
            message: NO_USERS_MESSAGE,
        });
    };

    let mapping = serde_json::to_value(&record)?;
    let projected = UserOut::from_mapping(&mapping).map_err(|errors| {
        AppError::Internal(format!("stored record failed output schema: {}", errors))
    })?;

    Ok(DebugSnapshot::Populated {
        internal_data: record,
        what_response_model_returns: projected,
        filtered_out_fields: UserRecord::filtered_out_fields(),
    })
}
