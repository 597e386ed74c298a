// User Repository Port (Interface)

use crate::domain::UserRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Append-only store of internal user records, in insertion order
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Append a record (no deduplication)
    async fn append(&self, record: UserRecord) -> Result<()>;

    /// Oldest stored record
    async fn first(&self) -> Result<Option<UserRecord>>;

    /// Number of stored records
    async fn count(&self) -> Result<usize>;
}
