// In-Memory UserRepository Implementation

use async_trait::async_trait;
use respmodel_core::domain::UserRecord;
use respmodel_core::error::Result;
use respmodel_core::port::UserRepository;
use tokio::sync::RwLock;
use tracing::trace;

/// Ordered, unbounded record list. Lives as long as the process (or the test
/// fixture that owns it).
#[derive(Default)]
pub struct InMemoryUserRepository {
    records: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored record, oldest first
    pub async fn snapshot(&self) -> Vec<UserRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn append(&self, record: UserRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.push(record);
        trace!(len = records.len(), "Record appended");
        Ok(())
    }

    async fn first(&self) -> Result<Option<UserRecord>> {
        Ok(self.records.read().await.first().cloned())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.records.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use respmodel_core::domain::{Credentials, UserCreate};
    use serde_json::json;
    use std::sync::Arc;
    use tokio_test::assert_ok;

    fn record(username: &str) -> UserRecord {
        let input = UserCreate::from_json(&json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "pw"
        }))
        .unwrap();

        UserRecord::new(
            input,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Credentials {
                internal_id: "secret_123".to_string(),
                api_key: "key_abc123".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_empty_repository() {
        let repo = InMemoryUserRepository::new();

        assert_eq!(assert_ok!(repo.count().await), 0);
        assert!(assert_ok!(repo.first().await).is_none());
    }

    #[tokio::test]
    async fn test_append_keeps_insertion_order() {
        let repo = InMemoryUserRepository::new();

        for name in ["first", "second", "third"] {
            assert_ok!(repo.append(record(name)).await);
        }

        assert_eq!(assert_ok!(repo.count().await), 3);
        assert_eq!(repo.first().await.unwrap().unwrap().username, "first");

        let names: Vec<String> = repo
            .snapshot()
            .await
            .into_iter()
            .map(|r| r.username)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let repo = InMemoryUserRepository::new();

        repo.append(record("dup")).await.unwrap();
        repo.append(record("dup")).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_appends_all_land() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.append(record(&format!("user{}", i))).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.count().await.unwrap(), 50);
    }
}
