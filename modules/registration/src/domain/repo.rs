use async_trait::async_trait;

use super::error::StorageError;
use super::models::{Registration, RegistrationRecord};

/// Append-only record store. There is no update or delete path.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Ensures the `users` table exists with the expected columns. Safe to
    /// call on every start.
    ///
    /// # Errors
    /// [`StorageError::Unavailable`] when an existing `users` table has a
    /// different column layout.
    async fn init(&self) -> Result<(), StorageError>;

    /// Durably appends `record` and returns it with its new identifier.
    async fn append(&self, record: &RegistrationRecord) -> Result<Registration, StorageError>;
}
