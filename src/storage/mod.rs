mod memory;
mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PostgresStore;

use async_trait::async_trait;

use crate::domain::{ContactSubmission, StatusCheck};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("database query failed")]
    Database(#[from] sqlx::Error),
    #[error("stored timestamp is not valid RFC 3339")]
    MalformedTimestamp(#[from] chrono::ParseError),
}

/// The persistence seam. Both entity types are insert-once: there are no
/// update or delete operations, and listings return insertion order.
///
/// A failed save must be reported, never swallowed: losing a validated lead
/// silently is the one failure mode this service is not allowed to have.
#[async_trait]
pub trait Store: Send + Sync {
    async fn save_submission(&self, submission: &ContactSubmission) -> Result<(), StoreError>;
    async fn list_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError>;
    async fn save_status_check(&self, check: &StatusCheck) -> Result<(), StoreError>;
    async fn list_status_checks(&self) -> Result<Vec<StatusCheck>, StoreError>;
}
