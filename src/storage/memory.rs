use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{ContactSubmission, StatusCheck};
use crate::storage::{Store, StoreError};

/// Process-local store for minimal deployments and tests.
/// Records do not survive a restart; the durable option is `PostgresStore`.
#[derive(Default)]
pub struct InMemoryStore {
    submissions: Mutex<Vec<ContactSubmission>>,
    status_checks: Mutex<Vec<StatusCheck>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // The stored values are plain data, so a poisoned lock holds nothing
    // half-written and we can keep going with the inner value.
    fn submissions(&self) -> std::sync::MutexGuard<'_, Vec<ContactSubmission>> {
        self.submissions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn status_checks(&self) -> std::sync::MutexGuard<'_, Vec<StatusCheck>> {
        self.status_checks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn save_submission(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        self.submissions().push(submission.clone());
        Ok(())
    }

    async fn list_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        Ok(self.submissions().clone())
    }

    async fn save_status_check(&self, check: &StatusCheck) -> Result<(), StoreError> {
        self.status_checks().push(check.clone());
        Ok(())
    }

    async fn list_status_checks(&self) -> Result<Vec<StatusCheck>, StoreError> {
        Ok(self.status_checks().clone())
    }
}
