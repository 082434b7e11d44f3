use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::NewContactRequest;

/// A persisted consultation request. Created exactly once from a validated
/// form, never mutated afterwards: `id` and `timestamp` are assigned
/// server-side at creation and are invariant for the record's lifetime.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn record(request: NewContactRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: request.name.as_ref().to_string(),
            email: request.email.as_ref().to_string(),
            phone: request.phone,
            service: request.service.as_ref().to_string(),
            message: request.message,
            timestamp: Utc::now(),
        }
    }
}
