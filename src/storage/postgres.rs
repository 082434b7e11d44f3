use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::{ContactSubmission, StatusCheck};
use crate::storage::{Store, StoreError};

/// Durable store backed by Postgres. Timestamps are persisted as RFC 3339
/// text so the round trip is exact; listings order by the `ordinal` sequence,
/// which is the insertion order.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}

fn submission_from_row(row: &PgRow) -> Result<ContactSubmission, StoreError> {
    Ok(ContactSubmission {
        id: row.try_get::<Uuid, _>("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        service: row.try_get("service")?,
        message: row.try_get("message")?,
        timestamp: parse_timestamp(row.try_get::<String, _>("submitted_at")?.as_str())?,
    })
}

fn status_check_from_row(row: &PgRow) -> Result<StatusCheck, StoreError> {
    Ok(StatusCheck {
        id: row.try_get::<Uuid, _>("id")?,
        client_name: row.try_get("client_name")?,
        timestamp: parse_timestamp(row.try_get::<String, _>("checked_at")?.as_str())?,
    })
}

#[async_trait]
impl Store for PostgresStore {
    #[tracing::instrument(name = "Saving a contact submission in the database", skip(self, submission), fields(submission_id = %submission.id))]
    async fn save_submission(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO contact_submissions (id, name, email, phone, service, message, submitted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(submission.id)
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.phone)
        .bind(&submission.service)
        .bind(&submission.message)
        .bind(submission.timestamp.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;
        Ok(())
    }

    #[tracing::instrument(name = "Fetching all contact submissions", skip(self))]
    async fn list_submissions(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        sqlx::query(
            r#"
            SELECT id, name, email, phone, service, message, submitted_at
            FROM contact_submissions
            ORDER BY ordinal
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(submission_from_row)
        .collect()
    }

    #[tracing::instrument(name = "Saving a status check in the database", skip(self, check), fields(check_id = %check.id))]
    async fn save_status_check(&self, check: &StatusCheck) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO status_checks (id, client_name, checked_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(check.id)
        .bind(&check.client_name)
        .bind(check.timestamp.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;
        Ok(())
    }

    #[tracing::instrument(name = "Fetching all status checks", skip(self))]
    async fn list_status_checks(&self) -> Result<Vec<StatusCheck>, StoreError> {
        sqlx::query(
            r#"
            SELECT id, client_name, checked_at
            FROM status_checks
            ORDER BY ordinal
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(status_check_from_row)
        .collect()
    }
}
