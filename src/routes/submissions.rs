use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};

use crate::routes::error_chain_fmt;
use crate::storage::{Store, StoreError};

#[derive(thiserror::Error)]
pub enum SubmissionsError {
    #[error("failed to load the stored submissions")]
    Store(#[from] StoreError),
}

impl std::fmt::Debug for SubmissionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubmissionsError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "message": "Failed to process your request. Please try again.",
        }))
    }
}

/// Administrative listing of every persisted submission, insertion order.
/// Not public-hardened: there is no auth model in this service, access
/// control belongs to whatever sits in front of it.
#[tracing::instrument(name = "Listing contact submissions", skip(store))]
pub async fn list_submissions(
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, SubmissionsError> {
    let submissions = store.list_submissions().await?;
    Ok(HttpResponse::Ok().json(submissions))
}
