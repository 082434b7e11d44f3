use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};

use crate::domain::{StatusCheck, ValidationError};
use crate::routes::error_chain_fmt;
use crate::storage::{Store, StoreError};

#[derive(serde::Deserialize)]
pub struct StatusCheckInput {
    client_name: String,
}

#[derive(thiserror::Error)]
pub enum StatusError {
    #[error("invalid status check payload")]
    Validation(#[from] ValidationError),
    #[error("failed to persist the status check")]
    Store(#[from] StoreError),
}

impl std::fmt::Debug for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for StatusError {
    fn status_code(&self) -> StatusCode {
        match self {
            StatusError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            StatusError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            StatusError::Validation(error) => {
                HttpResponse::UnprocessableEntity().json(serde_json::json!({
                    "status": "error",
                    "message": "Validation failed.",
                    "errors": error.errors,
                }))
            }
            StatusError::Store(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "status": "error",
                "message": "Failed to process your request. Please try again.",
            })),
        }
    }
}

#[tracing::instrument(
    name = "Recording a status check",
    skip(input, store),
    fields(client_name = %input.client_name)
)]
pub async fn create_status_check(
    input: web::Json<StatusCheckInput>,
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, StatusError> {
    let client_name = input.into_inner().client_name;
    if client_name.trim().is_empty() {
        return Err(ValidationError::single(
            "client_name",
            "Client name must not be empty.",
        )
        .into());
    }

    let check = StatusCheck::record(client_name);
    store.save_status_check(&check).await?;
    Ok(HttpResponse::Ok().json(check))
}

#[tracing::instrument(name = "Listing status checks", skip(store))]
pub async fn list_status_checks(
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, StatusError> {
    let checks = store.list_status_checks().await?;
    Ok(HttpResponse::Ok().json(checks))
}
