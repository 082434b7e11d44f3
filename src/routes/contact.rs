use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use uuid::Uuid;

use crate::domain::{ContactFormData, ContactSubmission, NewContactRequest, ValidationError};
use crate::email_client::EmailClient;
use crate::notification::notify_trainer;
use crate::routes::error_chain_fmt;
use crate::storage::{Store, StoreError};

/// Deployment-variant knobs for the contact success response.
#[derive(Clone)]
pub struct ResponseOptions {
    pub expose_submission_id: bool,
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("invalid contact form data")]
    Validation(#[from] ValidationError),
    #[error("failed to persist the contact submission")]
    Store(#[from] StoreError),
}

// Same logic to get the full error chain on `Debug`
impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ContactError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // Per-field detail so the website can re-display the form
            ContactError::Validation(error) => {
                HttpResponse::UnprocessableEntity().json(serde_json::json!({
                    "status": "error",
                    "message": "Validation failed.",
                    "errors": error.errors,
                }))
            }
            // Internals stay in the logs, the caller gets a generic message
            ContactError::Store(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "status": "error",
                    "message": "Failed to process your request. Please try again.",
                }))
            }
        }
    }
}

#[derive(serde::Serialize)]
struct ContactSuccess {
    status: &'static str,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    submission_id: Option<Uuid>,
}

/// The whole contact workflow: validate, persist, then a best-effort alert.
/// Validation failures short-circuit before anything is written; a store
/// failure aborts the request; a notify failure is reduced to a log line
/// because email availability must not gate the acceptance of a lead.
#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(form, store, email_client, options),
    fields(
        client_name = %form.name,
        client_email = %form.email,
        service = %form.service
    )
)]
pub async fn submit_contact(
    form: web::Json<ContactFormData>,
    store: web::Data<dyn Store>,
    email_client: web::Data<EmailClient>,
    options: web::Data<ResponseOptions>,
) -> Result<HttpResponse, ContactError> {
    let request = NewContactRequest::try_from(form.into_inner())?;
    let submission = ContactSubmission::record(request);

    store.save_submission(&submission).await?;

    if let Err(error) = notify_trainer(&email_client, &submission).await {
        tracing::warn!(
            error.cause_chain = ?error,
            "Failed to send the consultation alert email. \
            The submission is persisted, only the notification was lost",
        );
    }

    Ok(HttpResponse::Ok().json(ContactSuccess {
        status: "success",
        message: "Your consultation request has been submitted successfully!",
        submission_id: options.expose_submission_id.then_some(submission.id),
    }))
}
