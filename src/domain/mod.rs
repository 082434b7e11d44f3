mod client_email;
mod client_name;
mod contact_submission;
mod new_contact_request;
mod service_choice;
mod status_check;
mod validation;

pub use client_email::ClientEmail;
pub use client_name::ClientName;
pub use contact_submission::ContactSubmission;
pub use new_contact_request::{ContactFormData, NewContactRequest};
pub use service_choice::{ServiceChoice, service_label};
pub use status_check::StatusCheck;
pub use validation::{FieldError, ValidationError};
