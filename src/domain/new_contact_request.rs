use crate::domain::{
    ClientEmail, ClientName, FieldError, ServiceChoice, ValidationError,
};

/// Raw contact form fields, exactly as the website posts them.
#[derive(Debug, serde::Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    pub message: Option<String>,
}

/// A contact request that passed validation. Holding one is proof that the
/// name and service are non-empty and the email address is well-formed;
/// phone and message have been defaulted to empty strings when absent.
#[derive(Debug)]
pub struct NewContactRequest {
    pub name: ClientName,
    pub email: ClientEmail,
    pub phone: String,
    pub service: ServiceChoice,
    pub message: String,
}

impl TryFrom<ContactFormData> for NewContactRequest {
    type Error = ValidationError;

    /// Validates every field before reporting, so the caller gets the full
    /// list of problems in one round trip instead of one per attempt.
    fn try_from(form: ContactFormData) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let name = ClientName::parse(form.name)
            .map_err(|message| errors.push(FieldError { field: "name", message }))
            .ok();
        let email = ClientEmail::parse(form.email)
            .map_err(|message| errors.push(FieldError { field: "email", message }))
            .ok();
        let service = ServiceChoice::parse(form.service)
            .map_err(|message| errors.push(FieldError { field: "service", message }))
            .ok();

        match (name, email, service) {
            (Some(name), Some(email), Some(service)) => Ok(Self {
                name,
                email,
                phone: form.phone.unwrap_or_default(),
                service,
                message: form.message.unwrap_or_default(),
            }),
            _ => Err(ValidationError { errors }),
        }
    }
}
