/// A single offending field, phrased for form re-display on the website.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validation failure for an inbound payload, carrying every offending field
/// rather than just the first one found.
#[derive(thiserror::Error, Debug, Clone)]
#[error("invalid request payload")]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field,
                message: message.into(),
            }],
        }
    }
}
