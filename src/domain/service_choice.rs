/// Maps a short service code to its human-readable display label.
/// Codes outside the table are their own label: the website's service list
/// can grow without a backend deploy, the notification just echoes the code.
pub fn service_label(code: &str) -> &str {
    match code {
        "weight-loss" => "Weight Loss",
        "strength-training" => "Strength Training / Weight Gain",
        "flexibility-rehab" => "Flexibility & Rehabilitation",
        "nutrition-coaching" => "Nutrition Coaching",
        other => other,
    }
}

/// The service a client asked about, guaranteed non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceChoice(String);

impl ServiceChoice {
    pub fn parse(s: String) -> Result<ServiceChoice, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err("Service must not be empty.".to_string())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn label(&self) -> &str {
        service_label(&self.0)
    }
}

impl AsRef<str> for ServiceChoice {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
