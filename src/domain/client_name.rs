/// A client's name, guaranteed non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientName(String);

impl ClientName {
    /// Trims the input and rejects strings that are empty afterwards.
    /// No further restrictions: names come from a public website form and
    /// we'd rather store an odd name than bounce a real one.
    pub fn parse(s: String) -> Result<ClientName, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err("Name must not be empty.".to_string())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for ClientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
