use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::domain::ClientEmail;

#[derive(thiserror::Error, Debug)]
pub enum NotifyError {
    #[error("email transport is not configured (missing API key or trainer address)")]
    MissingConfiguration,
    #[error("email transport request failed")]
    Transport(#[from] reqwest::Error),
}

/// Client for the transactional email API.
///
/// Credentials and recipient are optional on purpose: a deployment without
/// them still accepts submissions, and every send attempt fails with
/// `NotifyError::MissingConfiguration` for the caller to log.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: ClientEmail,
    authorization_token: Option<Secret<String>>,
    recipient: Option<ClientEmail>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: ClientEmail,
        authorization_token: Option<Secret<String>>,
        recipient: Option<ClientEmail>,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            sender,
            authorization_token,
            recipient,
        })
    }

    /// Sends one email to the configured recipient. The transport's own
    /// timeout bounds how long a hanging server can hold us up.
    pub async fn send_email(&self, subject: &str, html_body: &str) -> Result<(), NotifyError> {
        let (token, recipient) = match (&self.authorization_token, &self.recipient) {
            (Some(token), Some(recipient)) => (token, recipient),
            _ => return Err(NotifyError::MissingConfiguration),
        };

        let url = format!("{}/emails", self.base_url);
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: vec![recipient.as_ref()],
            subject,
            html: html_body,
        };
        self.http_client
            .post(&url)
            .bearer_auth(token.expose_secret())
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
}
