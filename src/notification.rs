//! Rendering and delivery of the trainer-facing consultation alert.

use crate::domain::{ContactSubmission, service_label};
use crate::email_client::{EmailClient, NotifyError};

/// Subject line is deterministic so the trainer's inbox filters can key on it.
pub fn consultation_subject(submission: &ContactSubmission) -> String {
    format!(
        "New Consultation Request: {} - {}",
        service_label(&submission.service),
        submission.name
    )
}

/// The fixed HTML template from the website's dark theme, populated with the
/// client's details. The message section is rendered only when the client
/// actually wrote something.
pub fn consultation_html(submission: &ContactSubmission) -> String {
    let phone = if submission.phone.is_empty() {
        "Not provided"
    } else {
        submission.phone.as_str()
    };
    let message_section = if submission.message.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div style="background-color: #18181B; border-radius: 12px; padding: 24px;">
                <h2 style="color: #DC2626; margin-top: 0; font-size: 18px;">Message</h2>
                <p style="color: #FAFAFA; line-height: 1.6; margin: 0;">{}</p>
            </div>"#,
            submission.message
        )
    };

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #09090B; color: #FAFAFA;">
            <div style="text-align: center; margin-bottom: 30px;">
                <h1 style="color: #DC2626; margin: 0;">New Consultation Request</h1>
            </div>
            <div style="background-color: #18181B; border-radius: 12px; padding: 24px; margin-bottom: 20px;">
                <h2 style="color: #DC2626; margin-top: 0; font-size: 18px;">Client Details</h2>
                <table style="width: 100%; border-collapse: collapse;">
                    <tr>
                        <td style="padding: 8px 0; color: #A1A1AA; width: 120px;">Name:</td>
                        <td style="padding: 8px 0; color: #FAFAFA;">{name}</td>
                    </tr>
                    <tr>
                        <td style="padding: 8px 0; color: #A1A1AA;">Email:</td>
                        <td style="padding: 8px 0; color: #FAFAFA;"><a href="mailto:{email}" style="color: #DC2626;">{email}</a></td>
                    </tr>
                    <tr>
                        <td style="padding: 8px 0; color: #A1A1AA;">Phone:</td>
                        <td style="padding: 8px 0; color: #FAFAFA;">{phone}</td>
                    </tr>
                    <tr>
                        <td style="padding: 8px 0; color: #A1A1AA;">Service:</td>
                        <td style="padding: 8px 0; color: #DC2626; font-weight: bold;">{service}</td>
                    </tr>
                </table>
            </div>
            {message_section}
            <div style="text-align: center; margin-top: 30px; padding-top: 20px; border-top: 1px solid #27272A;">
                <p style="color: #A1A1AA; font-size: 12px;">This email was sent from your Prem Rishi Fitness website contact form.</p>
            </div>
        </div>"#,
        name = submission.name,
        email = submission.email,
        phone = phone,
        service = service_label(&submission.service),
        message_section = message_section,
    )
}

/// Best-effort alert to the trainer. The caller decides what a failure means;
/// for the contact route that is a log line and nothing else.
#[tracing::instrument(
    name = "Sending the consultation alert email",
    skip(email_client, submission),
    fields(submission_id = %submission.id)
)]
pub async fn notify_trainer(
    email_client: &EmailClient,
    submission: &ContactSubmission,
) -> Result<(), NotifyError> {
    let subject = consultation_subject(submission);
    let html = consultation_html(submission);
    email_client.send_email(&subject, &html).await?;
    tracing::info!("Consultation alert email sent");
    Ok(())
}
