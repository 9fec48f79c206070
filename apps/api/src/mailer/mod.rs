//! Outbound mail — composes the application email and submits it to the
//! relay over implicit TLS.
//!
//! Trait-based so router tests can record sends instead of talking to the
//! network. The attachment content type is fixed to `application/pdf`
//! regardless of the uploaded file's real type, matching the tool's
//! resume-only intent.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::info;

use crate::config::Config;

/// The relay endpoint is fixed; only the account and credential are
/// configuration.
pub const SMTP_RELAY: &str = "smtp.gmail.com";
const SEND_TIMEOUT_SECS: u64 = 30;
const ATTACHMENT_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

/// The outbound mail seam carried in `AppState`.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends one application email with the resume attached.
    async fn send_application(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        attachment_name: &str,
        attachment: Vec<u8>,
    ) -> Result<(), MailError>;
}

/// Production mailer: authenticated submission to the fixed relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn from_config(config: &Config) -> Result<Self, MailError> {
        let from: Mailbox = config
            .gmail_email
            .parse()
            .map_err(|_| MailError::InvalidAddress(config.gmail_email.clone()))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(SMTP_RELAY)
            .map_err(|e| MailError::Smtp(e.to_string()))?
            .credentials(Credentials::new(
                config.gmail_email.clone(),
                config.gmail_app_password.clone(),
            ))
            .timeout(Some(Duration::from_secs(SEND_TIMEOUT_SECS)))
            .build();

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_application(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        attachment_name: &str,
        attachment: Vec<u8>,
    ) -> Result<(), MailError> {
        let message = build_message(
            self.from.clone(),
            to,
            subject,
            body,
            attachment_name,
            attachment,
        )?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        info!(to = %to, subject = %subject, "Application email sent");
        Ok(())
    }
}

/// Composes the outgoing message: plain-text body plus one binary attachment
/// named after the uploaded file.
pub fn build_message(
    from: Mailbox,
    to: &str,
    subject: &str,
    body: &str,
    attachment_name: &str,
    attachment: Vec<u8>,
) -> Result<Message, MailError> {
    let to_addr: Mailbox = to
        .parse()
        .map_err(|_| MailError::InvalidAddress(to.to_string()))?;

    let content_type = ContentType::parse(ATTACHMENT_CONTENT_TYPE)
        .map_err(|e| MailError::Build(e.to_string()))?;

    let attachment_part = Attachment::new(attachment_name.to_string()).body(attachment, content_type);

    Message::builder()
        .from(from)
        .to(to_addr)
        .subject(subject)
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(body.to_string()))
                .singlepart(attachment_part),
        )
        .map_err(|e| MailError::Build(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> Mailbox {
        "candidate@gmail.com".parse().unwrap()
    }

    #[test]
    fn test_build_message_carries_headers_and_attachment() {
        let message = build_message(
            sender(),
            "jane@co.com",
            "Application for Backend Engineer | Vamsi Krishna",
            "Dear Jane,\n\nI am writing to apply.",
            "resume.pdf",
            b"%PDF-1.4 fake".to_vec(),
        )
        .unwrap();

        let rendered = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(rendered.contains("Subject: Application for Backend Engineer | Vamsi Krishna"));
        assert!(rendered.contains("To: jane@co.com"));
        assert!(rendered.contains("From: candidate@gmail.com"));
        assert!(rendered.contains("application/pdf"));
        assert!(rendered.contains("resume.pdf"));
    }

    #[test]
    fn test_build_message_body_is_plain_text() {
        let message = build_message(
            sender(),
            "jane@co.com",
            "Subject",
            "Dear Jane,",
            "resume.pdf",
            b"bytes".to_vec(),
        )
        .unwrap();

        let rendered = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(rendered.contains("Dear Jane,"));
        assert!(rendered.contains("multipart/mixed"));
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let result = build_message(
            sender(),
            "not-an-address",
            "Subject",
            "Body",
            "resume.pdf",
            vec![],
        );
        assert!(matches!(result, Err(MailError::InvalidAddress(_))));
    }

    #[test]
    fn test_attachment_keeps_original_filename() {
        let message = build_message(
            sender(),
            "jane@co.com",
            "Subject",
            "Body",
            "My Resume (2026).pdf",
            b"bytes".to_vec(),
        )
        .unwrap();

        let rendered = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(rendered.contains("My Resume (2026).pdf"));
    }
}
