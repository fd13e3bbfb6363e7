use aws_config::SdkConfig;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use eyre::Context;
use std::future::Future;

const CHARSET: &str = "UTF-8";

/// Delivers an alert with the given subject and plain text message
pub trait Notifier {
    fn notify(
        &self,
        subject: &str,
        message: &str,
    ) -> impl Future<Output = eyre::Result<()>> + Send;
}

/// Sends alerts as plain text emails through SES
///
/// One email per alert, no retries.
#[derive(Clone, Debug)]
pub struct SesNotifier {
    client: aws_sdk_sesv2::Client,
    sender: String,
    recipient: String,
}

impl SesNotifier {
    pub fn new(config: &SdkConfig, sender: &str, recipient: &str) -> Self {
        Self {
            client: aws_sdk_sesv2::Client::new(config),
            sender: sender.to_string(),
            recipient: recipient.to_string(),
        }
    }
}

fn content(data: &str) -> eyre::Result<Content> {
    Content::builder()
        .data(data)
        .charset(CHARSET)
        .build()
        .wrap_err("Failed to build email content")
}

impl Notifier for SesNotifier {
    async fn notify(&self, subject: &str, message: &str) -> eyre::Result<()> {
        let email = Message::builder()
            .subject(content(subject)?)
            .body(Body::builder().text(content(message)?).build())
            .build();

        let output = self
            .client
            .send_email()
            .from_email_address(&self.sender)
            .destination(
                Destination::builder()
                    .to_addresses(&self.recipient)
                    .build(),
            )
            .content(EmailContent::builder().simple(email).build())
            .send()
            .await
            .wrap_err("Failed to send email")?;

        tracing::info!(
            message_id = output.message_id().unwrap_or_default(),
            recipient = %self.recipient,
            "Alert email sent"
        );

        Ok(())
    }
}

/// Writes alerts to the log instead of sending them
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    async fn notify(&self, subject: &str, message: &str) -> eyre::Result<()> {
        tracing::warn!(subject, message, "Alert not sent, dry run");
        Ok(())
    }
}
