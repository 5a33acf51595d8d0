//! Outbound email transports

use anyhow::Context;
use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport, message::header,
    transport::smtp::authentication::Credentials,
};
use serde::Serialize;
use url::Url;

const SENDGRID_ENDPOINT: &str = "https://api.sendgrid.com/v3/mail/send";

/// A single HTML message handed to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html: String,
}

/// Sends one message. Each call either delivers to the provider or fails as a
/// whole.
#[async_trait]
pub trait EmailSender: Send + Sync + 'static {
    async fn send(&self, email: Email) -> anyhow::Result<()>;
}

/// Transactional email over the SendGrid v3 HTTP API.
#[derive(Debug, Clone)]
pub struct SendGridSender {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl SendGridSender {
    pub fn new(api_key: impl Into<String>, endpoint_override: Option<Url>) -> anyhow::Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            anyhow::bail!("SendGrid API key is empty");
        }

        let endpoint = match endpoint_override {
            Some(endpoint) => endpoint,
            None => SENDGRID_ENDPOINT.parse()?,
        };

        let client = reqwest::Client::builder()
            .user_agent(concat!("portfolio/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        tracing::info!(endpoint = %endpoint, "SendGrid email sender initialized");

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl EmailSender for SendGridSender {
    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    async fn send(&self, email: Email) -> anyhow::Result<()> {
        tracing::info!("Sending email");

        let body = MailSendRequest {
            personalizations: [Personalization {
                to: [Address { email: &email.to }],
            }],
            from: Address { email: &email.from },
            subject: &email.subject,
            content: [Content {
                kind: "text/html",
                value: &email.html,
            }],
        };

        self.client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[derive(Serialize)]
struct MailSendRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    subject: &'a str,
    content: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
}

/// Plain SMTP relay, for deployments without an HTTP email provider.
#[derive(Clone)]
pub struct SmtpSender {
    mailer: SmtpTransport,
}

impl SmtpSender {
    pub fn new(host: &str, port: u16, username: &str, password: &str) -> anyhow::Result<Self> {
        let mailer = if username.is_empty() || password.is_empty() {
            tracing::info!(
                smtp_host = %host,
                smtp_port = port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(host).port(port).build()
        } else {
            tracing::info!(
                smtp_host = %host,
                smtp_port = port,
                "Email service initialized with authentication and TLS"
            );
            let creds = Credentials::new(username.to_owned(), password.to_owned());

            SmtpTransport::relay(host)?
                .port(port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer })
    }
}

#[async_trait]
impl EmailSender for SmtpSender {
    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    async fn send(&self, email: Email) -> anyhow::Result<()> {
        tracing::info!("Sending email");

        let message = Message::builder()
            .from(email.from.parse()?)
            .to(email.to.parse()?)
            .subject(email.subject)
            .header(header::ContentType::TEXT_HTML)
            .body(email.html)?;

        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}
