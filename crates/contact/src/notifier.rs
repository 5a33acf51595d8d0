use async_trait::async_trait;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::Submission;

/// Relays a validated submission onward.
///
/// An error means nothing can be reported to the submitter as sent. Callers
/// turn it into a generic failure and keep the cause for the operator.
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    async fn notify(&self, submission: &Submission) -> anyhow::Result<()>;
}

/// Writes every submission to the operational log instead of sending mail.
#[derive(Debug, Clone)]
pub struct LoggingNotifier {
    contact_address: String,
}

impl LoggingNotifier {
    pub fn new(contact_address: impl Into<String>) -> Self {
        Self {
            contact_address: contact_address.into(),
        }
    }
}

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn notify(&self, submission: &Submission) -> anyhow::Result<()> {
        let timestamp = OffsetDateTime::now_utc().format(&Rfc3339)?;

        tracing::info!(
            timestamp = %timestamp,
            name = %submission.name,
            email = %submission.email,
            subject = %submission.subject,
            message = %submission.message,
            contact = %self.contact_address,
            "New contact form submission"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_logging_notifier_records_every_field() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let notifier = LoggingNotifier::new("owner@example.com");
        let submission = Submission {
            name: "Ada Lovelace".to_owned(),
            email: "ada@example.org".to_owned(),
            subject: "Engine question".to_owned(),
            message: "About the bernoulli table".to_owned(),
        };

        assert!(notifier.notify(&submission).await.is_ok());

        let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("New contact form submission"));
        assert!(output.contains("name=Ada Lovelace"));
        assert!(output.contains("email=ada@example.org"));
        assert!(output.contains("subject=Engine question"));
        assert!(output.contains("message=About the bernoulli table"));
        assert!(output.contains("contact=owner@example.com"));

        let timestamp = output
            .split("timestamp=")
            .nth(1)
            .and_then(|rest| rest.split_whitespace().next())
            .unwrap();
        assert!(timestamp.contains('T') && timestamp.ends_with('Z'));
    }
}
