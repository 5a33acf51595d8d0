use std::sync::Arc;

use anyhow::Context;
use askama::Template;
use async_trait::async_trait;
use portfolio_contact::{Notifier, Submission};

use crate::{
    Email, EmailSender,
    template::{ContactAutoReplyHtmlTemplate, ContactNotificationHtmlTemplate},
};

/// Emails the site owner about a submission, then sends the submitter an
/// auto-reply.
///
/// The two sends are sequential. A failed owner notification aborts before
/// the auto-reply is attempted.
#[derive(Clone)]
pub struct EmailNotifier {
    sender: Arc<dyn EmailSender>,
    owner_address: String,
    from_address: String,
}

impl EmailNotifier {
    pub fn new(
        sender: Arc<dyn EmailSender>,
        owner_address: impl Into<String>,
        from_address: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            owner_address: owner_address.into(),
            from_address: from_address.into(),
        }
    }

    fn owner_notification(&self, submission: &Submission) -> anyhow::Result<Email> {
        let html = ContactNotificationHtmlTemplate {
            name: &submission.name,
            email: &submission.email,
            subject: &submission.subject,
            message: &submission.message,
        }
        .render()
        .context("Failed to render contact notification template")?;

        Ok(Email {
            to: self.owner_address.to_owned(),
            from: self.from_address.to_owned(),
            subject: format!("Portfolio Contact: {}", submission.subject),
            html,
        })
    }

    fn auto_reply(&self, submission: &Submission) -> anyhow::Result<Email> {
        let html = ContactAutoReplyHtmlTemplate {
            name: &submission.name,
            subject: &submission.subject,
            message: &submission.message,
        }
        .render()
        .context("Failed to render contact auto-reply template")?;

        Ok(Email {
            to: submission.email.to_owned(),
            from: self.from_address.to_owned(),
            subject: "Thank you for contacting me!".to_owned(),
            html,
        })
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    #[tracing::instrument(skip_all, fields(from = %submission.email))]
    async fn notify(&self, submission: &Submission) -> anyhow::Result<()> {
        let notification = self.owner_notification(submission)?;
        let reply = self.auto_reply(submission)?;

        self.sender
            .send(notification)
            .await
            .context("Failed to send owner notification")?;

        self.sender
            .send(reply)
            .await
            .context("Failed to send auto-reply")?;

        tracing::info!("Contact form emails sent");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<Email>>,
        fail_on: Option<usize>,
    }

    #[async_trait]
    impl EmailSender for RecordingSender {
        async fn send(&self, email: Email) -> anyhow::Result<()> {
            let mut sent = self.sent.lock().unwrap();
            let attempt = sent.len();
            sent.push(email);

            if self.fail_on == Some(attempt) {
                anyhow::bail!("provider unavailable");
            }

            Ok(())
        }
    }

    fn submission() -> Submission {
        Submission {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            subject: "Hello".to_owned(),
            message: "<script>alert(1)</script>".to_owned(),
        }
    }

    fn notifier(sender: Arc<RecordingSender>) -> EmailNotifier {
        EmailNotifier::new(sender, "owner@example.com", "noreply@example.com")
    }

    #[tokio::test]
    async fn test_sends_owner_notification_then_auto_reply() {
        let sender = Arc::new(RecordingSender::default());

        notifier(sender.clone()).notify(&submission()).await.unwrap();

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "owner@example.com");
        assert_eq!(sent[0].from, "noreply@example.com");
        assert_eq!(sent[0].subject, "Portfolio Contact: Hello");
        assert!(sent[0].html.contains("ada@example.com"));
        assert_eq!(sent[1].to, "ada@example.com");
        assert!(sent[1].html.contains("Ada"));
    }

    #[tokio::test]
    async fn test_submitted_fields_are_escaped() {
        let sender = Arc::new(RecordingSender::default());

        notifier(sender.clone()).notify(&submission()).await.unwrap();

        let sent = sender.sent.lock().unwrap();
        assert!(!sent[0].html.contains("<script>"));
        assert!(sent[0].html.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn test_owner_failure_skips_auto_reply() {
        let sender = Arc::new(RecordingSender {
            fail_on: Some(0),
            ..Default::default()
        });

        let err = notifier(sender.clone())
            .notify(&submission())
            .await
            .unwrap_err();

        assert!(format!("{err:#}").contains("provider unavailable"));
        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "owner@example.com");
    }

    #[tokio::test]
    async fn test_auto_reply_failure_fails_dispatch() {
        let sender = Arc::new(RecordingSender {
            fail_on: Some(1),
            ..Default::default()
        });

        assert!(notifier(sender.clone()).notify(&submission()).await.is_err());
        assert_eq!(sender.sent.lock().unwrap().len(), 2);
    }
}
