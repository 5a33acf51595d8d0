use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use portfolio_contact::{Notifier, SubmitFormInput, Submission};

#[derive(Clone, Default)]
pub struct SpyNotifier {
    calls: Arc<AtomicUsize>,
    fail_with: Option<&'static str>,
}

#[allow(dead_code)]
impl SpyNotifier {
    pub fn failing(cause: &'static str) -> Self {
        Self {
            calls: Arc::default(),
            fail_with: Some(cause),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Notifier for SpyNotifier {
    async fn notify(&self, _submission: &Submission) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.fail_with {
            Some(cause) => Err(anyhow::anyhow!(cause)),
            None => Ok(()),
        }
    }
}

pub fn full_input() -> SubmitFormInput {
    SubmitFormInput {
        name: Some("A".to_owned()),
        email: Some("a@b.com".to_owned()),
        subject: Some("S".to_owned()),
        message: Some("M".to_owned()),
    }
}
