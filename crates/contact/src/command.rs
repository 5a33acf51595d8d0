use std::sync::Arc;

use crate::{Error, Notifier, SubmitFormInput};

/// Entry point for contact form submissions.
///
/// Holds the notifier chosen at startup; nothing else is shared between calls.
#[derive(Clone)]
pub struct Command(pub Arc<dyn Notifier>);

impl Command {
    pub fn new(notifier: impl Notifier) -> Self {
        Self(Arc::new(notifier))
    }

    /// Validates the input and dispatches it once. A validation failure never
    /// reaches the notifier.
    pub async fn submit_form(&self, input: SubmitFormInput) -> crate::Result<()> {
        let submission = input.into_submission()?;

        self.0.notify(&submission).await.map_err(Error::Dispatch)?;

        Ok(())
    }
}
