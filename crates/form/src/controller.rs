use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use async_trait::async_trait;
use portfolio_contact::{Submission, SubmissionResult};

use crate::{ButtonLabel, ButtonState, Effect, FormEvent};

/// Carries one submission to the contact endpoint.
#[async_trait]
pub trait SubmitTransport: Send + Sync + 'static {
    async fn send(&self, submission: &Submission) -> anyhow::Result<SubmissionResult>;
}

#[derive(Debug, Default, Clone)]
pub struct ControllerOptions {
    /// `None` waits for the transport forever, leaving the control disabled
    /// if the request never settles.
    pub request_timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent { message: String },
    Rejected { error: String },
    /// The control was disabled, no request was made.
    Ignored,
}

/// Label and enablement are read off `state`.
#[derive(Debug, Default)]
struct Inner {
    state: ButtonState,
    fields: Submission,
}

impl Inner {
    fn dispatch(&mut self, event: FormEvent) -> Vec<Effect> {
        let transition = self.state.transition(event);
        self.state = transition.state;

        if transition.effects.contains(&Effect::ClearFields) {
            self.fields = Submission::default();
        }

        transition.effects
    }
}

/// Drives the submit control of one contact form.
///
/// At most one request is in flight: a submit while the control is disabled
/// returns [`SubmitOutcome::Ignored`] without touching the transport.
pub struct FormController<T> {
    transport: Arc<T>,
    options: ControllerOptions,
    inner: Arc<Mutex<Inner>>,
}

impl<T> Clone for FormController<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            options: self.options.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: SubmitTransport> FormController<T> {
    pub fn new(transport: T, options: ControllerOptions) -> Self {
        Self {
            transport: Arc::new(transport),
            options,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    pub fn set_fields(&self, fields: Submission) {
        lock(&self.inner).fields = fields;
    }

    pub fn fields(&self) -> Submission {
        lock(&self.inner).fields.clone()
    }

    pub fn state(&self) -> ButtonState {
        lock(&self.inner).state
    }

    pub fn label(&self) -> ButtonLabel {
        lock(&self.inner).state.label()
    }

    pub fn is_enabled(&self) -> bool {
        lock(&self.inner).state.is_enabled()
    }

    /// Sends the current fields and returns once the response is in. The
    /// control stays disabled until the revert delay has passed.
    pub async fn submit(&self) -> SubmitOutcome {
        let submission = {
            let mut inner = lock(&self.inner);
            let effects = inner.dispatch(FormEvent::Submit);
            if !effects.contains(&Effect::SendRequest) {
                tracing::debug!(state = ?inner.state, "Submit ignored while control is disabled");
                return SubmitOutcome::Ignored;
            }
            inner.fields.clone()
        };

        let (event, outcome) = match self.send(&submission).await {
            Ok(SubmissionResult::Success { message }) => {
                (FormEvent::ResponseSuccess, SubmitOutcome::Sent { message })
            }
            Ok(SubmissionResult::Failure { error }) => {
                tracing::warn!(error = %error, "Contact form rejected");
                (FormEvent::ResponseFailure, SubmitOutcome::Rejected { error })
            }
            Err(err) => {
                tracing::warn!(error = %err, "Error sending contact form");
                (
                    FormEvent::ResponseFailure,
                    SubmitOutcome::Rejected {
                        error: err.to_string(),
                    },
                )
            }
        };

        let effects = lock(&self.inner).dispatch(event);
        for effect in effects {
            if let Effect::ScheduleRevert(delay) = effect {
                self.schedule_revert(delay);
            }
        }

        outcome
    }

    async fn send(&self, submission: &Submission) -> anyhow::Result<SubmissionResult> {
        match self.options.request_timeout {
            Some(limit) => tokio::time::timeout(limit, self.transport.send(submission))
                .await
                .unwrap_or_else(|_| Err(anyhow::anyhow!("request timed out after {limit:?}"))),
            None => self.transport.send(submission).await,
        }
    }

    fn schedule_revert(&self, delay: Duration) {
        let inner = Arc::clone(&self.inner);

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            lock(&inner).dispatch(FormEvent::RevertElapsed);
        });
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
