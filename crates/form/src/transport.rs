use anyhow::Context;
use async_trait::async_trait;
use portfolio_contact::{Submission, SubmissionResult};
use url::Url;

use crate::SubmitTransport;

/// Posts submissions as JSON to `<base>/send-email`.
///
/// Error statuses still carry a result body, so the body is decoded whatever
/// the status code.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        let endpoint = base_url
            .join("/send-email")
            .context("Failed to build contact endpoint url")?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitTransport for HttpTransport {
    async fn send(&self, submission: &Submission) -> anyhow::Result<SubmissionResult> {
        let result = self
            .client
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await?
            .json::<SubmissionResult>()
            .await?;

        Ok(result)
    }
}
