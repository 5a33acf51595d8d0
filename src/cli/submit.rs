use std::time::Duration;

use anyhow::Result;
use portfolio_contact::Submission;
use portfolio_form::{ControllerOptions, FormController, HttpTransport, SubmitOutcome};
use url::Url;

/// Submits the contact form once against a running server, the way the page
/// script does.
pub async fn submit(
    base_url: Url,
    fields: Submission,
    request_timeout: Option<Duration>,
) -> Result<SubmitOutcome> {
    let transport = HttpTransport::new(&base_url)?;
    tracing::info!(endpoint = %transport.endpoint(), "Submitting contact form");

    let controller = FormController::new(transport, ControllerOptions { request_timeout });
    controller.set_fields(fields);

    let outcome = controller.submit().await;
    tracing::info!(label = %controller.label(), "Contact form settled");

    Ok(outcome)
}
