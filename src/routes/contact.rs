use axum::{Json, extract::State, extract::rejection::JsonRejection};
use portfolio_contact::{SUBMISSION_RECEIVED, SubmissionResult, SubmitFormInput};

use crate::{error::AppError, routes::AppState};

/// POST /send-email
pub async fn action(
    State(app_state): State<AppState>,
    input: Result<Json<SubmitFormInput>, JsonRejection>,
) -> Result<Json<SubmissionResult>, AppError> {
    let Json(input) = input?;

    app_state.contact_command.submit_form(input).await?;

    Ok(Json(SubmissionResult::success(SUBMISSION_RECEIVED)))
}
