use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portfolio_contact::{DISPATCH_FAILED, SUBMISSION_TOO_LARGE, SubmissionResult};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Contact(#[from] portfolio_contact::Error),

    /// Body absent, not JSON, or not shaped like the contact form. Treated as
    /// missing fields, except a body over the size limit.
    #[error("Invalid request body: {0}")]
    Body(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Contact(portfolio_contact::Error::Validate(_)) => (
                StatusCode::BAD_REQUEST,
                Json(SubmissionResult::fields_required()),
            )
                .into_response(),
            AppError::Body(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                tracing::warn!(error = %rejection, "Contact form body over size limit");
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    Json(SubmissionResult::failure(SUBMISSION_TOO_LARGE)),
                )
                    .into_response()
            }
            AppError::Body(rejection) => {
                tracing::debug!(error = %rejection, "Rejected contact form body");
                (
                    StatusCode::BAD_REQUEST,
                    Json(SubmissionResult::fields_required()),
                )
                    .into_response()
            }
            AppError::Contact(portfolio_contact::Error::Dispatch(e)) => {
                tracing::error!(error = ?e, "Contact form error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(SubmissionResult::failure(DISPATCH_FAILED)),
                )
                    .into_response()
            }
        }
    }
}
