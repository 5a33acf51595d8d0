use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::FIELDS_REQUIRED;

/// Raw contact form body as it arrives on the wire.
///
/// Every field is optional here so that a missing key and an empty string
/// are rejected the same way by [`SubmitFormInput::into_submission`].
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SubmitFormInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl SubmitFormInput {
    pub fn into_submission(self) -> Result<Submission, validator::ValidationErrors> {
        let submission = Submission {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        };

        submission.validate()?;

        Ok(submission)
    }
}

/// One validated contact form payload. Only presence is checked, the email
/// address is relayed as typed.
#[derive(Validate, Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub message: String,
}

/// Outcome returned by `POST /send-email`.
///
/// Encoded as `{"success": true, "message": ..}` or
/// `{"success": false, "error": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SubmissionResponse", into = "SubmissionResponse")]
pub enum SubmissionResult {
    Success { message: String },
    Failure { error: String },
}

impl SubmissionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn fields_required() -> Self {
        Self::failure(FIELDS_REQUIRED)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[derive(Serialize, Deserialize)]
struct SubmissionResponse {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<SubmissionResponse> for SubmissionResult {
    fn from(value: SubmissionResponse) -> Self {
        if value.success {
            Self::Success {
                message: value.message.unwrap_or_default(),
            }
        } else {
            Self::Failure {
                error: value
                    .error
                    .unwrap_or_else(|| "Failed to send message".to_owned()),
            }
        }
    }
}

impl From<SubmissionResult> for SubmissionResponse {
    fn from(value: SubmissionResult) -> Self {
        match value {
            SubmissionResult::Success { message } => Self {
                success: true,
                message: Some(message),
                error: None,
            },
            SubmissionResult::Failure { error } => Self {
                success: false,
                message: None,
                error: Some(error),
            },
        }
    }
}
