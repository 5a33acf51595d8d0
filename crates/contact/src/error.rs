pub const FIELDS_REQUIRED: &str = "All fields are required";
pub const SUBMISSION_RECEIVED: &str =
    "Message received successfully! I will get back to you soon.";
pub const DISPATCH_FAILED: &str = "Failed to process message. Please try again later.";
pub const SUBMISSION_TOO_LARGE: &str = "Message is too large to send.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}", FIELDS_REQUIRED)]
    Validate(#[from] validator::ValidationErrors),

    #[error("dispatch failed: {0:#}")]
    Dispatch(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
