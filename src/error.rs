use thiserror::Error;

/// Failure talking to the finance API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("could not encode request body: {0}")]
    Encode(String),
}

/// A form was submitted with a missing or unusable field. No request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("amount is required")]
    MissingAmount,

    #[error("amount must be a positive number")]
    InvalidAmount,

    #[error("description is required")]
    MissingDescription,

    #[error("category is required")]
    MissingCategory,

    #[error("month must look like YYYY-MM")]
    InvalidMonth,

    #[error("message is empty")]
    EmptyMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
