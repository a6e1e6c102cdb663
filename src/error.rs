use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("{0}")]
    Backend(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Browser error: {0}")]
    Browser(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Client-side form problems, caught before anything is sent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingFields,

    #[error("Amount must be greater than 0")]
    InvalidAmount,

    #[error("Please enter a category name")]
    MissingCategoryName,

    #[error("Please select a PDF file")]
    MissingFile,

    #[error("Only PDF files are supported")]
    NotPdf,
}
