use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
