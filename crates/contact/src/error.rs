use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid relay endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("relay rejected submission with status {status}")]
    Status { status: reqwest::StatusCode },
}
