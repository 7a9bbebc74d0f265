use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Api error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Http error")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error")]
    Json(#[from] serde_json::Error),

    #[error("Io error")]
    Io(#[from] std::io::Error),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
