#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid catalog: {0}")]
    Catalog(String),

    #[error("Malformed catalog JSON: {0}")]
    CatalogJson(#[from] serde_json::Error),
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        Error::Validation(errors.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
