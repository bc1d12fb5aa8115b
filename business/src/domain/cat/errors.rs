use crate::domain::errors::ApiError;

pub const CAT_NOT_FOUND: &str = "CAT_NOT_FOUND";

/// A cat lookup answered with 404, reclassified with domain meaning.
#[derive(Debug, thiserror::Error)]
#[error("Cat with ID {id} was not found")]
pub struct CatNotFoundError {
    pub id: String,
}

impl CatNotFoundError {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl From<CatNotFoundError> for ApiError {
    fn from(error: CatNotFoundError) -> Self {
        ApiError::new(error.to_string())
            .with_status(404)
            .with_code(CAT_NOT_FOUND)
    }
}
