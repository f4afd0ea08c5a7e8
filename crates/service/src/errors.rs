use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("reservation for id '{0}' not found")]
    NotFound(i64),
    #[error("reservation for name '{0}' already exists")]
    AlreadyExists(String),
    #[error("storage error: {0}")]
    Storage(String),
}
