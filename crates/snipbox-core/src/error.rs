use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid category: {0}")]
    InvalidCategory(String),
}
