use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("a title is required")]
    MissingTitle,

    #[error("code is required")]
    MissingCode,
}
