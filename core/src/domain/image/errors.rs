use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("image source could not be read: {0}")]
    Unreadable(String),

    #[error("malformed image payload: {0}")]
    Malformed(String),
}
