use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("calculation style must not be empty")]
    EmptyStyle,
    #[error("field name must not be empty")]
    EmptyFieldName,
    #[error("'{0}' is a reserved field name")]
    ReservedFieldName(String),
}
