// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Contact exists, use \"change\" command")]
    Duplicate(String),
    #[error("Contact not found.")]
    NotFound(String),
}

pub type ContactResult<T> = Result<T, ContactError>;
