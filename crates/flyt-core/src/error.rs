use thiserror::Error;

use crate::account::AccountId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Unknown account: {0}")]
    UnknownAccount(AccountId),

    #[error("Unknown username: {0}")]
    UnknownUsername(String),

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),
}
