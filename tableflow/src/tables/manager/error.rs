use super::super::storage::StorageError;
use super::super::traits::TableError;
use shared::{CommandError, CommandErrorCode};
use thiserror::Error;

/// Manager errors
///
/// Only opening the backing database can fail this way; commands report
/// through `CommandResponse` or `TableError`.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<&TableError> for CommandError {
    fn from(err: &TableError) -> Self {
        let code = match err {
            TableError::InvalidSeatCount { .. } => CommandErrorCode::InvalidSeatCount,
            TableError::EmptyItemName => CommandErrorCode::EmptyItemName,
        };
        CommandError::new(code, err.to_string())
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
