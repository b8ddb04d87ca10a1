//! Command responses returned by the table store

use serde::{Deserialize, Serialize};

/// Outcome of one command
///
/// `success` reports whether the command was accepted. `changed` is false
/// for no-ops (unknown guest or item, no table). `persisted` is false when
/// the new state could not be written; the in-memory state still holds
/// and `error` carries the storage warning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandResponse {
    pub success: bool,
    pub changed: bool,
    pub persisted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn applied() -> Self {
        Self {
            success: true,
            changed: true,
            persisted: true,
            error: None,
        }
    }

    pub fn unchanged() -> Self {
        Self {
            success: true,
            changed: false,
            persisted: true,
            error: None,
        }
    }

    /// State changed in memory but the write failed
    pub fn persistence_warning(message: impl Into<String>) -> Self {
        Self {
            success: true,
            changed: true,
            persisted: false,
            error: Some(CommandError::new(
                CommandErrorCode::StorageUnavailable,
                message,
            )),
        }
    }

    pub fn error(error: CommandError) -> Self {
        Self {
            success: false,
            changed: false,
            persisted: true,
            error: Some(error),
        }
    }
}

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command error codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    InvalidSeatCount,
    EmptyItemName,
    /// Warning only: the command was applied in memory
    StorageUnavailable,
}
