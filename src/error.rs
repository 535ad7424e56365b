//! Error types for the task list.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`crate::model::TaskList`] operations.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("invalid todo number {position} (the list has {len} todos)")]
    InvalidIndex { position: usize, len: usize },

    #[error("failed to access todo file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode todo file {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl TaskError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TaskError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error was caused by a position outside `[1, len]`.
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, TaskError::InvalidIndex { .. })
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
