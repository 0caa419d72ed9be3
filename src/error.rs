use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No workspace is open")]
    NoWorkspace,

    #[error("Cannot read metadata of {}: {source}", .path.display())]
    MetadataQuery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch editor '{command}': {source}")]
    Editor {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor '{command}' exited with status {code}")]
    EditorStatus { command: String, code: i32 },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Failed while opening an already created note
    pub fn is_presentation(&self) -> bool {
        matches!(self, Error::Editor { .. } | Error::EditorStatus { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
