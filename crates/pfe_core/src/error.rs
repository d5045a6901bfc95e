use std::path::PathBuf;

use thiserror::Error;

/// Every failure the engine can surface to its caller.
///
/// Hook-signalled failures are deliberately absent: an `on_create` or
/// `on_update` returning `false` is a stop request, not an error.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("window backend unavailable: {0}")]
    Window(String),

    #[error("presentation backend unavailable: {0}")]
    Presenter(String),

    #[error("frame presentation failed: {0}")]
    Present(String),
}
