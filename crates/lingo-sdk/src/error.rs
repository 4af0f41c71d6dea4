use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("processing error: {0}")]
    Process(#[from] lingo_processor::ProcessError),

    #[error("translation error: {0}")]
    Translate(#[from] lingo_translate::TranslateError),

    #[error("sync error: {0}")]
    Sync(#[from] lingo_sync::SyncError),
}

pub type SdkResult<T> = Result<T, SdkError>;
