use lingo_translate::TranslateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("invalid {0} document: expected a JSON object")]
    InvalidDocument(&'static str),

    #[error("translation failed: {0}")]
    Translate(#[from] TranslateError),
}

pub type SyncResult<T> = Result<T, SyncError>;
