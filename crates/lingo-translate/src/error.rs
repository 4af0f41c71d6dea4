use lingo_processor::ProcessError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("invalid language code: {0:?}")]
    InvalidLanguage(String),

    #[error(transparent)]
    Process(#[from] ProcessError),
}

impl From<lingo_chunk::ChunkError> for TranslateError {
    fn from(err: lingo_chunk::ChunkError) -> Self {
        Self::Process(err.into())
    }
}

pub type TranslateResult<T> = Result<T, TranslateError>;
