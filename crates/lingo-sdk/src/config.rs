//! Configuration file support.
//!
//! ```toml
//! [processor]
//! concurrency = 3
//! max_chunk_entries = 6
//! chunk_retry_limit = 5
//!
//! [translator]
//! plain_text_retries = 3
//!
//! [sync]
//! skip = ["brand", "legal.terms"]
//! ```
//!
//! Every section and field is optional.

use std::path::Path;

use lingo_processor::ProcessorConfig;
use lingo_sync::PathPrefixSkip;
use lingo_translate::TranslatorConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SdkError, SdkResult};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LingoConfig {
    pub processor: ProcessorConfig,
    pub translator: TranslatorConfig,
    pub sync: SyncConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Path prefixes of the target left untouched by sync.
    pub skip: Vec<String>,
}

impl SyncConfig {
    /// The configured prefixes as a skip rule, if there are any.
    pub fn skip_rule(&self) -> Option<PathPrefixSkip> {
        (!self.skip.is_empty()).then(|| PathPrefixSkip::new(self.skip.iter().cloned()))
    }
}

impl LingoConfig {
    pub fn from_toml_str(text: &str) -> SdkResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SdkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}
