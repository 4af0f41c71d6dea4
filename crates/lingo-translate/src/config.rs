use serde::{Deserialize, Serialize};

/// Configuration for the plain-text translator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Extra attempts per chunk after the first one fails.
    pub plain_text_retries: usize,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            plain_text_retries: 3,
        }
    }
}
