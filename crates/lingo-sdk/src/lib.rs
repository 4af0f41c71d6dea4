//! High-level SDK for Lingo.
//!
//! The entry points applications embed: [`process_document`],
//! [`translate_document`], and [`sync_locale`], plus [`LingoConfig`] and the
//! [`Lingo`] facade that builds translators and sync requests from it.

pub mod api;
pub mod config;
pub mod error;
pub mod lingo;

pub use api::{process_document, sync_locale, translate_document};
pub use config::{LingoConfig, SyncConfig};
pub use error::{SdkError, SdkResult};
pub use lingo::Lingo;

// Re-export key types
pub use lingo_processor::{
    ChatTransport, Chunk, ChunkTask, MismatchScope, ProcessError, ProcessorConfig, TextTransport,
    TransportError, TransportResult,
};
pub use lingo_sync::{PathPrefixSkip, SkipContext, SkipRule, SourceLocale, SyncPlan, SyncRequest, TargetLocale};
pub use lingo_translate::{
    ChatTranslator, CorrectionBuilder, CorrectionContext, TextTranslator, Translator,
    TranslatorConfig,
};
pub use lingo_types::{Document, Message, Role, ValidationResult};
