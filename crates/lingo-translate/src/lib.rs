//! Translator front ends for Lingo.
//!
//! Two translators share the [`Translator`] contract:
//!
//! - [`ChatTranslator`] drives the chunk worker pool over a conversation
//!   transport and can ask the generator to correct a malformed reply in
//!   the same conversation.
//! - [`TextTranslator`] sends chunks one at a time over a plain prompt
//!   transport and checks the result by structural equality.

pub mod chat;
pub mod config;
pub mod error;
pub mod prompt;
pub mod text;
pub mod translator;
pub mod validator;

pub use chat::ChatTranslator;
pub use config::TranslatorConfig;
pub use error::{TranslateError, TranslateResult};
pub use text::TextTranslator;
pub use translator::Translator;
pub use validator::{
    compare_leaf_paths, validate, CorrectionBuilder, CorrectionContext, PathComparison,
    PathListCorrection, TranslationValidator,
};
