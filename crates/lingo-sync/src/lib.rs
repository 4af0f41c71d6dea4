//! Locale synchronization for Lingo.
//!
//! Brings a target locale up to date with its source locale. Entries the
//! target already has in the right shape are kept; entries that are
//! missing, mis-shaped, or whose source value changed since a previous
//! snapshot are translated; entries selected by a skip rule are copied
//! from the target untouched.

pub mod error;
pub mod orchestrator;
pub mod skip;
pub mod types;

pub use error::{SyncError, SyncResult};
pub use orchestrator::{plan, LocaleSync};
pub use skip::{PathPrefixSkip, SkipContext, SkipRule};
pub use types::{SourceLocale, SyncPlan, SyncRequest, TargetLocale};
