//! Error types for rollo-core
//!
//! These represent expected business outcomes (unsupported, unknown,
//! unresolvable entries), not programming faults. Their `Display` strings
//! are the single-line messages the CLI reports verbatim.

use thiserror::Error;

/// Result type alias using rollo-core RollError
pub type Result<T> = std::result::Result<T, RollError>;

/// Ways a roll decision can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollError {
    /// Entry is on the deny-list
    #[error("Rolling {0} is not supported.")]
    Unsupported(String),

    /// Entry is not a downstream variable
    #[error("Entry \"{0}\" not found in downstream manifest.")]
    EntryNotFound(String),

    /// No downstream dependency path embeds the entry's revision
    #[error("Could not find path for var \"{0}\" in downstream manifest.")]
    PathNotFound(String),

    /// Package-style entry has no upstream counterpart
    #[error("CIPD entry \"{0}\" not found in upstream manifest.")]
    UpstreamNotFound(String),
}
