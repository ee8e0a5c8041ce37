//! Error types for named-instrument registration.

use thiserror::Error;

/// Failure to resolve a named instrument as a metadata store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Registration {
    /// The name is already taken by an instrument of a different kind.
    #[error("instrument '{0}' is already registered with a different kind")]
    KindMismatch(String),
}
