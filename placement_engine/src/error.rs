//! Error types for the placement engine
//!
//! This module defines the error types returned by the engine singletons
//! and the procedural-object bridge. The transform core itself does not
//! fail: grid corruption is logged, not returned.

use std::fmt;

/// Result type for placement engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Placement engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A singleton was requested before it was created (or before `Engine::initialize`)
    NotInitialized(String),

    /// A singleton was created twice
    AlreadyExists(String),

    /// A lock guarding shared state was poisoned by a panicking thread
    LockPoisoned(String),

    /// The procedural-object bridge was not discovered or was marked unavailable
    BridgeUnavailable(String),

    /// The procedural-object bridge rejected an operation
    BridgeFailure(String),

    /// The operation does not support this entity kind
    UnsupportedKind(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotInitialized(msg) => write!(f, "Not initialized: {}", msg),
            Error::AlreadyExists(msg) => write!(f, "Already exists: {}", msg),
            Error::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
            Error::BridgeUnavailable(msg) => write!(f, "Procedural bridge unavailable: {}", msg),
            Error::BridgeFailure(msg) => write!(f, "Procedural bridge failure: {}", msg),
            Error::UnsupportedKind(msg) => write!(f, "Unsupported entity kind: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
