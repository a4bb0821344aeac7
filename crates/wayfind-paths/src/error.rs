//! Error types for queue and map construction.

use std::fmt;

/// Errors reported by [`IndexedPriorityQueue`](crate::IndexedPriorityQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// An element with the same identity is already queued.
    DuplicateId,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId => write!(f, "an element with this id is already queued"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Errors arising from an invalid [`NavConfig`](crate::NavConfig).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Cell size must be finite and strictly positive.
    InvalidCellSize(f32),
    /// The world-space origin has a NaN or infinite coordinate.
    NonFiniteOrigin,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellSize(size) => {
                write!(f, "cell size must be finite and positive, got {size}")
            }
            Self::NonFiniteOrigin => write!(f, "map origin must have finite coordinates"),
        }
    }
}

impl std::error::Error for ConfigError {}
