// ABOUTME: Shared error types for the chop recommendation engine
// ABOUTME: Defines EngineError with structured context and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engine error types.
//!
//! The recommendation core is designed so that nothing in it is fatal:
//! missing profile attributes fall back to documented defaults, empty
//! candidate sets surface as empty result lists, and division guards
//! zero out score components. What remains as an actual error is the
//! corpus boundary (repository access) and malformed domain data.

/// Result alias used throughout the engine crates.
pub type AppResult<T> = Result<T, EngineError>;

/// Errors surfaced by the recommendation engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Corpus access failed at the repository boundary
    #[error("repository error: {message}")]
    Repository {
        /// Description of the underlying storage failure
        message: String,
    },

    /// A domain object failed validation before use
    #[error("invalid {entity}: {reason}")]
    InvalidData {
        /// Entity kind that failed validation (e.g. "recipe")
        entity: &'static str,
        /// Reason the entity was rejected
        reason: String,
    },

    /// Serialization failure while shaping engine output
    #[error("serialization failed for {context}")]
    Serialization {
        /// Context where serialization failed
        context: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl EngineError {
    /// Build a repository error from any displayable source.
    #[must_use]
    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository {
            message: message.into(),
        }
    }

    /// Build an invalid-data error for a named entity kind.
    #[must_use]
    pub fn invalid_data(entity: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidData {
            entity,
            reason: reason.into(),
        }
    }
}
