//! Error types for the run card core

use thiserror::Error;

use crate::catalog::ResourceCategory;

/// Main error type for card layout and resolution operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// A run record failed its construction contract (empty required field,
    /// unrepresentable timestamp)
    #[error("Invalid run record: {0}")]
    InvalidRunRecord(String),

    /// A record referenced an identifier outside the closed registry set for
    /// its category. Raised at the lookup boundary, before any file path is
    /// composed from the name.
    #[error("Unknown {} entity: {name}", .category.label())]
    UnknownEntity {
        /// Category whose registry rejected the name
        category: ResourceCategory,
        /// The identifier as it appeared in the record
        name: String,
    },
}

impl CardError {
    pub(crate) fn unknown(category: ResourceCategory, name: &str) -> Self {
        Self::UnknownEntity {
            category,
            name: name.to_string(),
        }
    }
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
