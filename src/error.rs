//! Error types for scheme defanging and registry verification.
//!
//! This module provides structured error types using thiserror so that
//! callers (and the optional Python bindings) can tell input mistakes apart
//! from registry-wide rule-set defects.

use std::fmt;
use thiserror::Error;

use crate::verify::Violation;

/// Main error type for defang operations.
#[derive(Debug, Error)]
pub enum DefangError {
    /// Scheme too short to defang
    #[error("Invalid input: scheme \"{scheme}\" must be at least 2 characters long")]
    InvalidInput { scheme: String },

    /// Scheme name outside the URI scheme grammar
    #[error("Invalid scheme \"{scheme}\": {reason}")]
    InvalidScheme { scheme: String, reason: String },

    /// Unknown registry status label
    #[error("Invalid status: {0} (expected Permanent, Provisional or Historical)")]
    InvalidStatus(String),

    /// Same scheme supplied twice when building a registry
    #[error("Duplicate scheme in registry: {0}")]
    DuplicateScheme(String),

    /// Registry failed the collision/ambiguity checks
    #[error(transparent)]
    Verification(#[from] VerificationFailure),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DefangError {
    fn from(err: serde_json::Error) -> Self {
        DefangError::Serialization(err.to_string())
    }
}

/// Result type alias for defang operations
pub type Result<T> = std::result::Result<T, DefangError>;

/// Every fatal violation found in a single verification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationFailure {
    pub violations: Vec<Violation>,
}

impl VerificationFailure {
    pub fn collisions(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| matches!(v, Violation::RegistryCollision { .. }))
    }

    pub fn ambiguities(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| matches!(v, Violation::RegistryAmbiguity { .. }))
    }
}

impl fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registry verification failed with {} violation(s)",
            self.violations.len()
        )?;
        for v in &self.violations {
            write!(f, "\n  - {}", v)?;
        }
        Ok(())
    }
}

impl std::error::Error for VerificationFailure {}

/// Convert defang errors to PyO3 exceptions
#[cfg(feature = "python-ext")]
impl From<DefangError> for pyo3::PyErr {
    fn from(err: DefangError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyIOError, PyValueError};

        match err {
            DefangError::Io(e) => PyIOError::new_err(e.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}
