//! Error types and handling
//!
//! This module provides the error types used throughout the triage workspace.
//! All errors implement the `TriageErrorExt` trait which provides short,
//! responder-friendly hints.
//!
//! The classifier itself is total over text input and never produces an
//! error for a string. Errors only arise at the boundaries: absent input,
//! unknown symptom chips, out-of-range vitals and configuration.

use thiserror::Error;

/// Trait for triage error extensions
///
/// Provides a hint that is safe to show to a responder in the field.
pub trait TriageErrorExt {
    /// Returns a user-friendly hint for the error
    fn user_hint(&self) -> &str;
}

/// Main triage error type
///
/// # Examples
///
/// ```
/// use sdk::errors::{TriageError, TriageErrorExt};
///
/// let error = TriageError::UnknownSymptomChip("sneezing".to_string());
/// assert_eq!(
///     error.user_hint(),
///     "Run 'fieldtriage chips' to see the available chips"
/// );
/// ```
#[derive(Debug, Error)]
pub enum TriageError {
    // Classifier boundary errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No symptoms provided")]
    NoSymptoms,

    // Intake errors
    #[error("Unknown symptom chip: {0}")]
    UnknownSymptomChip(String),

    #[error("{vital} reading {value} is outside the accepted range {min}-{max}")]
    VitalOutOfRange {
        vital: String,
        value: f64,
        min: f64,
        max: f64,
    },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TriageErrorExt for TriageError {
    fn user_hint(&self) -> &str {
        match self {
            Self::InvalidInput(_) => "Symptom text was not collected. Enter symptoms and try again",
            Self::NoSymptoms => "Describe the symptoms or select at least one symptom chip",
            Self::UnknownSymptomChip(_) => "Run 'fieldtriage chips' to see the available chips",
            Self::VitalOutOfRange { .. } => "Re-check the reading and the unit it was taken in",
            Self::Config(_) => "Check your config.toml file for errors",
            Self::Io(_) => "File system operation failed",
        }
    }
}
