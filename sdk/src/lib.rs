//! Field Triage SDK
//!
//! Shared value types and errors for the triage engine and anything that
//! consumes its results.

/// Error types and handling
pub mod errors;

/// Triage value types
pub mod types;

// Re-export commonly used types
pub use errors::{TriageError, TriageErrorExt};
pub use types::{Confidence, ProtocolRecord, TriageResult, UrgencyLevel};
