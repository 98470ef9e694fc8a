//! Field Triage Engine Library
//!
//! This library provides the core functionality of the triage tool.
//! It is used by both the main binary and integration tests.

/// Triage classifier module
pub mod classifier;

/// Symptom intake module
pub mod intake;

/// Patient vitals module
pub mod vitals;

/// Report rendering module
pub mod report;

/// Configuration management module
pub mod config;

/// Telemetry and Observability
pub mod telemetry;

/// CLI interface module
pub mod cli;

/// Command handlers module
pub mod handlers;
