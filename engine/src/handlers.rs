//! Command handlers for CLI operations
//!
//! This module implements the handlers for all CLI commands:
//! - assess: Classify symptoms and print the triage report
//! - protocols: List the protocol table
//! - chips: List the quick-select symptom chips
//! - config show / validate: Inspect configuration

use anyhow::Result;
use serde_json::json;
use std::path::Path;

use crate::classifier::TriageClassifier;
use crate::config::Config;
use crate::intake::{SymptomChip, SymptomIntake};
use crate::report::TriageReport;
use crate::vitals::VitalsPanel;
use sdk::errors::TriageError;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for machine consumption
    Json,
}

/// Input collected for one assessment
#[derive(Debug, Clone, Default)]
pub struct AssessRequest {
    pub symptoms: Option<String>,
    pub chips: Vec<String>,
    pub temperature: Option<f64>,
    pub pulse: Option<f64>,
    pub spo2: Option<f64>,
    pub speak: bool,
}

/// Run one assessment without printing anything
///
/// Refuses to classify blank input; the classifier itself would return the
/// fallback guidance for it, which would hide a missed intake step.
///
/// # Errors
///
/// - `TriageError::UnknownSymptomChip` for an unrecognized chip
/// - `TriageError::NoSymptoms` when chips and notes are both blank
/// - `TriageError::VitalOutOfRange` for an impossible reading
pub fn build_report(request: AssessRequest, config: &Config) -> Result<TriageReport, TriageError> {
    let intake = SymptomIntake::from_args(&request.chips, request.symptoms)?;
    if intake.is_blank() {
        return Err(TriageError::NoSymptoms);
    }

    let panel = VitalsPanel::from_readings(request.temperature, request.pulse, request.spo2)?;

    let text = intake.symptom_text();
    let result = TriageClassifier::new().classify_input(text.as_deref())?;
    tracing::info!(
        urgency = %result.level,
        confidence = %result.confidence,
        keyword = result.matched_keyword.as_deref().unwrap_or("-"),
        "Triage complete"
    );

    let vitals = panel.assess(&config.vitals);
    Ok(TriageReport::new(
        result,
        vitals,
        request.speak || config.report.speak,
    ))
}

/// Assess symptoms and print the report
pub fn handle_assess(request: AssessRequest, config: &Config, format: OutputFormat) -> Result<()> {
    let report = build_report(request, config)?;

    match format {
        OutputFormat::Text => println!("{}", report.render_text(&config.report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// List protocols in match order
pub fn handle_protocols(format: OutputFormat) -> Result<()> {
    let protocols = TriageClassifier::new().protocols();

    match format {
        OutputFormat::Text => {
            println!("Protocols (first match wins):");
            for (i, record) in protocols.iter().enumerate() {
                println!(
                    "  {}. {} {:<8} {}",
                    i + 1,
                    record.indicator(),
                    record.level,
                    record.keyword
                );
            }
            println!();
            println!("Anything else: 🟢 MILD general care");
        }
        OutputFormat::Json => {
            let output = json!({
                "protocols": protocols,
                "count": protocols.len()
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// List quick-select symptom chips
pub fn handle_chips(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Symptom chips (use with --chip):");
            for chip in SymptomChip::ALL {
                println!("  {:<22} {}", chip.slug(), chip.label());
            }
        }
        OutputFormat::Json => {
            let chips: Vec<_> = SymptomChip::ALL
                .iter()
                .map(|chip| json!({ "chip": chip, "label": chip.label() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&json!({ "chips": chips }))?);
        }
    }

    Ok(())
}

/// Print the effective configuration
pub fn handle_config_show(config: &Config, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", config.to_toml()?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
    }
    Ok(())
}

/// Report which configuration was validated
///
/// Loading already validated the file; reaching this handler means it is valid.
pub fn handle_config_validate(source: Option<&Path>, format: OutputFormat) -> Result<()> {
    let source = source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());

    match format {
        OutputFormat::Text => println!("Configuration valid ({})", source),
        OutputFormat::Json => {
            let output = json!({ "valid": true, "source": source });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
