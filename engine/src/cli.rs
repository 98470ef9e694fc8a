//! CLI interface for Field Triage
//!
//! This module provides the command-line interface using clap's derive API.
//! It defines all commands and global flags.

use crate::config::VALID_LOG_LEVELS;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Offline Emergency Triage
///
/// Maps symptom descriptions to an urgency level with first-response
/// guidance. Decision support only, not a medical diagnosis system.
#[derive(Parser, Debug)]
#[command(name = "fieldtriage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        value_parser = PossibleValuesParser::new(VALID_LOG_LEVELS)
    )]
    pub log: Option<String>,

    /// Specify alternate configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assess symptoms and show first-response guidance
    Assess {
        /// Free-text symptom notes
        symptoms: Option<String>,

        /// Quick-select symptom (repeatable), e.g. --chip severe-bleeding
        #[arg(long = "chip", value_name = "CHIP")]
        chips: Vec<String>,

        /// Temperature in °C
        #[arg(long, value_name = "CELSIUS")]
        temp: Option<f64>,

        /// Pulse in beats per minute
        #[arg(long, value_name = "BPM")]
        pulse: Option<f64>,

        /// Oxygen saturation in percent
        #[arg(long, value_name = "PERCENT")]
        spo2: Option<f64>,

        /// Append a single sentence suitable for reading aloud
        #[arg(long)]
        speak: bool,
    },

    /// List the built-in protocols in match order
    Protocols,

    /// List the quick-select symptom chips
    Chips,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}
