// Field Triage
// Main entry point for the fieldtriage binary

use clap::Parser;
use sdk::errors::{TriageError, TriageErrorExt};
use triage_engine::cli::{Cli, Command, ConfigAction};
use triage_engine::config::Config;
use triage_engine::handlers::{
    handle_assess, handle_chips, handle_config_show, handle_config_validate, handle_protocols,
    AssessRequest, OutputFormat,
};
use triage_engine::telemetry::init_telemetry;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if let Some(triage_error) = e.downcast_ref::<TriageError>() {
            eprintln!("Hint: {}", triage_error.user_hint());
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Load configuration (or use custom path if provided)
    let config = match &cli.config {
        Some(config_path) => Config::load_from_path(config_path)?,
        None => Config::load_or_default()?,
    };

    // --log wins over the config file; RUST_LOG wins over both
    let log_level = cli.log.as_deref().unwrap_or(&config.core.log_level);
    init_telemetry(log_level);

    tracing::info!(
        "Field Triage v{} ({} - {})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_COMMIT_HASH"),
        env!("BUILD_TIMESTAMP")
    );

    // Determine output format
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match cli.command {
        Command::Assess {
            symptoms,
            chips,
            temp,
            pulse,
            spo2,
            speak,
        } => {
            tracing::info!("Assessing symptoms ({} chip(s))", chips.len());
            let request = AssessRequest {
                symptoms,
                chips,
                temperature: temp,
                pulse,
                spo2,
                speak,
            };
            handle_assess(request, &config, format)
        }

        Command::Protocols => handle_protocols(format),

        Command::Chips => handle_chips(format),

        Command::Config { action } => {
            tracing::info!("Config management: {:?}", action);
            match action {
                ConfigAction::Show => handle_config_show(&config, format),
                ConfigAction::Validate => {
                    let source = match &cli.config {
                        Some(path) => Some(path.clone()),
                        None => Config::default_config_path().filter(|p| p.exists()),
                    };
                    handle_config_validate(source.as_deref(), format)
                }
            }
        }
    }
}
