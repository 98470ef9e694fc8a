//! Triage report rendering
//!
//! Turns a classification (and any vitals) into what the responder reads:
//! the urgency line, the Do / Don't / Monitor lists verbatim, optional
//! vitals, the advice for when emergency services are unreachable and the
//! decision-support disclaimer.

use crate::config::ReportConfig;
use crate::vitals::VitalAssessment;
use sdk::types::TriageResult;
use serde::Serialize;

pub const NO_CONNECTIVITY_HEADING: &str = "If emergency services are unreachable:";
pub const NO_CONNECTIVITY_ADVICE: &str =
    "Continue first-response steps and prepare for transport to nearest PHC when possible.";
pub const DISCLAIMER: &str = "Decision support only. Not a medical diagnosis system.";

/// Everything produced by one assessment
#[derive(Debug, Clone, Serialize)]
pub struct TriageReport {
    pub result: TriageResult,
    pub vitals: Vec<VitalAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utterance: Option<String>,
}

impl TriageReport {
    pub fn new(result: TriageResult, vitals: Vec<VitalAssessment>, speak: bool) -> Self {
        let utterance = speak.then(|| result.utterance());
        Self {
            result,
            vitals,
            utterance,
        }
    }

    /// Render the report as plain text
    pub fn render_text(&self, options: &ReportConfig) -> String {
        let result = &self.result;
        let mut lines = vec![format!(
            "{} Urgency Level: {}",
            result.indicator, result.level
        )];

        push_section(&mut lines, "✔️ Do", &result.do_actions);
        push_section(&mut lines, "❌ Don't", &result.dont_actions);
        push_section(&mut lines, "⏱️ Monitor", &result.monitor);

        if !self.vitals.is_empty() {
            lines.push(String::new());
            lines.push("Vitals".to_string());
            lines.extend(self.vitals.iter().map(render_vital));
        }

        if options.show_banner {
            lines.push(String::new());
            lines.push(format!("🛑 {}", NO_CONNECTIVITY_HEADING));
            lines.push(NO_CONNECTIVITY_ADVICE.to_string());
        }

        if let Some(utterance) = &self.utterance {
            lines.push(String::new());
            lines.push(format!("🔊 {}", utterance));
        }

        if options.show_disclaimer {
            lines.push(String::new());
            lines.push(format!("⚠️ {}", DISCLAIMER));
        }

        lines.join("\n")
    }
}

fn push_section(lines: &mut Vec<String>, heading: &str, items: &[String]) {
    lines.push(String::new());
    lines.push(heading.to_string());
    lines.extend(items.iter().map(|item| format!("- {}", item)));
}

fn render_vital(assessment: &VitalAssessment) -> String {
    format!(
        "- {}: {} {} ({}, range {}-{} {})",
        assessment.vital,
        assessment.value,
        assessment.unit,
        assessment.band.as_str(),
        assessment.normal.low,
        assessment.normal.high,
        assessment.unit
    )
}
