//! Triage value types
//!
//! Every protocol and the fallback share one concrete result shape, so
//! callers never need to look fields up by name.

use serde::Serialize;
use std::fmt;

/// Urgency level assigned by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrgencyLevel {
    /// Life-threatening, act immediately
    Critical,
    /// Needs attention, not immediately life-threatening
    Moderate,
    /// General care
    Mild,
}

impl UrgencyLevel {
    /// Upper-case label used in reports and JSON
    pub fn as_str(self) -> &'static str {
        match self {
            UrgencyLevel::Critical => "CRITICAL",
            UrgencyLevel::Moderate => "MODERATE",
            UrgencyLevel::Mild => "MILD",
        }
    }

    /// Display glyph, one per level
    pub fn indicator(self) -> &'static str {
        match self {
            UrgencyLevel::Critical => "🔴",
            UrgencyLevel::Moderate => "🟡",
            UrgencyLevel::Mild => "🟢",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Static confidence attached to a result
///
/// This is not a computed probability. It only tells a keyword match apart
/// from the fallback. The wire form is the string `"0.90"` or `"0.75"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Confidence {
    #[serde(rename = "0.90")]
    Matched,
    #[serde(rename = "0.75")]
    Fallback,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::Matched => "0.90",
            Confidence::Fallback => "0.75",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Fixed guidance for one recognized condition keyword
///
/// Records are `'static` so a protocol table can live in a plain `static`
/// slice and be shared by any number of callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProtocolRecord {
    /// Lowercase substring matched against the symptom text
    pub keyword: &'static str,
    pub level: UrgencyLevel,
    /// Recommended actions, in display order
    #[serde(rename = "do")]
    pub do_actions: &'static [&'static str],
    /// Contraindicated actions, in display order
    #[serde(rename = "dont")]
    pub dont_actions: &'static [&'static str],
    /// Things to observe, in display order
    pub monitor: &'static [&'static str],
    pub confidence: Confidence,
}

impl ProtocolRecord {
    /// Create a record on the keyword-match path
    pub const fn new(
        keyword: &'static str,
        level: UrgencyLevel,
        do_actions: &'static [&'static str],
        dont_actions: &'static [&'static str],
        monitor: &'static [&'static str],
    ) -> Self {
        Self {
            keyword,
            level,
            do_actions,
            dont_actions,
            monitor,
            confidence: Confidence::Matched,
        }
    }

    pub fn indicator(&self) -> &'static str {
        self.level.indicator()
    }
}

/// Structured recommendation returned for every classification
///
/// A fresh value is built per call; the lists are owned copies of the
/// protocol wording, in the protocol's order. Results are output only;
/// `indicator` always follows `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageResult {
    pub level: UrgencyLevel,
    pub indicator: String,
    #[serde(rename = "do")]
    pub do_actions: Vec<String>,
    #[serde(rename = "dont")]
    pub dont_actions: Vec<String>,
    pub monitor: Vec<String>,
    pub confidence: Confidence,
    /// Keyword that selected this result, `None` for the fallback
    pub matched_keyword: Option<String>,
}

impl TriageResult {
    /// Build a result from borrowed guidance lists
    pub fn new(
        level: UrgencyLevel,
        do_actions: &[&str],
        dont_actions: &[&str],
        monitor: &[&str],
        confidence: Confidence,
        matched_keyword: Option<&str>,
    ) -> Self {
        Self {
            level,
            indicator: level.indicator().to_string(),
            do_actions: to_owned_list(do_actions),
            dont_actions: to_owned_list(dont_actions),
            monitor: to_owned_list(monitor),
            confidence,
            matched_keyword: matched_keyword.map(String::from),
        }
    }

    /// Build the result for a matched protocol record
    pub fn from_record(record: &ProtocolRecord) -> Self {
        Self::new(
            record.level,
            record.do_actions,
            record.dont_actions,
            record.monitor,
            record.confidence,
            Some(record.keyword),
        )
    }

    /// True when no protocol keyword matched
    pub fn is_fallback(&self) -> bool {
        self.matched_keyword.is_none()
    }

    /// Single utterance for audio readout
    ///
    /// ```
    /// use sdk::types::{Confidence, TriageResult, UrgencyLevel};
    ///
    /// let result = TriageResult::new(
    ///     UrgencyLevel::Mild,
    ///     &["Rest"],
    ///     &["Do not run"],
    ///     &["Breathing", "Pulse"],
    ///     Confidence::Fallback,
    ///     None,
    /// );
    /// assert_eq!(
    ///     result.utterance(),
    ///     "Urgency level MILD. Do: Rest. Do not: Do not run. Monitor: Breathing. Pulse."
    /// );
    /// ```
    pub fn utterance(&self) -> String {
        format!(
            "Urgency level {}. Do: {}. Do not: {}. Monitor: {}.",
            self.level,
            self.do_actions.join(". "),
            self.dont_actions.join(". "),
            self.monitor.join(". ")
        )
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    static SAMPLE: ProtocolRecord = ProtocolRecord::new(
        "burn",
        UrgencyLevel::Moderate,
        &["Cool the burn with running water"],
        &["Do not apply ice"],
        &["Blistering", "Pain"],
    );

    #[test]
    fn test_indicator_matches_level() {
        assert_eq!(UrgencyLevel::Critical.indicator(), "🔴");
        assert_eq!(UrgencyLevel::Moderate.indicator(), "🟡");
        assert_eq!(UrgencyLevel::Mild.indicator(), "🟢");
    }

    #[test]
    fn test_level_display() {
        assert_eq!(UrgencyLevel::Critical.to_string(), "CRITICAL");
        assert_eq!(UrgencyLevel::Moderate.to_string(), "MODERATE");
        assert_eq!(UrgencyLevel::Mild.to_string(), "MILD");
    }

    #[test]
    fn test_confidence_strings() {
        assert_eq!(Confidence::Matched.as_str(), "0.90");
        assert_eq!(Confidence::Fallback.as_str(), "0.75");
    }

    #[test]
    fn test_record_defaults_to_matched_confidence() {
        assert_eq!(SAMPLE.confidence, Confidence::Matched);
        assert_eq!(SAMPLE.indicator(), "🟡");
    }

    #[test]
    fn test_from_record_copies_lists_in_order() {
        let result = TriageResult::from_record(&SAMPLE);
        assert_eq!(result.level, UrgencyLevel::Moderate);
        assert_eq!(result.indicator, "🟡");
        assert_eq!(result.do_actions, vec!["Cool the burn with running water"]);
        assert_eq!(result.dont_actions, vec!["Do not apply ice"]);
        assert_eq!(result.monitor, vec!["Blistering", "Pain"]);
        assert_eq!(result.matched_keyword.as_deref(), Some("burn"));
        assert!(!result.is_fallback());
    }

    #[test]
    fn test_result_json_shape() {
        let result = TriageResult::from_record(&SAMPLE);
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["level"], "MODERATE");
        assert_eq!(value["indicator"], "🟡");
        assert_eq!(value["do"][0], "Cool the burn with running water");
        assert_eq!(value["dont"][0], "Do not apply ice");
        assert_eq!(value["monitor"][1], "Pain");
        assert_eq!(value["confidence"], "0.90");
        assert_eq!(value["matched_keyword"], "burn");
    }

    #[test]
    fn test_fallback_json_has_null_keyword() {
        let result = TriageResult::new(
            UrgencyLevel::Mild,
            &["Rest"],
            &["Do not wait"],
            &["Condition"],
            Confidence::Fallback,
            None,
        );
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["confidence"], "0.75");
        assert!(value["matched_keyword"].is_null());
        assert!(result.is_fallback());
    }

    #[test]
    fn test_indicator_follows_level() {
        for level in [UrgencyLevel::Critical, UrgencyLevel::Moderate, UrgencyLevel::Mild] {
            let result = TriageResult::new(level, &["a"], &["b"], &["c"], Confidence::Matched, None);
            assert_eq!(result.indicator, level.indicator());

            let value = serde_json::to_value(&result).unwrap();
            assert_eq!(value["level"], level.as_str());
            assert_eq!(value["indicator"], level.indicator());
        }
    }

    proptest! {
        #[test]
        fn test_utterance_reads_every_item(
            do_actions in prop::collection::vec("[A-Za-z ]{1,20}", 1..4),
            monitor in prop::collection::vec("[A-Za-z ]{1,20}", 1..4),
        ) {
            let do_refs: Vec<&str> = do_actions.iter().map(String::as_str).collect();
            let monitor_refs: Vec<&str> = monitor.iter().map(String::as_str).collect();
            let result = TriageResult::new(
                UrgencyLevel::Critical,
                &do_refs,
                &["Do not leave the patient alone"],
                &monitor_refs,
                Confidence::Matched,
                Some("test"),
            );
            let utterance = result.utterance();

            prop_assert!(utterance.starts_with("Urgency level CRITICAL. Do: "));
            for item in do_actions.iter().chain(monitor.iter()) {
                prop_assert!(utterance.contains(item.as_str()));
            }
        }
    }
}
