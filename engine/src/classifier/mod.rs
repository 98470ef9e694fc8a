//! Triage classifier
//!
//! Maps free-text symptom descriptions to a fixed urgency level and
//! first-response guidance using a small, ordered protocol table:
//!
//! | Order | Keyword                | Level    |
//! |-------|------------------------|----------|
//! | 1     | `bleeding`             | CRITICAL |
//! | 2     | `chest pain`           | CRITICAL |
//! | 3     | `difficulty breathing` | CRITICAL |
//! | 4     | `fever`                | MODERATE |
//! | 5     | `unconscious`          | CRITICAL |
//!
//! # Matching
//!
//! - The input is lower-cased, nothing else (no trimming, no tokenizing)
//! - The first keyword in table order that occurs as a substring wins
//! - Text matching no keyword gets the MILD fallback guidance
//!
//! Matching is plain substring containment. "feverish" and "no fever" both
//! match `fever`; word boundaries and negation are not considered.

use sdk::errors::TriageError;
use sdk::types::{Confidence, ProtocolRecord, TriageResult, UrgencyLevel};

/// Protocol table in canonical match order
pub static PROTOCOLS: &[ProtocolRecord] = &[
    ProtocolRecord::new(
        "bleeding",
        UrgencyLevel::Critical,
        &[
            "Apply firm pressure to stop bleeding",
            "Keep the injured area elevated",
            "Use clean cloth or bandage if available",
        ],
        &[
            "Do not remove deeply embedded objects",
            "Do not stop pressure too early",
        ],
        &["Amount of bleeding", "Signs of shock (pale skin, dizziness)"],
    ),
    ProtocolRecord::new(
        "chest pain",
        UrgencyLevel::Critical,
        &[
            "Make the patient sit or lie down comfortably",
            "Keep the patient calm and still",
            "Loosen tight clothing",
        ],
        &[
            "Do not allow physical exertion",
            "Do not give food or drink",
        ],
        &["Pain intensity", "Breathing and consciousness"],
    ),
    ProtocolRecord::new(
        "difficulty breathing",
        UrgencyLevel::Critical,
        &[
            "Sit the patient upright",
            "Loosen tight clothing",
            "Ensure fresh air circulation",
        ],
        &["Do not lay the patient flat", "Do not give sedatives"],
        &["Breathing rate", "Lip or nail discoloration"],
    ),
    ProtocolRecord::new(
        "fever",
        UrgencyLevel::Moderate,
        &[
            "Encourage oral fluids",
            "Keep patient in a cool environment",
            "Give paracetamol if available and advised",
        ],
        &[
            "Do not give antibiotics without prescription",
            "Do not overdress the patient",
        ],
        &["Temperature", "Signs of dehydration"],
    ),
    ProtocolRecord::new(
        "unconscious",
        UrgencyLevel::Critical,
        &[
            "Place patient in recovery position",
            "Check airway and breathing",
            "Remove nearby hazards",
        ],
        &["Do not give food or water", "Do not shake the patient"],
        &["Breathing", "Response to stimuli"],
    ),
];

const FALLBACK_DO: &[&str] = &["Provide basic care and rest", "Encourage fluids"];
const FALLBACK_DONT: &[&str] = &["Do not ignore worsening symptoms"];
const FALLBACK_MONITOR: &[&str] = &["General condition", "Symptom progression"];

/// Triage classifier over a fixed protocol table
///
/// # Examples
///
/// ```
/// use triage_engine::classifier::TriageClassifier;
/// use sdk::types::{Confidence, UrgencyLevel};
///
/// let classifier = TriageClassifier::new();
///
/// let result = classifier.classify("Severe BLEEDING from the leg");
/// assert_eq!(result.level, UrgencyLevel::Critical);
/// assert_eq!(result.confidence, Confidence::Matched);
///
/// // Both keywords present: table order decides
/// let result = classifier.classify("fever and chest pain");
/// assert_eq!(result.matched_keyword.as_deref(), Some("chest pain"));
///
/// // Nothing recognized
/// let result = classifier.classify("sore ankle");
/// assert_eq!(result.level, UrgencyLevel::Mild);
/// assert_eq!(result.confidence, Confidence::Fallback);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TriageClassifier {
    protocols: &'static [ProtocolRecord],
}

impl TriageClassifier {
    /// Create a classifier over the built-in protocol table
    pub fn new() -> Self {
        Self {
            protocols: PROTOCOLS,
        }
    }

    /// Protocol records in match order
    pub fn protocols(&self) -> &'static [ProtocolRecord] {
        self.protocols
    }

    /// Classify a symptom description
    ///
    /// Total over all strings: unrecognized text, including the empty
    /// string, yields the fallback result.
    pub fn classify(&self, symptoms_text: &str) -> TriageResult {
        let text = symptoms_text.to_lowercase();

        match self.find_protocol(&text) {
            Some(record) => {
                tracing::debug!(keyword = record.keyword, urgency = %record.level, "Protocol matched");
                TriageResult::from_record(record)
            }
            None => {
                tracing::debug!("No protocol matched, using fallback guidance");
                fallback_result()
            }
        }
    }

    /// Classify input that may not have been collected
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` when `symptoms_text` is `None`, so
    /// that a caller that forgot to gather input is not mistaken for
    /// unrecognized symptoms.
    pub fn classify_input(&self, symptoms_text: Option<&str>) -> Result<TriageResult, TriageError> {
        match symptoms_text {
            Some(text) => Ok(self.classify(text)),
            None => Err(TriageError::InvalidInput(
                "symptom text is absent".to_string(),
            )),
        }
    }

    /// First record in table order whose keyword occurs in `lowered`
    fn find_protocol(&self, lowered: &str) -> Option<&'static ProtocolRecord> {
        self.protocols
            .iter()
            .find(|record| lowered.contains(record.keyword))
    }
}

impl Default for TriageClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Guidance returned when no keyword matches
pub fn fallback_result() -> TriageResult {
    TriageResult::new(
        UrgencyLevel::Mild,
        FALLBACK_DO,
        FALLBACK_DONT,
        FALLBACK_MONITOR,
        Confidence::Fallback,
        None,
    )
}

/// Classify with the built-in protocol table
pub fn classify(symptoms_text: &str) -> TriageResult {
    TriageClassifier::new().classify(symptoms_text)
}

/// Classify possibly-absent input with the built-in protocol table
pub fn classify_input(symptoms_text: Option<&str>) -> Result<TriageResult, TriageError> {
    TriageClassifier::new().classify_input(symptoms_text)
}
