//! Symptom intake
//!
//! Responders either tap quick-select symptom chips, type free notes, or
//! both. Intake merges them into the single string the classifier reads.
//! Chip labels are passed through verbatim, so a chip only triggers a
//! protocol when its label contains that protocol's keyword ("Severe
//! bleeding" does, "Vomiting" does not).

use sdk::errors::TriageError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Quick-select symptom chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymptomChip {
    Fever,
    ChestPain,
    DifficultyBreathing,
    SevereBleeding,
    Unconscious,
    Vomiting,
    AbdominalPain,
    Dizziness,
    InjuryTrauma,
}

impl SymptomChip {
    /// All chips in display order
    pub const ALL: [SymptomChip; 9] = [
        SymptomChip::Fever,
        SymptomChip::ChestPain,
        SymptomChip::DifficultyBreathing,
        SymptomChip::SevereBleeding,
        SymptomChip::Unconscious,
        SymptomChip::Vomiting,
        SymptomChip::AbdominalPain,
        SymptomChip::Dizziness,
        SymptomChip::InjuryTrauma,
    ];

    /// Label shown on the chip and fed to the classifier
    pub fn label(self) -> &'static str {
        match self {
            SymptomChip::Fever => "Fever",
            SymptomChip::ChestPain => "Chest pain",
            SymptomChip::DifficultyBreathing => "Difficulty breathing",
            SymptomChip::SevereBleeding => "Severe bleeding",
            SymptomChip::Unconscious => "Unconscious",
            SymptomChip::Vomiting => "Vomiting",
            SymptomChip::AbdominalPain => "Abdominal pain",
            SymptomChip::Dizziness => "Dizziness",
            SymptomChip::InjuryTrauma => "Injury / trauma",
        }
    }

    /// Command-line form of the chip
    pub fn slug(self) -> &'static str {
        match self {
            SymptomChip::Fever => "fever",
            SymptomChip::ChestPain => "chest-pain",
            SymptomChip::DifficultyBreathing => "difficulty-breathing",
            SymptomChip::SevereBleeding => "severe-bleeding",
            SymptomChip::Unconscious => "unconscious",
            SymptomChip::Vomiting => "vomiting",
            SymptomChip::AbdominalPain => "abdominal-pain",
            SymptomChip::Dizziness => "dizziness",
            SymptomChip::InjuryTrauma => "injury-trauma",
        }
    }
}

impl fmt::Display for SymptomChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SymptomChip {
    type Err = TriageError;

    /// Accepts the slug or the label, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SymptomChip::ALL
            .into_iter()
            .find(|chip| chip.slug() == wanted || chip.label().to_lowercase() == wanted)
            .ok_or_else(|| TriageError::UnknownSymptomChip(s.to_string()))
    }
}

/// Symptoms gathered for one assessment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomIntake {
    pub chips: Vec<SymptomChip>,
    pub notes: Option<String>,
}

impl SymptomIntake {
    pub fn new(chips: Vec<SymptomChip>, notes: Option<String>) -> Self {
        Self { chips, notes }
    }

    /// Parse chip arguments and attach free notes
    ///
    /// # Errors
    ///
    /// Returns `TriageError::UnknownSymptomChip` for the first chip that
    /// is not recognized.
    pub fn from_args(chips: &[String], notes: Option<String>) -> Result<Self, TriageError> {
        let chips = chips
            .iter()
            .map(|c| c.parse::<SymptomChip>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(chips, notes))
    }

    /// Merged symptom text handed to the classifier
    ///
    /// Chip labels are joined with `", "` and followed by the notes. Returns
    /// `None` only when nothing at all was collected.
    ///
    /// ```
    /// use triage_engine::intake::{SymptomChip, SymptomIntake};
    ///
    /// let intake = SymptomIntake::new(
    ///     vec![SymptomChip::Fever, SymptomChip::Vomiting],
    ///     Some("since this morning".to_string()),
    /// );
    /// assert_eq!(
    ///     intake.symptom_text().as_deref(),
    ///     Some("Fever, Vomiting, since this morning")
    /// );
    /// ```
    pub fn symptom_text(&self) -> Option<String> {
        let mut parts: Vec<&str> = self.chips.iter().map(|c| c.label()).collect();
        if let Some(notes) = self.notes.as_deref().filter(|n| !n.is_empty()) {
            parts.push(notes);
        }

        if parts.is_empty() {
            // Empty notes still count as collected
            return self.notes.clone();
        }
        Some(parts.join(", "))
    }

    /// True when there is nothing worth classifying
    pub fn is_blank(&self) -> bool {
        self.symptom_text()
            .map(|text| text.trim().is_empty())
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_order_and_labels() {
        let labels: Vec<&str> = SymptomChip::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Fever",
                "Chest pain",
                "Difficulty breathing",
                "Severe bleeding",
                "Unconscious",
                "Vomiting",
                "Abdominal pain",
                "Dizziness",
                "Injury / trauma",
            ]
        );
    }

    #[test]
    fn test_parse_slug_and_label() {
        assert_eq!(
            "severe-bleeding".parse::<SymptomChip>().unwrap(),
            SymptomChip::SevereBleeding
        );
        assert_eq!(
            "Injury / trauma".parse::<SymptomChip>().unwrap(),
            SymptomChip::InjuryTrauma
        );
        assert_eq!(
            "CHEST PAIN".parse::<SymptomChip>().unwrap(),
            SymptomChip::ChestPain
        );
    }

    #[test]
    fn test_parse_unknown_chip() {
        let err = "sneezing".parse::<SymptomChip>().unwrap_err();
        assert!(matches!(err, TriageError::UnknownSymptomChip(ref s) if s == "sneezing"));
    }

    #[test]
    fn test_chip_json_uses_slug() {
        for chip in SymptomChip::ALL {
            let value = serde_json::to_value(chip).unwrap();
            assert_eq!(value, chip.slug());
        }
    }

    #[test]
    fn test_slug_round_trips_through_parse() {
        for chip in SymptomChip::ALL {
            assert_eq!(chip.slug().parse::<SymptomChip>().unwrap(), chip);
        }
    }

    #[test]
    fn test_symptom_text_chips_only() {
        let intake = SymptomIntake::new(vec![SymptomChip::Fever, SymptomChip::ChestPain], None);
        assert_eq!(intake.symptom_text().as_deref(), Some("Fever, Chest pain"));
    }

    #[test]
    fn test_symptom_text_notes_only() {
        let intake = SymptomIntake::new(vec![], Some("  Bleeding from scalp".to_string()));
        // Notes are passed through unmodified
        assert_eq!(
            intake.symptom_text().as_deref(),
            Some("  Bleeding from scalp")
        );
    }

    #[test]
    fn test_symptom_text_nothing_collected() {
        let intake = SymptomIntake::default();
        assert_eq!(intake.symptom_text(), None);
        assert!(intake.is_blank());
    }

    #[test]
    fn test_empty_notes_are_collected_but_blank() {
        let intake = SymptomIntake::new(vec![], Some(String::new()));
        assert_eq!(intake.symptom_text().as_deref(), Some(""));
        assert!(intake.is_blank());

        let intake = SymptomIntake::new(vec![], Some("   ".to_string()));
        assert!(intake.is_blank());
    }

    #[test]
    fn test_empty_notes_with_chips() {
        let intake = SymptomIntake::new(vec![SymptomChip::Dizziness], Some(String::new()));
        assert_eq!(intake.symptom_text().as_deref(), Some("Dizziness"));
        assert!(!intake.is_blank());
    }

    #[test]
    fn test_from_args() {
        let intake = SymptomIntake::from_args(
            &["fever".to_string(), "vomiting".to_string()],
            Some("child, 4 years".to_string()),
        )
        .unwrap();
        assert_eq!(
            intake.chips,
            vec![SymptomChip::Fever, SymptomChip::Vomiting]
        );
        assert_eq!(
            intake.symptom_text().as_deref(),
            Some("Fever, Vomiting, child, 4 years")
        );
    }

    #[test]
    fn test_from_args_rejects_unknown() {
        let result = SymptomIntake::from_args(&["rash".to_string()], None);
        assert!(matches!(result, Err(TriageError::UnknownSymptomChip(_))));
    }
}
