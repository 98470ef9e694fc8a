//! Patient vitals
//!
//! Optional temperature, pulse and SpO₂ readings are range-checked on entry
//! and banded against a normal range for display. Vitals never change the
//! triage level; they are shown next to the guidance.

use sdk::errors::TriageError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vital sign the responder can record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalSign {
    Temperature,
    Pulse,
    #[serde(rename = "spo2")]
    SpO2,
}

impl VitalSign {
    pub const ALL: [VitalSign; 3] = [VitalSign::Temperature, VitalSign::Pulse, VitalSign::SpO2];

    pub fn name(self) -> &'static str {
        match self {
            VitalSign::Temperature => "Temperature",
            VitalSign::Pulse => "Pulse",
            VitalSign::SpO2 => "SpO2",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            VitalSign::Temperature => "°C",
            VitalSign::Pulse => "bpm",
            VitalSign::SpO2 => "%",
        }
    }

    /// Values a reading may take at all (min, max), inclusive
    pub fn accepted_bounds(self) -> (f64, f64) {
        match self {
            VitalSign::Temperature => (34.0, 43.0),
            VitalSign::Pulse => (30.0, 200.0),
            VitalSign::SpO2 => (50.0, 100.0),
        }
    }

    /// Adult normal range
    pub fn default_range(self) -> NormalRange {
        match self {
            VitalSign::Temperature => NormalRange::new(36.5, 37.5),
            VitalSign::Pulse => NormalRange::new(60.0, 100.0),
            VitalSign::SpO2 => NormalRange::new(95.0, 100.0),
        }
    }
}

impl fmt::Display for VitalSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a reading falls relative to its normal range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VitalBand {
    Low,
    Normal,
    High,
}

impl VitalBand {
    pub fn as_str(self) -> &'static str {
        match self {
            VitalBand::Low => "LOW",
            VitalBand::Normal => "NORMAL",
            VitalBand::High => "HIGH",
        }
    }
}

/// Inclusive normal range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalRange {
    pub low: f64,
    pub high: f64,
}

impl NormalRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Band a value; both ends of the range count as normal
    pub fn band(&self, value: f64) -> VitalBand {
        if value < self.low {
            VitalBand::Low
        } else if value > self.high {
            VitalBand::High
        } else {
            VitalBand::Normal
        }
    }
}

/// Normal ranges for every vital sign
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalRanges {
    #[serde(default = "default_temperature")]
    pub temperature: NormalRange,
    #[serde(default = "default_pulse")]
    pub pulse: NormalRange,
    #[serde(default = "default_spo2")]
    pub spo2: NormalRange,
}

fn default_temperature() -> NormalRange {
    VitalSign::Temperature.default_range()
}

fn default_pulse() -> NormalRange {
    VitalSign::Pulse.default_range()
}

fn default_spo2() -> NormalRange {
    VitalSign::SpO2.default_range()
}

impl Default for VitalRanges {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            pulse: default_pulse(),
            spo2: default_spo2(),
        }
    }
}

impl VitalRanges {
    pub fn range_for(&self, sign: VitalSign) -> NormalRange {
        match sign {
            VitalSign::Temperature => self.temperature,
            VitalSign::Pulse => self.pulse,
            VitalSign::SpO2 => self.spo2,
        }
    }

    /// Check that every range is ordered and inside the accepted bounds
    ///
    /// # Errors
    ///
    /// Returns `TriageError::Config` naming the first offending vital.
    pub fn validate(&self) -> Result<(), TriageError> {
        for sign in VitalSign::ALL {
            let range = self.range_for(sign);
            let (min, max) = sign.accepted_bounds();

            if range.low.is_nan() || range.high.is_nan() || range.low > range.high {
                return Err(TriageError::Config(format!(
                    "{} normal range is inverted: low {} > high {}",
                    sign, range.low, range.high
                )));
            }
            if range.low < min || range.high > max {
                return Err(TriageError::Config(format!(
                    "{} normal range {}-{} must lie within {}-{}",
                    sign, range.low, range.high, min, max
                )));
            }
        }
        Ok(())
    }
}

/// A single validated reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalReading {
    pub sign: VitalSign,
    pub value: f64,
}

impl VitalReading {
    /// Create a reading
    ///
    /// # Errors
    ///
    /// Returns `TriageError::VitalOutOfRange` when the value is outside the
    /// sign's accepted bounds (this includes NaN).
    pub fn new(sign: VitalSign, value: f64) -> Result<Self, TriageError> {
        let (min, max) = sign.accepted_bounds();
        if !(min..=max).contains(&value) {
            return Err(TriageError::VitalOutOfRange {
                vital: sign.name().to_string(),
                value,
                min,
                max,
            });
        }
        Ok(Self { sign, value })
    }
}

/// A reading banded against its normal range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VitalAssessment {
    pub vital: VitalSign,
    pub value: f64,
    pub unit: &'static str,
    pub band: VitalBand,
    pub normal: NormalRange,
}

/// Readings recorded for one patient
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VitalsPanel {
    readings: Vec<VitalReading>,
}

impl VitalsPanel {
    /// Build a panel from optional readings, in temperature, pulse, SpO2 order
    ///
    /// # Errors
    ///
    /// Returns the first `TriageError::VitalOutOfRange` encountered.
    pub fn from_readings(
        temperature: Option<f64>,
        pulse: Option<f64>,
        spo2: Option<f64>,
    ) -> Result<Self, TriageError> {
        let readings = [
            (VitalSign::Temperature, temperature),
            (VitalSign::Pulse, pulse),
            (VitalSign::SpO2, spo2),
        ]
        .into_iter()
        .filter_map(|(sign, value)| value.map(|v| VitalReading::new(sign, v)))
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { readings })
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn readings(&self) -> &[VitalReading] {
        &self.readings
    }

    /// Band every reading against `ranges`
    pub fn assess(&self, ranges: &VitalRanges) -> Vec<VitalAssessment> {
        self.readings
            .iter()
            .map(|reading| {
                let normal = ranges.range_for(reading.sign);
                let band = normal.band(reading.value);
                if band != VitalBand::Normal {
                    tracing::debug!(vital = %reading.sign, value = reading.value, band = band.as_str(), "Vital outside normal range");
                }
                VitalAssessment {
                    vital: reading.sign,
                    value: reading.value,
                    unit: reading.sign.unit(),
                    band,
                    normal,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_normal() {
        let range = NormalRange::new(36.5, 37.5);
        assert_eq!(range.band(36.5), VitalBand::Normal);
        assert_eq!(range.band(37.5), VitalBand::Normal);
        assert_eq!(range.band(36.4), VitalBand::Low);
        assert_eq!(range.band(37.6), VitalBand::High);
    }

    #[test]
    fn test_default_ranges() {
        let ranges = VitalRanges::default();
        assert_eq!(ranges.temperature, NormalRange::new(36.5, 37.5));
        assert_eq!(ranges.pulse, NormalRange::new(60.0, 100.0));
        assert_eq!(ranges.spo2, NormalRange::new(95.0, 100.0));
        assert!(ranges.validate().is_ok());
    }

    #[test]
    fn test_reading_accepts_bounds() {
        assert!(VitalReading::new(VitalSign::Temperature, 34.0).is_ok());
        assert!(VitalReading::new(VitalSign::Temperature, 43.0).is_ok());
        assert!(VitalReading::new(VitalSign::Pulse, 30.0).is_ok());
        assert!(VitalReading::new(VitalSign::SpO2, 100.0).is_ok());
    }

    #[test]
    fn test_reading_rejects_out_of_bounds() {
        let err = VitalReading::new(VitalSign::Pulse, 250.0).unwrap_err();
        match err {
            TriageError::VitalOutOfRange {
                vital,
                value,
                min,
                max,
            } => {
                assert_eq!(vital, "Pulse");
                assert_eq!(value, 250.0);
                assert_eq!(min, 30.0);
                assert_eq!(max, 200.0);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_reading_rejects_nan() {
        assert!(VitalReading::new(VitalSign::SpO2, f64::NAN).is_err());
    }

    #[test]
    fn test_panel_keeps_order_and_skips_missing() {
        let panel = VitalsPanel::from_readings(Some(38.2), None, Some(91.0)).unwrap();
        let signs: Vec<VitalSign> = panel.readings().iter().map(|r| r.sign).collect();
        assert_eq!(signs, vec![VitalSign::Temperature, VitalSign::SpO2]);
    }

    #[test]
    fn test_panel_empty() {
        let panel = VitalsPanel::from_readings(None, None, None).unwrap();
        assert!(panel.is_empty());
        assert!(panel.assess(&VitalRanges::default()).is_empty());
    }

    #[test]
    fn test_panel_assess() {
        let panel = VitalsPanel::from_readings(Some(38.2), Some(80.0), Some(91.0)).unwrap();
        let bands: Vec<VitalBand> = panel
            .assess(&VitalRanges::default())
            .iter()
            .map(|a| a.band)
            .collect();
        assert_eq!(
            bands,
            vec![VitalBand::High, VitalBand::Normal, VitalBand::Low]
        );
    }

    #[test]
    fn test_panel_rejects_bad_reading() {
        let result = VitalsPanel::from_readings(Some(37.0), Some(10.0), None);
        assert!(matches!(
            result,
            Err(TriageError::VitalOutOfRange { ref vital, .. }) if vital == "Pulse"
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let ranges = VitalRanges {
            pulse: NormalRange::new(100.0, 60.0),
            ..VitalRanges::default()
        };
        assert!(matches!(ranges.validate(), Err(TriageError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_range_outside_bounds() {
        let ranges = VitalRanges {
            spo2: NormalRange::new(95.0, 101.0),
            ..VitalRanges::default()
        };
        assert!(matches!(ranges.validate(), Err(TriageError::Config(_))));
    }

    #[test]
    fn test_assessment_json() {
        let panel = VitalsPanel::from_readings(None, None, Some(91.0)).unwrap();
        let value = serde_json::to_value(panel.assess(&VitalRanges::default())).unwrap();
        assert_eq!(value[0]["vital"], "spo2");
        assert_eq!(value[0]["band"], "LOW");
        assert_eq!(value[0]["unit"], "%");
        assert_eq!(value[0]["normal"]["low"], 95.0);
    }
}
