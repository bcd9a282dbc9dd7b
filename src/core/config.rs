//! Confidence constants for the cross-script converter

use serde::{Deserialize, Serialize};

/// Confidence assigned by each conversion strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Source and target are the same script
    pub same_script: f64,

    /// Romanized input into Devanagari
    pub romanized_devanagari: f64,

    /// Romanized input into another script, at least one whole-word hit
    pub romanized_vocabulary: f64,

    /// Romanized input into another script, character fallback only
    pub romanized_characters: f64,

    /// Direct table, at least one character mapped
    pub direct_mapped: f64,

    /// Direct table, nothing mapped (text passed through)
    pub direct_unmapped: f64,

    /// Reverse -> forward through the romanized intermediate
    pub pipeline: f64,

    /// Phonetic fallback range, scaled by the share of mapped output
    pub phonetic_floor: f64,
    pub phonetic_ceiling: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            same_script: 0.95,
            romanized_devanagari: 0.85,
            romanized_vocabulary: 0.85,
            romanized_characters: 0.70,
            direct_mapped: 0.90,
            direct_unmapped: 0.80,
            pipeline: 0.70,
            phonetic_floor: 0.10,
            phonetic_ceiling: 0.60,
        }
    }
}

impl ConfidenceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_same_script(mut self, value: f64) -> Self {
        self.same_script = value;
        self
    }

    pub fn with_pipeline(mut self, value: f64) -> Self {
        self.pipeline = value;
        self
    }

    pub fn with_direct(mut self, mapped: f64, unmapped: f64) -> Self {
        self.direct_mapped = mapped;
        self.direct_unmapped = unmapped;
        self
    }

    pub fn with_phonetic_range(mut self, floor: f64, ceiling: f64) -> Self {
        self.phonetic_floor = floor;
        self.phonetic_ceiling = ceiling;
        self
    }

    /// Clamp every value into [0, 1] and keep floor <= ceiling
    pub fn sanitized(mut self) -> Self {
        for value in [
            &mut self.same_script,
            &mut self.romanized_devanagari,
            &mut self.romanized_vocabulary,
            &mut self.romanized_characters,
            &mut self.direct_mapped,
            &mut self.direct_unmapped,
            &mut self.pipeline,
            &mut self.phonetic_floor,
            &mut self.phonetic_ceiling,
        ] {
            let v = *value;
            *value = if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        }
        if self.phonetic_floor > self.phonetic_ceiling {
            std::mem::swap(&mut self.phonetic_floor, &mut self.phonetic_ceiling);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfidenceConfig::default();
        assert!((config.same_script - 0.95).abs() < f64::EPSILON);
        assert!((config.pipeline - 0.70).abs() < f64::EPSILON);
        assert!(config.phonetic_floor < config.phonetic_ceiling);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ConfidenceConfig::new()
            .with_same_script(1.0)
            .with_pipeline(0.5)
            .with_direct(0.8, 0.6)
            .with_phonetic_range(0.2, 0.4);

        assert!((config.same_script - 1.0).abs() < f64::EPSILON);
        assert!((config.pipeline - 0.5).abs() < f64::EPSILON);
        assert!((config.direct_unmapped - 0.6).abs() < f64::EPSILON);
        assert!((config.phonetic_ceiling - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sanitized() {
        let config = ConfidenceConfig::new()
            .with_same_script(3.0)
            .with_pipeline(f64::NAN)
            .with_phonetic_range(0.9, 0.1)
            .sanitized();

        assert!((config.same_script - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.pipeline, 0.0);
        assert!((config.phonetic_floor - 0.1).abs() < f64::EPSILON);
        assert!((config.phonetic_ceiling - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ConfidenceConfig = serde_json::from_str(r#"{"pipeline": 0.6}"#).unwrap();
        assert!((config.pipeline - 0.6).abs() < f64::EPSILON);
        assert!((config.same_script - 0.95).abs() < f64::EPSILON);
    }
}
