//! Transliterator facade
//!
//! Bundles the shared tables, the converter confidences and the quality
//! threshold behind one value that callers create once and pass around.

use serde::Serialize;

use crate::config::LipiConfig;
use crate::core::config::ConfidenceConfig;
use crate::core::converter::{CrossScriptConverter, TransliterationResult};
use crate::core::forward;
use crate::core::reverse;
use crate::core::script::{Script, ScriptTag};
use crate::core::tables::ScriptTables;
use crate::detection;
use crate::quality::{self, QualityMetrics};

/// Default `overall` score below which a report is flagged
pub const DEFAULT_QUALITY_WARNING: f64 = 0.5;

/// One input converted to several targets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransliterationReport {
    /// Input after whitespace normalization
    pub input: String,
    pub source: ScriptTag,
    pub results: Vec<(Script, TransliterationResult)>,
    pub quality: QualityMetrics,
    /// `quality.overall` fell below the warning threshold
    pub low_quality: bool,
}

impl TransliterationReport {
    pub fn get(&self, target: Script) -> Option<&TransliterationResult> {
        self.results
            .iter()
            .find(|(script, _)| *script == target)
            .map(|(_, result)| result)
    }
}

#[derive(Debug, Clone)]
pub struct Transliterator<'t> {
    tables: &'t ScriptTables,
    converter: CrossScriptConverter<'t>,
    quality_warning_threshold: f64,
}

impl Default for Transliterator<'static> {
    fn default() -> Self {
        Self::new(ScriptTables::shared(), ConfidenceConfig::default())
    }
}

impl<'t> Transliterator<'t> {
    pub fn new(tables: &'t ScriptTables, confidence: ConfidenceConfig) -> Self {
        Self {
            tables,
            converter: CrossScriptConverter::new(tables, confidence.sanitized()),
            quality_warning_threshold: DEFAULT_QUALITY_WARNING,
        }
    }

    pub fn with_quality_warning_threshold(mut self, threshold: f64) -> Self {
        self.quality_warning_threshold = threshold;
        self
    }

    pub fn quality_warning_threshold(&self) -> f64 {
        self.quality_warning_threshold
    }

    pub fn detect_script(&self, text: &str) -> ScriptTag {
        detection::detect_script(text)
    }

    /// Romanized text into `target`
    pub fn transliterate(&self, text: &str, target: Script) -> String {
        forward::to_script(self.tables, text, target)
    }

    /// Native text back to the shared romanization
    pub fn to_romanized(&self, text: &str, source: Script) -> String {
        reverse::to_romanized(self.tables, text, source)
    }

    pub fn cross_script_transliterate(
        &self,
        text: &str,
        source: ScriptTag,
        target: Script,
    ) -> TransliterationResult {
        self.converter.convert(text, source, target)
    }

    /// Convert, detecting the source when `source` is `None`
    pub fn convert_auto(
        &self,
        text: &str,
        source: Option<ScriptTag>,
        target: Script,
    ) -> TransliterationResult {
        let source = source.unwrap_or_else(|| self.detect_script(text));
        self.converter.convert(text, source, target)
    }

    pub fn assess_text_quality(&self, text: &str) -> QualityMetrics {
        quality::assess(text)
    }

    /// Convert `text` into each of `targets`. Each target is converted on
    /// its own; one failing does not affect the rest.
    pub fn transliterate_all(
        &self,
        text: &str,
        source: Option<ScriptTag>,
        targets: &[Script],
    ) -> TransliterationReport {
        let input = quality::format_indian_text(text);
        let source = source.unwrap_or_else(|| self.detect_script(&input));

        let results = targets
            .iter()
            .map(|&target| (target, self.converter.convert(&input, source, target)))
            .collect();

        let quality = self.assess_text_quality(&input);
        let low_quality = quality.overall < self.quality_warning_threshold;
        if low_quality {
            log::debug!(
                "input quality {:.2} below threshold {:.2}",
                quality.overall,
                self.quality_warning_threshold
            );
        }

        TransliterationReport {
            input,
            source,
            results,
            quality,
            low_quality,
        }
    }
}

impl Transliterator<'static> {
    /// Transliterator over the shared tables, configured from `config`
    pub fn from_config(config: &LipiConfig) -> Self {
        Self::new(ScriptTables::shared(), config.confidence.clone())
            .with_quality_warning_threshold(config.quality_warning_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::converter::Method;

    #[test]
    fn test_convert_auto_detects_source() {
        let t = Transliterator::default();
        let r = t.convert_auto("வணக்கம்", None, Script::Devanagari);
        assert_eq!(r.method, Method::DirectMapping);

        let r = t.convert_auto("namaste", None, Script::Devanagari);
        assert_eq!(r.text, "नमस्ते");

        let r = t.convert_auto("नमस्ते", Some(ScriptTag::Native(Script::Devanagari)), Script::Devanagari);
        assert_eq!(r.method, Method::SameScript);
    }

    #[test]
    fn test_transliterate_all() {
        let t = Transliterator::default();
        let report = t.transliterate_all("  hello  ", None, &Script::ALL);
        assert_eq!(report.input, "hello");
        assert_eq!(report.source, ScriptTag::Latin);
        assert_eq!(report.results.len(), 4);
        assert_eq!(report.get(Script::Tamil).unwrap().text, "வணக்கம்");
        assert_eq!(report.get(Script::Gurmukhi).unwrap().text, "ਸਤ ਸ੍ਰੀ ਅਕਾਲ");
        assert!(report.low_quality == (report.quality.overall < DEFAULT_QUALITY_WARNING));
    }

    #[test]
    fn test_transliterate_all_subset() {
        let t = Transliterator::default();
        let report = t.transliterate_all("नमस्ते", None, &[Script::Tamil, Script::Malayalam]);
        assert_eq!(report.source, ScriptTag::Native(Script::Devanagari));
        assert!(report.get(Script::Devanagari).is_none());
        for (_, result) in &report.results {
            assert_eq!(result.method, Method::CrossScriptPipeline);
        }
    }

    #[test]
    fn test_low_quality_flag() {
        let t = Transliterator::default().with_quality_warning_threshold(0.99);
        let report = t.transliterate_all("ka", None, &[Script::Devanagari]);
        assert!(report.low_quality);

        let t = Transliterator::default().with_quality_warning_threshold(0.0);
        let report = t.transliterate_all("ka", None, &[Script::Devanagari]);
        assert!(!report.low_quality);
    }

    #[test]
    fn test_custom_confidence() {
        let t = Transliterator::new(
            ScriptTables::shared(),
            ConfidenceConfig::new().with_same_script(1.0),
        );
        let r = t.cross_script_transliterate("x", ScriptTag::Native(Script::Tamil), Script::Tamil);
        assert!((r.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_trip_helpers() {
        let t = Transliterator::default();
        assert_eq!(t.to_romanized("नमस्ते", Script::Devanagari), "namaste");
        assert_eq!(t.transliterate("namaste", Script::Devanagari), "नमस्ते");
    }
}
