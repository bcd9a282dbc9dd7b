pub mod config;
pub mod core;
pub mod detection;
pub mod engine;
pub mod error;
pub mod ocr;
pub mod phrases;
pub mod quality;

pub use core::{ConfidenceConfig, Method, Script, ScriptTag, ScriptTables, TransliterationResult};
pub use engine::{TransliterationReport, Transliterator};
pub use error::{ConfigError, ConversionError, OcrError, ParseScriptError};
pub use quality::QualityMetrics;

/// Dominant script of `text`
pub fn detect_script(text: &str) -> ScriptTag {
    detection::detect_script(text)
}

/// Romanized text into `target` using the shared tables
pub fn transliterate(text: &str, target: Script) -> String {
    Transliterator::default().transliterate(text, target)
}

pub fn cross_script_transliterate(
    text: &str,
    source: ScriptTag,
    target: Script,
) -> TransliterationResult {
    Transliterator::default().cross_script_transliterate(text, source, target)
}

pub fn assess_text_quality(text: &str) -> QualityMetrics {
    quality::assess(text)
}
