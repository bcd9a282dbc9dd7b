//! Cross-script converter
//!
//! Strategies run in a fixed order. Each one either produces a conversion or
//! returns a [`ConversionError`] saying why it does not apply, and the next
//! one is tried. Callers always get a [`TransliterationResult`].

use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Instant;

use crate::core::config::ConfidenceConfig;
use crate::core::forward::{to_script, to_script_detailed};
use crate::core::reverse::to_romanized;
use crate::core::script::{Script, ScriptTag};
use crate::core::tables::ScriptTables;
use crate::detection::validator::script_ratio;
use crate::error::ConversionError;

/// Which strategy produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    SameScript,
    DirectMapping,
    RomanizedToTarget(Script),
    CrossScriptPipeline,
    PhoneticFallback,
    Error,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::SameScript => "same_script",
            Method::DirectMapping => "direct_mapping",
            Method::RomanizedToTarget(Script::Devanagari) => "english_to_devanagari",
            Method::RomanizedToTarget(Script::Tamil) => "english_to_tamil",
            Method::RomanizedToTarget(Script::Malayalam) => "english_to_malayalam",
            Method::RomanizedToTarget(Script::Gurmukhi) => "english_to_gurmukhi",
            Method::CrossScriptPipeline => "cross_script_pipeline",
            Method::PhoneticFallback => "phonetic_fallback",
            Method::Error => "error",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Method {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Output of one conversion request
#[derive(Debug, Clone, Serialize)]
pub struct TransliterationResult {
    pub text: String,
    /// Heuristic self-assessment in [0, 1]
    pub confidence: f64,
    pub method: Method,
    /// Wall-clock time spent, excluded from equality
    pub duration_ms: f64,
}

impl PartialEq for TransliterationResult {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.confidence == other.confidence
            && self.method == other.method
    }
}

impl TransliterationResult {
    /// True for the terminal sentinel result
    pub fn is_error(&self) -> bool {
        self.method == Method::Error
    }
}

/// Conversion strategies, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    SameScript,
    Romanized,
    Direct,
    Pipeline,
    Phonetic,
}

impl Strategy {
    pub const ORDER: [Strategy; 5] = [
        Strategy::SameScript,
        Strategy::Romanized,
        Strategy::Direct,
        Strategy::Pipeline,
        Strategy::Phonetic,
    ];
}

/// A strategy's successful output, before timing is attached
#[derive(Debug, Clone, PartialEq)]
struct Conversion {
    text: String,
    confidence: f64,
    method: Method,
}

impl Conversion {
    fn new(text: String, confidence: f64, method: Method) -> Self {
        Self {
            text,
            confidence,
            method,
        }
    }

    fn finish(self, started: Instant) -> TransliterationResult {
        TransliterationResult {
            text: self.text,
            confidence: self.confidence,
            method: self.method,
            duration_ms: started.elapsed().as_secs_f64() * 1000.0,
        }
    }
}

/// Converts text between any source tag and target script
#[derive(Debug, Clone)]
pub struct CrossScriptConverter<'t> {
    tables: &'t ScriptTables,
    confidence: ConfidenceConfig,
}

impl<'t> CrossScriptConverter<'t> {
    pub fn new(tables: &'t ScriptTables, confidence: ConfidenceConfig) -> Self {
        Self { tables, confidence }
    }

    pub fn confidence(&self) -> &ConfidenceConfig {
        &self.confidence
    }

    pub fn convert(&self, text: &str, source: ScriptTag, target: Script) -> TransliterationResult {
        let started = Instant::now();
        let mut failure = ConversionError::NotApplicable;

        for strategy in Strategy::ORDER {
            match self.attempt(strategy, text, source, target) {
                Ok(conversion) => {
                    log::debug!(
                        "{} -> {}: {:?} produced {} (confidence {:.2})",
                        source,
                        target,
                        strategy,
                        conversion.method,
                        conversion.confidence
                    );
                    return conversion.finish(started);
                }
                Err(err) => {
                    log::debug!("{} -> {}: {:?} skipped: {}", source, target, strategy, err);
                    if err != ConversionError::NotApplicable {
                        failure = err;
                    }
                }
            }
        }

        self.terminal(text, target, failure).finish(started)
    }

    /// Run a single strategy
    pub fn attempt_strategy(
        &self,
        strategy: Strategy,
        text: &str,
        source: ScriptTag,
        target: Script,
    ) -> Result<TransliterationResult, ConversionError> {
        let started = Instant::now();
        self.attempt(strategy, text, source, target)
            .map(|c| c.finish(started))
    }

    fn attempt(
        &self,
        strategy: Strategy,
        text: &str,
        source: ScriptTag,
        target: Script,
    ) -> Result<Conversion, ConversionError> {
        match strategy {
            Strategy::SameScript => self.same_script(text, source, target),
            Strategy::Romanized => self.romanized(text, source, target),
            Strategy::Direct => self.direct(text, source, target),
            Strategy::Pipeline => self.pipeline(text, source, target),
            Strategy::Phonetic => self.phonetic(text, source, target),
        }
    }

    fn same_script(
        &self,
        text: &str,
        source: ScriptTag,
        target: Script,
    ) -> Result<Conversion, ConversionError> {
        if source != ScriptTag::Native(target) {
            return Err(ConversionError::NotApplicable);
        }
        Ok(Conversion::new(
            text.to_string(),
            self.confidence.same_script,
            Method::SameScript,
        ))
    }

    fn romanized(
        &self,
        text: &str,
        source: ScriptTag,
        target: Script,
    ) -> Result<Conversion, ConversionError> {
        if !source.is_romanized() {
            return Err(ConversionError::NotApplicable);
        }
        require_text(text)?;

        let out = to_script_detailed(self.tables, text, target);
        let confidence = if target == Script::Devanagari {
            self.confidence.romanized_devanagari
        } else if out.vocabulary_hits > 0 {
            self.confidence.romanized_vocabulary
        } else {
            self.confidence.romanized_characters
        };
        Ok(Conversion::new(
            out.text,
            confidence,
            Method::RomanizedToTarget(target),
        ))
    }

    fn direct(
        &self,
        text: &str,
        source: ScriptTag,
        target: Script,
    ) -> Result<Conversion, ConversionError> {
        let table = source
            .native()
            .and_then(|s| self.tables.direct(s, target))
            .ok_or(ConversionError::NotApplicable)?;
        require_text(text)?;

        let (out, mapped) = table.substitute(text);
        let confidence = if mapped > 0 {
            self.confidence.direct_mapped
        } else {
            self.confidence.direct_unmapped
        };
        Ok(Conversion::new(out, confidence, Method::DirectMapping))
    }

    fn pipeline(
        &self,
        text: &str,
        source: ScriptTag,
        target: Script,
    ) -> Result<Conversion, ConversionError> {
        let native = source.native().ok_or(ConversionError::NotApplicable)?;
        require_text(text)?;

        let romanized = to_romanized(self.tables, text, native);
        if romanized.is_empty() || romanized == text.trim() {
            return Err(ConversionError::PipelineExhausted(source));
        }

        let out = to_script(self.tables, &romanized, target);
        Ok(Conversion::new(
            out,
            self.confidence.pipeline,
            Method::CrossScriptPipeline,
        ))
    }

    fn phonetic(
        &self,
        text: &str,
        source: ScriptTag,
        target: Script,
    ) -> Result<Conversion, ConversionError> {
        let native = source.native().ok_or(ConversionError::NotApplicable)?;
        require_text(text)?;

        // phonetic tables are keyed by Devanagari
        let normalized = if native == Script::Devanagari {
            text.to_string()
        } else {
            let romanized = to_romanized(self.tables, text, native);
            let devanagari = to_script(self.tables, &romanized, Script::Devanagari);
            if devanagari.trim().is_empty() {
                text.to_string()
            } else {
                devanagari
            }
        };

        let out = match self.tables.phonetic(target) {
            Some(table) => table.substitute(&normalized).0,
            None => normalized,
        };

        let share = script_ratio(&out, target);
        if share == 0.0 {
            return Err(ConversionError::UnknownScriptPair {
                from: source,
                to: target,
            });
        }

        let floor = self.confidence.phonetic_floor;
        let ceiling = self.confidence.phonetic_ceiling;
        Ok(Conversion::new(
            out,
            floor + (ceiling - floor) * share,
            Method::PhoneticFallback,
        ))
    }

    /// Result when every strategy declined
    fn terminal(&self, text: &str, target: Script, failure: ConversionError) -> Conversion {
        match failure {
            ConversionError::UnknownScriptPair { .. } => {
                log::debug!("{}; passing text through", failure);
                Conversion::new(text.to_string(), 0.0, Method::PhoneticFallback)
            }
            other => {
                log::warn!("{} conversion failed: {}", target.display_name(), other);
                Conversion::new(
                    format!("[{} conversion needed]", target.display_name()),
                    0.0,
                    Method::Error,
                )
            }
        }
    }
}

fn require_text(text: &str) -> Result<(), ConversionError> {
    if text.trim().is_empty() {
        Err(ConversionError::EmptyInput)
    } else {
        Ok(())
    }
}
