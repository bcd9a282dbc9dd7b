//! Error types
//!
//! Conversion errors never reach callers of the transliteration API; they
//! steer the converter from one strategy to the next.

use thiserror::Error;

use crate::core::script::{Script, ScriptTag};

/// Why a conversion strategy did not produce a result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Input was empty or whitespace only
    #[error("input text is empty")]
    EmptyInput,

    /// The strategy does not handle this source/target pair
    #[error("strategy does not apply")]
    NotApplicable,

    /// The romanized intermediate was empty or identical to the input
    #[error("romanized intermediate for {0} produced nothing usable")]
    PipelineExhausted(ScriptTag),

    /// No table covers the pair and the phonetic fallback mapped nothing
    #[error("no mapping from {from} to {to}")]
    UnknownScriptPair { from: ScriptTag, to: Script },
}

/// Unrecognized script name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown script: {0}")]
pub struct ParseScriptError(pub String);

/// Errors reading or writing the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the OCR stage of the image pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OcrError {
    /// The OCR provider itself failed
    #[error("OCR provider failed: {0}")]
    Provider(String),

    /// The provider returned only whitespace
    #[error("no text found in image")]
    NoText,
}
