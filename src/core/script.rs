//! Script tags and Unicode block helpers
//!
//! All four supported scripts share the ISCII-derived block layout, so
//! consonants and dependent vowel signs sit at the same offsets in every block.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseScriptError;

/// Block size shared by the four Indic blocks
const BLOCK_LEN: u32 = 0x80;

/// A script that text can be converted *into*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Devanagari,
    Tamil,
    Malayalam,
    Gurmukhi,
}

impl Script {
    /// Every target script, in detection priority order.
    pub const ALL: [Script; 4] = [
        Script::Devanagari,
        Script::Tamil,
        Script::Malayalam,
        Script::Gurmukhi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Script::Devanagari => "devanagari",
            Script::Tamil => "tamil",
            Script::Malayalam => "malayalam",
            Script::Gurmukhi => "gurmukhi",
        }
    }

    /// Human readable name, as shown to end users.
    pub fn display_name(&self) -> &'static str {
        match self {
            Script::Devanagari => "Devanagari (Hindi)",
            Script::Tamil => "Tamil",
            Script::Malayalam => "Malayalam",
            Script::Gurmukhi => "Gurmukhi (Punjabi)",
        }
    }

    /// First code point of the script's block
    fn block_start(&self) -> u32 {
        match self {
            Script::Devanagari => 0x0900,
            Script::Gurmukhi => 0x0A00,
            Script::Tamil => 0x0B80,
            Script::Malayalam => 0x0D00,
        }
    }

    /// Inclusive code point range of the script's block
    pub fn unicode_range(&self) -> (u32, u32) {
        let start = self.block_start();
        (start, start + BLOCK_LEN - 1)
    }

    pub fn contains_char(&self, c: char) -> bool {
        let (start, end) = self.unicode_range();
        (start..=end).contains(&(c as u32))
    }

    /// Vowel-suppression mark (virama / pulli / chandrakkala)
    pub fn virama(&self) -> char {
        // offset 0x4D in every block
        char::from_u32(self.block_start() + 0x4D).unwrap_or('\u{094D}')
    }

    /// Script the character belongs to, if any
    pub fn of_char(c: char) -> Option<Script> {
        Script::ALL.into_iter().find(|s| s.contains_char(c))
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Script {
    type Err = ParseScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "devanagari" | "hindi" => Ok(Script::Devanagari),
            "tamil" => Ok(Script::Tamil),
            "malayalam" => Ok(Script::Malayalam),
            "gurmukhi" | "gurumukhi" | "punjabi" => Ok(Script::Gurmukhi),
            other => Err(ParseScriptError(other.to_string())),
        }
    }
}

/// Outcome of script detection, and the source side of a conversion.
///
/// `Latin` is romanized/English text; `Unknown` is empty input. Neither is a
/// valid conversion target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptTag {
    Native(Script),
    Latin,
    Unknown,
}

impl ScriptTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptTag::Native(script) => script.as_str(),
            ScriptTag::Latin => "latin",
            ScriptTag::Unknown => "unknown",
        }
    }

    pub fn native(&self) -> Option<Script> {
        match self {
            ScriptTag::Native(script) => Some(*script),
            _ => None,
        }
    }

    /// Romanized or undetectable input goes through the forward transliterator
    pub fn is_romanized(&self) -> bool {
        matches!(self, ScriptTag::Latin | ScriptTag::Unknown)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScriptTag::Native(script) => script.display_name(),
            ScriptTag::Latin => "English",
            ScriptTag::Unknown => "Unknown",
        }
    }
}

impl From<Script> for ScriptTag {
    fn from(script: Script) -> Self {
        ScriptTag::Native(script)
    }
}

impl fmt::Display for ScriptTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptTag {
    type Err = ParseScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latin" | "english" | "roman" => Ok(ScriptTag::Latin),
            "unknown" => Ok(ScriptTag::Unknown),
            other => other.parse::<Script>().map(ScriptTag::Native),
        }
    }
}

impl Serialize for ScriptTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ScriptTag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Offset of `c` inside its Indic block
fn block_offset(c: char) -> Option<u32> {
    Script::of_char(c).map(|s| c as u32 - s.block_start())
}

/// Consonant letters (including nukta forms at 0x58..=0x5F)
pub fn is_consonant(c: char) -> bool {
    matches!(block_offset(c), Some(0x15..=0x39) | Some(0x58..=0x5F))
}

/// Dependent vowel signs and the virama
pub fn is_dependent_sign(c: char) -> bool {
    matches!(block_offset(c), Some(0x3E..=0x4D))
}

/// Nukta (dot below), which modifies the preceding consonant
pub fn is_nukta(c: char) -> bool {
    block_offset(c) == Some(0x3C)
}

/// Native digits zero to nine in any of the four scripts
pub fn is_native_digit(c: char) -> bool {
    matches!(block_offset(c), Some(0x66..=0x6F))
}
