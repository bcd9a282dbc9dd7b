//! Script detection by Unicode block counts
//!
//! Every character is counted towards at most one bucket: one of the four
//! Indic blocks or ASCII letters. The largest bucket wins.

use crate::core::script::{Script, ScriptTag};

/// Per-script character counts for one string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptCounts {
    /// Indexed like `Script::ALL`
    native: [usize; 4],
    latin: usize,
}

impl ScriptCounts {
    pub fn count(text: &str) -> Self {
        let mut counts = Self::default();
        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                counts.latin += 1;
            } else if let Some(script) = Script::of_char(c) {
                counts.native[script as usize] += 1;
            }
        }
        counts
    }

    pub fn native(&self, script: Script) -> usize {
        self.native[script as usize]
    }

    pub fn latin(&self) -> usize {
        self.latin
    }

    /// Characters counted in any bucket
    pub fn total(&self) -> usize {
        self.native.iter().sum::<usize>() + self.latin
    }

    /// Bucket with the strictly highest count; earlier buckets win ties.
    /// `None` when nothing was counted.
    pub fn dominant(&self) -> Option<(ScriptTag, usize)> {
        let buckets = Script::ALL
            .into_iter()
            .map(|s| (ScriptTag::Native(s), self.native(s)))
            .chain(std::iter::once((ScriptTag::Latin, self.latin)));

        let mut best: Option<(ScriptTag, usize)> = None;
        for (tag, n) in buckets {
            if n > best.map_or(0, |(_, m)| m) {
                best = Some((tag, n));
            }
        }
        best
    }
}

/// Dominant script of `text`.
///
/// Empty or whitespace-only input is `Unknown`; anything else with no
/// counted characters (digits, punctuation, emoji) falls back to `Latin`.
pub fn detect_script(text: &str) -> ScriptTag {
    if text.trim().is_empty() {
        return ScriptTag::Unknown;
    }
    ScriptCounts::count(text)
        .dominant()
        .map_or(ScriptTag::Latin, |(tag, _)| tag)
}

/// Dominant script together with its share of the counted characters.
///
/// Returns `(Unknown, 0.0)` when no character was counted.
pub fn detect_script_with_confidence(text: &str) -> (ScriptTag, f64) {
    let counts = ScriptCounts::count(text);
    match counts.dominant() {
        Some((tag, n)) => (tag, n as f64 / counts.total() as f64),
        None => (ScriptTag::Unknown, 0.0),
    }
}
