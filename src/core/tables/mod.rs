//! Mapping tables
//!
//! Raw `(key, value)` slices live in the submodules; [`ScriptTables`] indexes
//! them into hash maps once per process.

pub mod native;
pub mod romanized;
pub mod vocabulary;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::core::script::Script;
use romanized::Pairs;

/// One longest-match hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableMatch {
    pub key: &'static str,
    pub value: &'static str,
    /// Number of input chars consumed
    pub len: usize,
}

/// Immutable key -> value table with a known longest key
#[derive(Debug, Clone)]
pub struct MappingTable {
    entries: HashMap<&'static str, &'static str>,
    max_key_chars: usize,
}

impl MappingTable {
    pub fn from_pairs(pairs: Pairs) -> Self {
        let entries: HashMap<_, _> = pairs.iter().copied().collect();
        let max_key_chars = entries
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);
        Self {
            entries,
            max_key_chars,
        }
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest key that is a prefix of `chars`
    pub fn longest_match(&self, chars: &[char]) -> Option<TableMatch> {
        let upper = self.max_key_chars.min(chars.len());
        let mut candidate = String::with_capacity(upper * 4);
        for len in (1..=upper).rev() {
            candidate.clear();
            candidate.extend(&chars[..len]);
            if let Some((key, value)) = self.entries.get_key_value(candidate.as_str()) {
                return Some(TableMatch {
                    key: *key,
                    value: *value,
                    len,
                });
            }
        }
        None
    }

    /// Greedy longest-match substitution; unmatched chars are copied through.
    ///
    /// Returns the output and the number of chars that hit the table.
    pub fn substitute(&self, text: &str) -> (String, usize) {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut mapped = 0;
        let mut i = 0;
        while i < chars.len() {
            match self.longest_match(&chars[i..]) {
                Some(m) => {
                    out.push_str(m.value);
                    mapped += m.len;
                    i += m.len;
                }
                None => {
                    out.push(chars[i]);
                    i += 1;
                }
            }
        }
        (out, mapped)
    }
}

/// Every table the transliterators consult, indexed by target script
#[derive(Debug, Clone)]
pub struct ScriptTables {
    to_script: [MappingTable; 4],
    signs: [MappingTable; 4],
    vocabulary: [MappingTable; 4],
    from_script: [MappingTable; 4],
    tamil_to_devanagari: MappingTable,
    phonetic: [Option<MappingTable>; 4],
}

static SHARED: LazyLock<ScriptTables> = LazyLock::new(ScriptTables::build);

fn index(script: Script) -> usize {
    script as usize
}

impl ScriptTables {
    /// Process-wide tables, built on first use
    pub fn shared() -> &'static ScriptTables {
        &SHARED
    }

    pub fn build() -> Self {
        use native::*;
        use romanized::*;
        use vocabulary::*;

        let t = MappingTable::from_pairs;
        Self {
            to_script: [
                t(TO_DEVANAGARI),
                t(TO_TAMIL),
                t(TO_MALAYALAM),
                t(TO_GURMUKHI),
            ],
            signs: [
                t(DEVANAGARI_SIGNS),
                t(TAMIL_SIGNS),
                t(MALAYALAM_SIGNS),
                t(GURMUKHI_SIGNS),
            ],
            vocabulary: [
                t(DEVANAGARI_WORDS),
                t(TAMIL_WORDS),
                t(MALAYALAM_WORDS),
                t(GURMUKHI_WORDS),
            ],
            from_script: [
                t(FROM_DEVANAGARI),
                t(FROM_TAMIL),
                t(FROM_MALAYALAM),
                t(FROM_GURMUKHI),
            ],
            tamil_to_devanagari: t(TAMIL_TO_DEVANAGARI),
            phonetic: [
                None,
                Some(t(PHONETIC_TAMIL)),
                Some(t(PHONETIC_MALAYALAM)),
                Some(t(PHONETIC_GURMUKHI)),
            ],
        }
    }

    /// Romanized -> native syllables
    pub fn to_script(&self, script: Script) -> &MappingTable {
        &self.to_script[index(script)]
    }

    /// Romanized vowel -> dependent sign
    pub fn signs(&self, script: Script) -> &MappingTable {
        &self.signs[index(script)]
    }

    /// Whole-word entries
    pub fn vocabulary(&self, script: Script) -> &MappingTable {
        &self.vocabulary[index(script)]
    }

    /// Native -> romanized
    pub fn from_script(&self, script: Script) -> &MappingTable {
        &self.from_script[index(script)]
    }

    /// Curated native -> native table, if the pair has one
    pub fn direct(&self, source: Script, target: Script) -> Option<&MappingTable> {
        match (source, target) {
            (Script::Tamil, Script::Devanagari) => Some(&self.tamil_to_devanagari),
            _ => None,
        }
    }

    /// Devanagari-keyed fallback table for `target`
    pub fn phonetic(&self, target: Script) -> Option<&MappingTable> {
        self.phonetic[index(target)].as_ref()
    }
}

impl Default for ScriptTables {
    fn default() -> Self {
        Self::build()
    }
}
