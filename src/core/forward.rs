//! Romanized -> native script
//!
//! Whole-word vocabulary first, then greedy longest-match over the syllable
//! table. A small amount of state carries between matches so that
//! consonant + vowel sequences render as one syllable (`s` + `e` -> `से`).

use crate::core::script::{is_consonant, Script};
use crate::core::tables::{MappingTable, ScriptTables};

/// Forward conversion output with the counters the converter needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardOutput {
    pub text: String,
    /// Words replaced by a whole-word vocabulary entry
    pub vocabulary_hits: usize,
    pub words: usize,
}

/// What the output currently ends with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tail {
    Other,
    /// Consonant + virama; a vowel replaces the virama with its sign
    Dead,
    /// Consonant carrying its inherent `a`
    Live,
}

/// Convert romanized text into `target`. Never fails; unmapped characters
/// pass through.
pub fn to_script(tables: &ScriptTables, text: &str, target: Script) -> String {
    to_script_detailed(tables, text, target).text
}

pub fn to_script_detailed(tables: &ScriptTables, text: &str, target: Script) -> ForwardOutput {
    let vocabulary = tables.vocabulary(target);
    let mut converted = Vec::new();
    let mut vocabulary_hits = 0;

    for word in text.split_whitespace() {
        let lower = word.to_lowercase();
        if let Some(value) = vocabulary.get(&lower) {
            vocabulary_hits += 1;
            converted.push(value.to_string());
            continue;
        }

        let out = convert_word(tables, &lower, target);
        if out.is_empty() {
            converted.push(word.to_string());
        } else {
            converted.push(out);
        }
    }

    ForwardOutput {
        words: converted.len(),
        text: converted.join(" "),
        vocabulary_hits,
    }
}

fn convert_word(tables: &ScriptTables, word: &str, target: Script) -> String {
    let table = tables.to_script(target);
    let signs = tables.signs(target);
    let virama = target.virama();

    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len() * 3);
    let mut tail = Tail::Other;
    let mut i = 0;

    while i < chars.len() {
        let Some(m) = table.longest_match(&chars[i..]) else {
            out.push(chars[i]);
            tail = Tail::Other;
            i += 1;
            continue;
        };
        i += m.len;

        match tail {
            Tail::Dead => {
                if let Some(sign) = signs.get(m.key) {
                    out.pop();
                    out.push_str(sign);
                    tail = Tail::Other;
                    continue;
                }
            }
            Tail::Live => {
                // "ka" + "i" reads as "kai"
                if let Some(sign) = lengthened_sign(signs, m.key) {
                    out.push_str(sign);
                    tail = Tail::Other;
                    continue;
                }
            }
            Tail::Other => {}
        }

        out.push_str(m.value);
        tail = tail_of(m.value, virama);
    }

    // A final bare consonant reads as the full letter in Devanagari and
    // Gurmukhi; Tamil and Malayalam keep the explicit virama.
    if matches!(target, Script::Devanagari | Script::Gurmukhi) && out.ends_with(virama) {
        out.pop();
    }

    out
}

/// Sign for `a` + `key` when `key` is a vowel (`a` -> `aa`, `i` -> `ai`)
fn lengthened_sign(signs: &MappingTable, key: &str) -> Option<&'static str> {
    if !signs.contains_key(key) {
        return None;
    }
    let combined = format!("a{}", key);
    signs.get(&combined).filter(|s| !s.is_empty())
}

fn tail_of(value: &str, virama: char) -> Tail {
    match value.chars().last() {
        Some(c) if c == virama => Tail::Dead,
        Some(c) if is_consonant(c) => Tail::Live,
        _ => Tail::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fwd(text: &str, target: Script) -> String {
        to_script(ScriptTables::shared(), text, target)
    }

    #[test]
    fn test_vocabulary_hit() {
        assert_eq!(fwd("namaste", Script::Devanagari), "नमस्ते");
        assert_eq!(fwd("Namaste", Script::Devanagari), "नमस्ते");
        assert_eq!(fwd("vanakkam", Script::Tamil), "வணக்கம்");
        assert_eq!(fwd("kochi", Script::Malayalam), "കൊച്ചി");
        assert_eq!(fwd("amritsar", Script::Gurmukhi), "ਅੰਮ੍ਰਿਤਸਰ");
    }

    #[test]
    fn test_vocabulary_hits_counted() {
        let out = to_script_detailed(ScriptTables::shared(), "hello ram", Script::Tamil);
        assert_eq!(out.vocabulary_hits, 1);
        assert_eq!(out.words, 2);
    }

    #[test]
    fn test_longest_match_syllables() {
        assert_eq!(fwd("ka", Script::Devanagari), "क");
        assert_eq!(fwd("kal", Script::Devanagari), "कल");
        assert_eq!(fwd("raam", Script::Devanagari), "राम");
        assert_eq!(fwd("ram", Script::Devanagari), "रम");
    }

    #[test]
    fn test_consonant_cluster_takes_vowel_sign() {
        assert_eq!(fwd("namas", Script::Devanagari), "नमस");
        assert_eq!(fwd("kshetra", Script::Devanagari), "क्षेत्र");
        assert_eq!(fwd("kai", Script::Devanagari), "कै");
    }

    #[test]
    fn test_tamil_keeps_final_pulli() {
        assert_eq!(fwd("amma", Script::Tamil), "அம்ம");
        assert_eq!(fwd("kan", Script::Tamil), "கன்");
    }

    #[test]
    fn test_gurmukhi_syllables() {
        assert_eq!(fwd("sat", Script::Gurmukhi), "ਸਤ");
        assert_eq!(fwd("ghar", Script::Gurmukhi), "ਘਰ");
    }

    #[test]
    fn test_digits_and_passthrough() {
        assert_eq!(fwd("123", Script::Devanagari), "१२३");
        assert_eq!(fwd("42", Script::Tamil), "௪௨");
        assert_eq!(fwd("ka!", Script::Devanagari), "क!");
        assert_eq!(fwd("😀", Script::Malayalam), "😀");
    }

    #[test]
    fn test_whitespace_normalized() {
        assert_eq!(fwd("  raam   kal ", Script::Devanagari), "राम कल");
        assert_eq!(fwd("", Script::Devanagari), "");
        assert_eq!(fwd(" \t ", Script::Gurmukhi), "");
    }
}
