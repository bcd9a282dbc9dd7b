//! Text statistics for Indian-script input
//!
//! Word/sentence counts, a Flesch-like readability score and a short list of
//! recommendations. Scores are rough guides, not measurements.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::core::script::{is_native_digit, Script, ScriptTag};
use crate::detection::detect_script_with_confidence;

/// Devanagari conjunct shapes that make text harder to read
static COMPLEX_CONJUNCTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // triple conjunct
        r"[\x{0915}-\x{0939}]\x{094D}[\x{0915}-\x{0939}]\x{094D}[\x{0915}-\x{0939}]",
        // consonant + r
        r"[\x{0915}-\x{0939}]\x{094D}\x{0930}",
        // r + consonant
        r"\x{0930}\x{094D}[\x{0915}-\x{0939}]",
        // ksha type
        r"[\x{0915}-\x{0939}]\x{094D}\x{0937}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("conjunct pattern"))
    .collect()
});

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?\x{0964}\x{0965}]").expect("sentence pattern"));

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,!?;:\x{0964}\x{0965}]").expect("punctuation pattern"));

/// Text ending in a bare virama looks cut off
static TRAILING_VIRAMA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{094D}\x{0A4D}\x{0BCD}\x{0D4D}]$").expect("virama pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    pub word_count: usize,
    pub character_count: usize,
    pub script: ScriptTag,
    /// Dominant script's share of the counted characters
    pub confidence: f64,
    pub has_numbers: bool,
    pub has_punctuation: bool,
    pub complexity: Complexity,
    /// 0 ~ 100, higher is easier
    pub readability_score: f64,
}

/// Factor scores and advice for one text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextReview {
    pub overall: f64,
    pub encoding: f64,
    pub structure: f64,
    pub readability: f64,
    pub completeness: f64,
    pub recommendations: Vec<String>,
}

pub fn analyze_text(text: &str) -> TextAnalysis {
    let word_count = text.split_whitespace().count();
    let (script, confidence) = detect_script_with_confidence(text);

    let has_numbers = text
        .chars()
        .any(|c| c.is_ascii_digit() || is_native_digit(c));
    let has_punctuation = PUNCTUATION.is_match(text);

    let complexity = if word_count > 50 || has_complex_conjuncts(text) {
        Complexity::Complex
    } else if word_count > 20 || has_numbers || has_punctuation {
        Complexity::Medium
    } else {
        Complexity::Simple
    };

    TextAnalysis {
        word_count,
        character_count: text.chars().count(),
        script,
        confidence,
        has_numbers,
        has_punctuation,
        complexity,
        readability_score: readability_score(text, script),
    }
}

/// Devanagari triple, r- and ksha-type conjuncts
pub fn has_complex_conjuncts(text: &str) -> bool {
    COMPLEX_CONJUNCTS.iter().any(|re| re.is_match(text))
}

/// Flesch-like score clamped to [0, 100]
pub fn readability_score(text: &str, script: ScriptTag) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentences = SENTENCE_BREAK
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();

    if words.is_empty() || sentences == 0 {
        return 0.0;
    }

    let words_per_sentence = words.len() as f64 / sentences as f64;
    let chars_per_word =
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / words.len() as f64;

    let mut score = 100.0 - 1.015 * words_per_sentence - 84.6 * (chars_per_word / 5.0);
    if script == ScriptTag::Native(Script::Devanagari) && has_complex_conjuncts(text) {
        score -= 15.0;
    }

    score.clamp(0.0, 100.0)
}

/// Review text before conversion.
///
/// Encoding is penalized for replacement or control characters, structure
/// for mixed scripts, readability for hard text, completeness for a
/// trailing virama.
pub fn review_text(text: &str) -> TextReview {
    let mut recommendations = Vec::new();
    let mut encoding = 1.0;
    let mut structure = 1.0;
    let mut readability = 1.0;
    let mut completeness = 1.0;

    if text
        .chars()
        .any(|c| c == '\u{FFFD}' || (c.is_control() && !c.is_whitespace()))
    {
        encoding -= 0.2;
        recommendations.push("Text contains replacement or control characters".to_string());
    }

    let analysis = analyze_text(text);
    if analysis.confidence < 0.8 {
        structure -= 0.3;
        recommendations.push("Mixed script content may affect readability".to_string());
    }

    if analysis.readability_score < 50.0 {
        readability -= 0.4;
        recommendations.push("Text complexity is high - consider simplifying".to_string());
    }

    if TRAILING_VIRAMA.is_match(text.trim_end()) {
        completeness -= 0.3;
        recommendations.push("Text may contain incomplete words".to_string());
    }

    TextReview {
        overall: (encoding + structure + readability + completeness) / 4.0,
        encoding,
        structure,
        readability,
        completeness,
        recommendations,
    }
}

/// Greedy word wrap by character count. Words longer than `max_width` get a
/// line of their own.
pub fn wrap_text(text: &str, max_width: usize) -> String {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        if current_len > 0 && current_len + len + 1 > max_width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += len;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

/// Collapse runs of whitespace and trim
pub fn format_indian_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_devanagari() {
        let a = analyze_text("नमस्ते दुनिया");
        assert_eq!(a.word_count, 2);
        assert_eq!(a.character_count, 13);
        assert_eq!(a.script, ScriptTag::Native(Script::Devanagari));
        assert!((a.confidence - 1.0).abs() < f64::EPSILON);
        assert!(!a.has_numbers);
        assert!(!a.has_punctuation);
        assert_eq!(a.complexity, Complexity::Simple);
    }

    #[test]
    fn test_numbers_and_punctuation() {
        let a = analyze_text("platform 9");
        assert!(a.has_numbers);
        assert_eq!(a.complexity, Complexity::Medium);

        assert!(analyze_text("५ रुपये").has_numbers);
        assert!(analyze_text("धन्यवाद।").has_punctuation);
    }

    #[test]
    fn test_complexity_by_length() {
        let long = vec!["word"; 51].join(" ");
        assert_eq!(analyze_text(&long).complexity, Complexity::Complex);
        let medium = vec!["word"; 21].join(" ");
        assert_eq!(analyze_text(&medium).complexity, Complexity::Medium);
    }

    #[test]
    fn test_complex_conjuncts() {
        assert!(has_complex_conjuncts("क्षमा"));
        assert!(has_complex_conjuncts("प्रेम"));
        assert!(has_complex_conjuncts("धर्म"));
        assert!(has_complex_conjuncts("स्त्री"));
        assert!(!has_complex_conjuncts("नमस्ते"));
        assert!(!has_complex_conjuncts("hello"));
    }

    #[test]
    fn test_readability() {
        // 2 words, 1 sentence, 4 chars per word
        let score = readability_score("hi there.", ScriptTag::Latin);
        assert!((score - 30.29).abs() < 1e-9);

        assert_eq!(readability_score("", ScriptTag::Unknown), 0.0);
        assert_eq!(readability_score("...", ScriptTag::Latin), 0.0);
        // long words clamp at zero
        assert_eq!(readability_score("incomprehensibilities", ScriptTag::Latin), 0.0);
    }

    #[test]
    fn test_review() {
        let review = review_text("a b c d");
        assert!(review.recommendations.is_empty());
        assert!((review.overall - 1.0).abs() < f64::EPSILON);

        let review = review_text("क्");
        assert!((review.completeness - 0.7).abs() < 1e-9);
        assert!(review
            .recommendations
            .iter()
            .any(|r| r.contains("incomplete")));

        let review = review_text("abc नमस्ते");
        assert!((review.structure - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("a bb ccc dddd", 6), "a bb\nccc\ndddd");
        assert_eq!(wrap_text("नमस्ते दुनिया", 80), "नमस्ते दुनिया");
        assert_eq!(wrap_text("", 10), "");
        assert_eq!(wrap_text("toolongword x", 4), "toolongword\nx");
    }

    #[test]
    fn test_format_indian_text() {
        assert_eq!(format_indian_text("  नमस्ते \n  दुनिया "), "नमस्ते दुनिया");
    }
}
