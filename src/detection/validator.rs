//! Checks on converted text
//!
//! Used to tell how much of a conversion actually landed in the target
//! script.

use crate::core::script::Script;

/// Share of non-whitespace characters that belong to `script` (0.0 ~ 1.0)
pub fn script_ratio(text: &str, script: Script) -> f64 {
    let mut total = 0usize;
    let mut hits = 0usize;

    for c in text.chars().filter(|c| !c.is_whitespace()) {
        total += 1;
        if script.contains_char(c) {
            hits += 1;
        }
    }

    if total == 0 {
        return 0.0;
    }

    hits as f64 / total as f64
}

/// True when at least half of the text is in `script`
pub fn is_mostly_script(text: &str, script: Script) -> bool {
    script_ratio(text, script) >= 0.5
}

/// Converted text is usable as `target` output
///
/// - empty is invalid
/// - every character must be in the target block, ASCII punctuation/digits,
///   or whitespace
/// - at least one target-script character
pub fn is_valid_script_result(converted: &str, target: Script) -> bool {
    if converted.trim().is_empty() {
        return false;
    }

    let mut has_target = false;
    for c in converted.chars() {
        if target.contains_char(c) {
            has_target = true;
        } else if !(c.is_whitespace() || c.is_ascii_digit() || c.is_ascii_punctuation()) {
            return false;
        }
    }
    has_target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_ratio() {
        assert_eq!(script_ratio("", Script::Tamil), 0.0);
        assert_eq!(script_ratio("   ", Script::Tamil), 0.0);
        assert!((script_ratio("கx", Script::Tamil) - 0.5).abs() < f64::EPSILON);
        assert!((script_ratio("க க", Script::Tamil) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_is_mostly_script() {
        assert!(is_mostly_script("नमस्ते", Script::Devanagari));
        assert!(!is_mostly_script("namaste", Script::Devanagari));
    }

    #[test]
    fn test_valid_result() {
        assert!(is_valid_script_result("नमस्ते!", Script::Devanagari));
        assert!(is_valid_script_result("ਸਤ 12", Script::Gurmukhi));
        assert!(!is_valid_script_result("", Script::Tamil));
        assert!(!is_valid_script_result("123", Script::Tamil));
        assert!(!is_valid_script_result("கabc", Script::Tamil));
        assert!(!is_valid_script_result("नमस्ते", Script::Tamil));
    }
}
