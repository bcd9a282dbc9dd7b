//! Integration tests - public API of the transliteration core

use proptest::prelude::*;

use lipi::config::{load_config_from, save_config_to, LipiConfig};
use lipi::core::tables::MappingTable;
use lipi::ocr::{process_image, BoundingBox, OcrOutput};
use lipi::phrases::{self, Category};
use lipi::{
    assess_text_quality, cross_script_transliterate, detect_script, transliterate,
    ConfidenceConfig, Method, OcrError, QualityMetrics, Script, ScriptTag, Transliterator,
};

const TAMIL: ScriptTag = ScriptTag::Native(Script::Tamil);
const DEVANAGARI: ScriptTag = ScriptTag::Native(Script::Devanagari);

#[test]
fn test_detect_devanagari() {
    assert_eq!(detect_script("नमस्ते"), DEVANAGARI);
}

#[test]
fn test_detect_empty() {
    assert_eq!(detect_script(""), ScriptTag::Unknown);
    assert_eq!(detect_script("   "), ScriptTag::Unknown);
}

#[test]
fn test_detect_each_script() {
    assert_eq!(detect_script("வணக்கம்"), TAMIL);
    assert_eq!(detect_script("നമസ്കാരം"), ScriptTag::Native(Script::Malayalam));
    assert_eq!(detect_script("ਸਤ ਸ੍ਰੀ ਅਕਾਲ"), ScriptTag::Native(Script::Gurmukhi));
    assert_eq!(detect_script("namaste"), ScriptTag::Latin);
    assert_eq!(detect_script("123 !?"), ScriptTag::Latin);
}

#[test]
fn test_namaste_vocabulary_hit() {
    assert_eq!(transliterate("namaste", Script::Devanagari), "नमस्ते");

    let r = cross_script_transliterate("namaste", ScriptTag::Latin, Script::Devanagari);
    assert_eq!(r.text, "नमस्ते");
    assert_eq!(r.method, Method::RomanizedToTarget(Script::Devanagari));
    assert!(r.confidence >= 0.85);
}

#[test]
fn test_tamil_to_devanagari_direct() {
    let r = cross_script_transliterate("வணக்கம்", TAMIL, Script::Devanagari);
    assert_eq!(r.method, Method::DirectMapping);
    assert!(!r.text.is_empty());
    assert_eq!(detect_script(&r.text), DEVANAGARI);
    assert!((0.8..=0.95).contains(&r.confidence));
}

#[test]
fn test_declared_source_mismatch_passes_through() {
    assert_eq!(detect_script("xyz123"), ScriptTag::Latin);

    let r = cross_script_transliterate("xyz123", TAMIL, Script::Devanagari);
    assert_eq!(r.text, "xyz123");
    assert_eq!(r.method, Method::DirectMapping);
    assert!((r.confidence - 0.8).abs() < f64::EPSILON);
}

#[test]
fn test_empty_quality() {
    assert_eq!(assess_text_quality(""), QualityMetrics::default());
}

#[test]
fn test_longest_match_priority() {
    static PAIRS: &[(&str, &str)] = &[("k", "1"), ("ka", "22")];
    let table = MappingTable::from_pairs(PAIRS);
    assert_eq!(table.substitute("ka").0, "22");
    assert_eq!(table.substitute("kka").0, "122");

    // "ka" is one syllable, not a dead consonant followed by a vowel
    assert_eq!(transliterate("ka", Script::Devanagari), "क");
    assert_eq!(transliterate("ka", Script::Tamil), "க");
}

#[test]
fn test_cross_script_pipeline() {
    let r = cross_script_transliterate("नमस्ते", DEVANAGARI, Script::Tamil);
    assert_eq!(r.method, Method::CrossScriptPipeline);
    assert_eq!(r.text, "நமஸ்தெ");
    assert!((r.confidence - 0.7).abs() < f64::EPSILON);
}

#[test]
fn test_pipeline_from_southern_scripts() {
    let malayalam = ScriptTag::Native(Script::Malayalam);
    let r = cross_script_transliterate("കോഴിക്കോട്", malayalam, Script::Devanagari);
    assert_eq!(r.text, "को\u{0934}िक्कोट");

    let r = cross_script_transliterate("കേരളം", malayalam, Script::Gurmukhi);
    assert_eq!(r.text, "ਕੇਰ\u{0A33}ਮ");

    let r = cross_script_transliterate("கோ", TAMIL, Script::Gurmukhi);
    assert_eq!(r.text, "ਕੋ");
    assert_eq!(r.method, Method::CrossScriptPipeline);
}

#[test]
fn test_duration_ignored_in_equality() {
    let a = cross_script_transliterate("ਸਤ", ScriptTag::Native(Script::Gurmukhi), Script::Malayalam);
    let b = cross_script_transliterate("ਸਤ", ScriptTag::Native(Script::Gurmukhi), Script::Malayalam);
    assert_eq!(a, b);
    assert!(a.duration_ms >= 0.0);
}

#[test]
fn test_report_for_every_target() {
    let t = Transliterator::default();
    let report = t.transliterate_all("thank you", None, &Script::ALL);
    assert_eq!(report.source, ScriptTag::Latin);
    for script in Script::ALL {
        let result = report.get(script).unwrap();
        assert!(!result.text.is_empty());
        assert!(!result.is_error());
    }
}

#[test]
fn test_config_drives_transliterator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = LipiConfig {
        targets: vec![Script::Gurmukhi],
        quality_warning_threshold: 0.2,
        confidence: ConfidenceConfig::new().with_same_script(0.99),
    };
    save_config_to(&path, &config).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded, config);

    let t = Transliterator::from_config(&loaded);
    assert!((t.quality_warning_threshold() - 0.2).abs() < f64::EPSILON);
    let r = t.cross_script_transliterate("ਘਰ", ScriptTag::Native(Script::Gurmukhi), Script::Gurmukhi);
    assert!((r.confidence - 0.99).abs() < f64::EPSILON);
}

#[test]
fn test_out_of_range_confidence_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"confidence": {"same_script": 3.5}}"#).unwrap();

    let t = Transliterator::from_config(&load_config_from(&path).unwrap());
    let r = t.cross_script_transliterate("x", TAMIL, Script::Tamil);
    assert!((r.confidence - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_ocr_to_report() {
    let provider = |_: &[u8]| -> Result<OcrOutput, OcrError> {
        Ok(OcrOutput {
            text: "नमस्ते".to_string(),
            confidence: 0.8,
            bounding_boxes: vec![BoundingBox {
                x1: 10.0,
                y1: 10.0,
                x2: 60.0,
                y2: 30.0,
            }],
        })
    };
    let t = Transliterator::default();
    let image = process_image(&provider, b"fake image", &t, &[Script::Tamil, Script::Gurmukhi]).unwrap();
    assert_eq!(image.report.source, DEVANAGARI);
    assert_eq!(image.report.results.len(), 2);
    assert!((image.ocr.bounding_boxes[0].height() - 20.0).abs() < f64::EPSILON);
}

#[test]
fn test_phrasebook() {
    let entry = phrases::translations("Thank you").unwrap();
    assert_eq!(entry.category, Category::Greetings);
    assert_eq!(entry.get(Script::Devanagari), entry.devanagari);

    assert!(phrases::is_translatable("hello?"));
    assert!(!phrases::is_translatable("quantum chromodynamics"));
    assert!(phrases::suggestions("").is_empty());
    assert!(phrases::suggestions("thank").iter().all(|s| s.starts_with("thank")));
    assert!(!phrases::phrases_in(Category::Emergency).is_empty());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn arb_script() -> impl Strategy<Value = Script> {
    prop::sample::select(Script::ALL.to_vec())
}

fn arb_source() -> impl Strategy<Value = ScriptTag> {
    prop_oneof![
        4 => arb_script().prop_map(ScriptTag::Native),
        1 => Just(ScriptTag::Latin),
        1 => Just(ScriptTag::Unknown),
    ]
}

/// Text drawn from one script's block, with spaces
fn arb_native_text(script: Script) -> BoxedStrategy<String> {
    let (start, end) = script.unicode_range();
    let pattern = format!("[\\x{{{:04X}}}-\\x{{{:04X}}} ]{{1,16}}", start, end);
    proptest::string::string_regex(&pattern)
        .expect("block pattern")
        .boxed()
}

fn arb_pipeline_case() -> impl Strategy<Value = (Script, Script, String)> {
    (arb_script(), arb_script())
        .prop_filter("needs the romanized pipeline", |(source, target)| {
            source != target && !(*source == Script::Tamil && *target == Script::Devanagari)
        })
        .prop_flat_map(|(source, target)| (Just(source), Just(target), arb_native_text(source)))
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z ]{0,24}",
        2 => "[\u{0900}-\u{097F} ]{0,16}",
        2 => "[\u{0B80}-\u{0BFF} ]{0,16}",
        1 => "[\u{0D00}-\u{0D7F}\u{0A00}-\u{0A7F} ]{0,16}",
        1 => any::<String>(),
    ]
}

proptest! {
    #[test]
    fn prop_every_function_returns(text in arb_text(), source in arb_source(), target in arb_script()) {
        let _ = detect_script(&text);
        let _ = transliterate(&text, target);
        let r = cross_script_transliterate(&text, source, target);
        prop_assert!((0.0..=1.0).contains(&r.confidence));
        let q = assess_text_quality(&text);
        prop_assert!((0.0..=1.0).contains(&q.overall));
    }

    #[test]
    fn prop_deterministic(text in arb_text(), source in arb_source(), target in arb_script()) {
        prop_assert_eq!(detect_script(&text), detect_script(&text));
        prop_assert_eq!(transliterate(&text, target), transliterate(&text, target));
        prop_assert_eq!(
            cross_script_transliterate(&text, source, target),
            cross_script_transliterate(&text, source, target)
        );
    }

    #[test]
    fn prop_same_script_is_identity(text in arb_text(), script in arb_script()) {
        let r = cross_script_transliterate(&text, ScriptTag::Native(script), script);
        prop_assert_eq!(&r.text, &text);
        prop_assert_eq!(r.method, Method::SameScript);
        prop_assert!((r.confidence - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn prop_pipeline_output_stays_in_target((source, target, text) in arb_pipeline_case()) {
        let r = cross_script_transliterate(&text, ScriptTag::Native(source), target);
        prop_assume!(r.method == Method::CrossScriptPipeline);
        for c in r.text.chars() {
            prop_assert!(!c.is_ascii_alphabetic(), "{:?} leaked into {:?}", c, r.text);
            prop_assert!(
                c.is_whitespace()
                    || target.contains_char(c)
                    || c.is_ascii_punctuation()
                    || c.is_ascii_digit()
                    || text.contains(c),
                "{:?} in {:?} ({} -> {})",
                c,
                r.text,
                source,
                target
            );
        }
    }

    #[test]
    fn prop_quality_confidence_grows_then_saturates(text in "[a-z]{1,80}", extra in "[a-z]{1,10}") {
        let short = assess_text_quality(&text).confidence;
        let long = assess_text_quality(&format!("{}{}", text, extra)).confidence;
        prop_assert!(short <= long);
        let expected = (text.chars().count() as f64 / 50.0).min(1.0);
        prop_assert!((short - expected).abs() < 1e-9);
    }
}
