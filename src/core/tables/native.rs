//! Native -> native tables
//!
//! The direct table covers the only pair with a hand-curated mapping
//! (Tamil -> Devanagari). The phonetic tables are keyed by Devanagari and are
//! the last resort of the cross-script converter.

use super::romanized::Pairs;

#[rustfmt::skip]
pub static TAMIL_TO_DEVANAGARI: Pairs = &[
    // vowels
    ("அ", "अ"), ("ஆ", "आ"), ("இ", "इ"), ("ஈ", "ई"), ("உ", "उ"), ("ஊ", "ऊ"),
    ("எ", "ए"), ("ஏ", "ए"), ("ஐ", "ऐ"), ("ஒ", "ओ"), ("ஓ", "ओ"), ("ஔ", "औ"),
    ("ஃ", "ः"),
    // consonants
    ("க", "क"), ("ங", "ङ"), ("ச", "च"), ("ஞ", "ञ"), ("ட", "ट"), ("ண", "ण"),
    ("த", "त"), ("ந", "न"), ("ப", "प"), ("ம", "म"), ("ய", "य"), ("ர", "र"),
    ("ல", "ल"), ("வ", "व"), ("ழ", "ऴ"), ("ள", "ळ"), ("ற", "\u{0931}"), ("ன", "न"),
    ("ஸ", "स"), ("ஶ", "श"), ("ஷ", "ष"), ("ஜ", "ज"), ("ஹ", "ह"),
    // vowel signs
    ("ா", "ा"), ("ி", "ि"), ("ீ", "ी"), ("ு", "ु"), ("ூ", "ू"), ("ெ", "े"),
    ("ே", "े"), ("ை", "ै"), ("ொ", "ो"), ("ோ", "ो"), ("ௌ", "ौ"), ("்", "्"),
    // common syllables
    ("கா", "का"), ("கி", "कि"), ("கீ", "की"), ("கு", "कु"), ("கூ", "कू"),
    ("தா", "ता"), ("தி", "ति"), ("தீ", "ती"), ("து", "तु"), ("தூ", "तू"),
    ("நா", "ना"), ("நி", "नि"), ("நீ", "नी"), ("நு", "नु"), ("நூ", "नू"),
    ("மா", "मा"), ("மி", "मि"), ("மீ", "मी"), ("மு", "मु"), ("மூ", "मू"),
    ("வா", "वा"), ("வி", "वि"), ("வீ", "वी"), ("வு", "वु"), ("வூ", "वू"),
    ("கே", "के"), ("கை", "कै"), ("கோ", "को"), ("கௌ", "कौ"),
    ("தே", "ते"), ("தை", "तै"), ("தோ", "तो"), ("தௌ", "तौ"),
    ("நே", "ने"), ("நை", "नै"), ("நோ", "नो"), ("நௌ", "नौ"),
    ("மே", "मे"), ("மை", "मै"), ("மோ", "मो"), ("மௌ", "मौ"),
    ("வே", "वे"), ("வை", "वै"), ("வோ", "वो"), ("வௌ", "वौ"),
    // digits
    ("௦", "०"), ("௧", "१"), ("௨", "२"), ("௩", "३"), ("௪", "४"),
    ("௫", "५"), ("௬", "६"), ("௭", "७"), ("௮", "८"), ("௯", "९"),
];

#[rustfmt::skip]
pub static PHONETIC_TAMIL: Pairs = &[
    ("क", "க"), ("ख", "க"), ("ग", "க"), ("घ", "க"), ("ङ", "ங"),
    ("च", "ச"), ("छ", "ச"), ("ज", "ஜ"), ("झ", "ஜ"), ("ञ", "ஞ"),
    ("ट", "ட"), ("ठ", "ட"), ("ड", "ட"), ("ढ", "ட"), ("ण", "ண"),
    ("त", "த"), ("थ", "த"), ("द", "த"), ("ध", "த"), ("न", "ந"),
    ("प", "ப"), ("फ", "ப"), ("ब", "ப"), ("भ", "ப"), ("म", "ம"),
    ("य", "ய"), ("र", "ர"), ("\u{0931}", "ற"), ("ल", "ல"), ("ळ", "ள"),
    ("\u{0934}", "ழ"), ("व", "வ"), ("\u{095B}", "ஜ"),
    ("श", "ஶ"), ("ष", "ஷ"), ("स", "ஸ"), ("ह", "ஹ"),
    ("अ", "அ"), ("आ", "ஆ"), ("इ", "இ"), ("ई", "ஈ"), ("उ", "உ"), ("ऊ", "ஊ"),
    ("ए", "ஏ"), ("ऐ", "ஐ"), ("ओ", "ஓ"), ("औ", "ஔ"),
    ("ा", "ா"), ("ि", "ி"), ("ी", "ீ"), ("ु", "ு"), ("ू", "ூ"), ("े", "ே"),
    ("ै", "ை"), ("ो", "ோ"), ("ौ", "ௌ"), ("्", "்"),
];

#[rustfmt::skip]
pub static PHONETIC_MALAYALAM: Pairs = &[
    ("क", "ക"), ("ख", "ഖ"), ("ग", "ഗ"), ("घ", "ഘ"), ("ङ", "ങ"),
    ("च", "ച"), ("छ", "ഛ"), ("ज", "ജ"), ("झ", "ഝ"), ("ञ", "ഞ"),
    ("ट", "ട"), ("ठ", "ഠ"), ("ड", "ഡ"), ("ढ", "ഢ"), ("ण", "ണ"),
    ("त", "ത"), ("थ", "ഥ"), ("द", "ദ"), ("ध", "ധ"), ("न", "ന"),
    ("प", "പ"), ("फ", "ഫ"), ("ब", "ബ"), ("भ", "ഭ"), ("म", "മ"),
    ("य", "യ"), ("र", "ര"), ("\u{0931}", "റ"), ("ल", "ല"), ("ळ", "ള"),
    ("\u{0934}", "ഴ"), ("व", "വ"), ("\u{095B}", "ജ"),
    ("श", "ശ"), ("ष", "ഷ"), ("स", "സ"), ("ह", "ഹ"),
    ("अ", "അ"), ("आ", "ആ"), ("इ", "ഇ"), ("ई", "ഈ"), ("उ", "ഉ"), ("ऊ", "ഊ"),
    ("ऋ", "ഋ"), ("ए", "ഏ"), ("ऐ", "ഐ"), ("ओ", "ഓ"), ("औ", "ഔ"),
    ("ा", "ാ"), ("ि", "ി"), ("ी", "ീ"), ("ु", "ു"), ("ू", "ൂ"), ("ृ", "ൃ"),
    ("े", "േ"), ("ै", "ൈ"), ("ो", "ോ"), ("ौ", "ൌ"), ("्", "്"), ("ं", "ം"),
];

#[rustfmt::skip]
pub static PHONETIC_GURMUKHI: Pairs = &[
    ("क", "ਕ"), ("ख", "ਖ"), ("ग", "ਗ"), ("घ", "ਘ"), ("ङ", "ਙ"),
    ("च", "ਚ"), ("छ", "ਛ"), ("ज", "ਜ"), ("झ", "ਝ"), ("ञ", "ਞ"),
    ("ट", "ਟ"), ("ठ", "ਠ"), ("ड", "ਡ"), ("ढ", "ਢ"), ("ण", "ਣ"),
    ("त", "ਤ"), ("थ", "ਥ"), ("द", "ਦ"), ("ध", "ਧ"), ("न", "ਨ"),
    ("प", "ਪ"), ("फ", "ਫ"), ("ब", "ਬ"), ("भ", "ਭ"), ("म", "ਮ"),
    ("य", "ਯ"), ("र", "ਰ"), ("\u{0931}", "ੜ"), ("ल", "ਲ"), ("ळ", "\u{0A33}"),
    ("\u{0934}", "\u{0A33}"), ("व", "ਵ"), ("\u{095B}", "\u{0A5B}"),
    ("श", "\u{0A36}"), ("ष", "\u{0A36}"), ("स", "ਸ"), ("ह", "ਹ"),
    ("अ", "ਅ"), ("आ", "ਆ"), ("इ", "ਇ"), ("ई", "ਈ"), ("उ", "ਉ"), ("ऊ", "ਊ"),
    ("ए", "ਏ"), ("ऐ", "ਐ"), ("ओ", "ਓ"), ("औ", "ਔ"),
    ("ा", "ਾ"), ("ि", "ਿ"), ("ी", "ੀ"), ("ु", "ੁ"), ("ू", "ੂ"), ("े", "ੇ"),
    ("ै", "ੈ"), ("ो", "ੋ"), ("ौ", "ੌ"), ("्", "੍"), ("ं", "ਂ"),
];
