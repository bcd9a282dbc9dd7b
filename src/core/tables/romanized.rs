//! Romanized <-> native syllable data
//!
//! One romanization is shared by every table: dental `ta/tha/da/dha/na`,
//! retroflex `tta/ttha/dda/ddha/nna`, long vowels `aa/ii/uu` (with `ee`/`oo`
//! as aliases), and `ae`/`oa` for the long e/o that only the southern
//! scripts distinguish. Bare consonant keys map to consonant + virama.

pub type Pairs = &'static [(&'static str, &'static str)];

// Romanized -> Devanagari

#[rustfmt::skip]
pub static TO_DEVANAGARI: Pairs = &[
    // vowels
    ("a", "अ"), ("aa", "आ"), ("i", "इ"), ("ii", "ई"), ("ee", "ई"), ("u", "उ"),
    ("uu", "ऊ"), ("oo", "ऊ"), ("ri", "ऋ"), ("e", "ए"), ("ae", "ए"), ("ai", "ऐ"),
    ("o", "ओ"), ("oa", "ओ"), ("au", "औ"),
    // consonant syllables
    ("ka", "क"), ("kha", "ख"), ("ga", "ग"), ("gha", "घ"), ("nga", "ङ"),
    ("cha", "च"), ("chha", "छ"), ("ja", "ज"), ("jha", "झ"), ("nya", "ञ"),
    ("tta", "ट"), ("ttha", "ठ"), ("dda", "ड"), ("ddha", "ढ"), ("nna", "ण"),
    ("ta", "त"), ("tha", "थ"), ("da", "द"), ("dha", "ध"), ("na", "न"),
    ("pa", "प"), ("pha", "फ"), ("fa", "फ"), ("ba", "ब"), ("bha", "भ"), ("ma", "म"),
    ("ya", "य"), ("ra", "र"), ("rra", "\u{0931}"), ("la", "ल"), ("lla", "ळ"),
    ("zha", "\u{0934}"), ("va", "व"), ("wa", "व"), ("za", "\u{095B}"),
    ("sha", "श"), ("shha", "ष"), ("sa", "स"), ("ha", "ह"),
    // conjuncts
    ("ksha", "क्ष"), ("ksh", "क्ष्"), ("tra", "त्र"), ("tr", "त्र्"), ("gya", "ज्ञ"), ("gy", "ज्ञ्"),
    // bare consonants
    ("k", "क्"), ("kh", "ख्"), ("g", "ग्"), ("gh", "घ्"), ("ch", "च्"), ("chh", "छ्"),
    ("j", "ज्"), ("jh", "झ्"), ("tt", "ट्"), ("tth", "ठ्"), ("dd", "ड्"), ("ddh", "ढ्"),
    ("t", "त्"), ("th", "थ्"), ("d", "द्"), ("dh", "ध्"), ("n", "न्"), ("p", "प्"),
    ("ph", "फ्"), ("f", "फ्"), ("b", "ब्"), ("bh", "भ्"), ("m", "म्"), ("y", "य्"),
    ("r", "र्"), ("l", "ल्"), ("v", "व्"), ("w", "व्"), ("sh", "श्"), ("s", "स्"),
    ("h", "ह्"), ("ng", "ङ्"), ("ny", "ञ्"), ("nn", "ण्"), ("shh", "ष्"), ("ll", "ळ्"),
    ("rr", "\u{0931}्"), ("zh", "\u{0934}्"), ("z", "\u{095B}्"),
    // digits
    ("0", "०"), ("1", "१"), ("2", "२"), ("3", "३"), ("4", "४"),
    ("5", "५"), ("6", "६"), ("7", "७"), ("8", "८"), ("9", "९"),
];

/// Romanized vowel -> Devanagari dependent sign
#[rustfmt::skip]
pub static DEVANAGARI_SIGNS: Pairs = &[
    ("a", ""), ("aa", "ा"), ("i", "ि"), ("ii", "ी"), ("ee", "ी"), ("u", "ु"),
    ("uu", "ू"), ("oo", "ू"), ("ri", "ृ"), ("e", "े"), ("ae", "े"), ("ai", "ै"),
    ("o", "ो"), ("oa", "ो"), ("au", "ौ"),
];

// Romanized -> Tamil

#[rustfmt::skip]
pub static TO_TAMIL: Pairs = &[
    ("a", "அ"), ("aa", "ஆ"), ("i", "இ"), ("ii", "ஈ"), ("ee", "ஈ"), ("u", "உ"),
    ("uu", "ஊ"), ("oo", "ஊ"), ("e", "எ"), ("ae", "ஏ"), ("ai", "ஐ"), ("o", "ஒ"),
    ("oa", "ஓ"), ("au", "ஔ"),
    ("ka", "க"), ("kha", "க"), ("ga", "க"), ("gha", "க"), ("nga", "ங"),
    ("cha", "ச"), ("chha", "ச"), ("ja", "ஜ"), ("jha", "ஜ"), ("nya", "ஞ"),
    ("tta", "ட"), ("ttha", "ட"), ("dda", "ட"), ("ddha", "ட"), ("nna", "ண"),
    ("ta", "த"), ("tha", "த"), ("da", "த"), ("dha", "த"), ("na", "ந"),
    ("pa", "ப"), ("pha", "ப"), ("fa", "ப"), ("ba", "ப"), ("bha", "ப"), ("ma", "ம"),
    ("ya", "ய"), ("ra", "ர"), ("rra", "ற"), ("la", "ல"), ("lla", "ள"), ("zha", "ழ"),
    ("va", "வ"), ("wa", "வ"), ("sha", "ஶ"), ("shha", "ஷ"), ("ssa", "ஷ"), ("sa", "ஸ"),
    ("ha", "ஹ"), ("za", "ஜ"),
    ("k", "க்"), ("kh", "க்"), ("g", "க்"), ("gh", "க்"), ("ng", "ங்"), ("ch", "ச்"),
    ("j", "ஜ்"), ("tt", "ட்"), ("dd", "ட்"), ("t", "த்"), ("th", "த்"), ("d", "த்"),
    ("dh", "த்"), ("n", "ன்"), ("nn", "ண்"), ("p", "ப்"), ("ph", "ப்"), ("f", "ப்"),
    ("b", "ப்"), ("bh", "ப்"), ("m", "ம்"), ("y", "ய்"), ("r", "ர்"), ("rr", "ற்"),
    ("l", "ல்"), ("ll", "ள்"), ("zh", "ழ்"), ("v", "வ்"), ("w", "வ்"), ("sh", "ஶ்"),
    ("s", "ஸ்"), ("h", "ஹ்"), ("z", "ஜ்"),
    ("0", "௦"), ("1", "௧"), ("2", "௨"), ("3", "௩"), ("4", "௪"),
    ("5", "௫"), ("6", "௬"), ("7", "௭"), ("8", "௮"), ("9", "௯"),
];

#[rustfmt::skip]
pub static TAMIL_SIGNS: Pairs = &[
    ("a", ""), ("aa", "ா"), ("i", "ி"), ("ii", "ீ"), ("ee", "ீ"), ("u", "ு"),
    ("uu", "ூ"), ("oo", "ூ"), ("e", "ெ"), ("ae", "ே"), ("ai", "ை"), ("o", "ொ"),
    ("oa", "ோ"), ("au", "ௌ"),
];

// Romanized -> Malayalam

#[rustfmt::skip]
pub static TO_MALAYALAM: Pairs = &[
    ("a", "അ"), ("aa", "ആ"), ("i", "ഇ"), ("ii", "ഈ"), ("ee", "ഈ"), ("u", "ഉ"),
    ("uu", "ഊ"), ("oo", "ഊ"), ("ri", "ഋ"), ("e", "എ"), ("ae", "ഏ"), ("ai", "ഐ"),
    ("o", "ഒ"), ("oa", "ഓ"), ("au", "ഔ"),
    ("ka", "ക"), ("kha", "ഖ"), ("ga", "ഗ"), ("gha", "ഘ"), ("nga", "ങ"),
    ("cha", "ച"), ("chha", "ഛ"), ("ja", "ജ"), ("jha", "ഝ"), ("nya", "ഞ"),
    ("tta", "ട"), ("ttha", "ഠ"), ("dda", "ഡ"), ("ddha", "ഢ"), ("nna", "ണ"),
    ("ta", "ത"), ("tha", "ഥ"), ("da", "ദ"), ("dha", "ധ"), ("na", "ന"),
    ("pa", "പ"), ("pha", "ഫ"), ("fa", "ഫ"), ("ba", "ബ"), ("bha", "ഭ"), ("ma", "മ"),
    ("ya", "യ"), ("ra", "ര"), ("rra", "റ"), ("la", "ല"), ("lla", "ള"), ("zha", "ഴ"),
    ("va", "വ"), ("wa", "വ"), ("sha", "ശ"), ("shha", "ഷ"), ("ssa", "ഷ"), ("sa", "സ"),
    ("ha", "ഹ"), ("za", "ജ"),
    ("k", "ക്"), ("kh", "ഖ്"), ("g", "ഗ്"), ("gh", "ഘ്"), ("ch", "ച്"), ("j", "ജ്"),
    ("tt", "ട്"), ("dd", "ഡ്"), ("t", "ത്"), ("th", "ഥ്"), ("d", "ദ്"), ("dh", "ധ്"),
    ("n", "ന്"), ("nn", "ണ്"), ("p", "പ്"), ("ph", "ഫ്"), ("f", "ഫ്"), ("b", "ബ്"),
    ("bh", "ഭ്"), ("m", "മ്"), ("y", "യ്"), ("r", "ര്"), ("l", "ല്"), ("ll", "ള്"),
    ("zh", "ഴ്"), ("v", "വ്"), ("w", "വ്"), ("sh", "ശ്"), ("s", "സ്"), ("h", "ഹ്"),
    ("rr", "റ്"), ("z", "ജ്"),
    ("0", "൦"), ("1", "൧"), ("2", "൨"), ("3", "൩"), ("4", "൪"),
    ("5", "൫"), ("6", "൬"), ("7", "൭"), ("8", "൮"), ("9", "൯"),
];

#[rustfmt::skip]
pub static MALAYALAM_SIGNS: Pairs = &[
    ("a", ""), ("aa", "ാ"), ("i", "ി"), ("ii", "ീ"), ("ee", "ീ"), ("u", "ു"),
    ("uu", "ൂ"), ("oo", "ൂ"), ("ri", "ൃ"), ("e", "െ"), ("ae", "േ"), ("ai", "ൈ"),
    ("o", "ൊ"), ("oa", "ോ"), ("au", "ൌ"),
];

// Romanized -> Gurmukhi

#[rustfmt::skip]
pub static TO_GURMUKHI: Pairs = &[
    ("a", "ਅ"), ("aa", "ਆ"), ("i", "ਇ"), ("ii", "ਈ"), ("ee", "ਈ"), ("u", "ਉ"),
    ("uu", "ਊ"), ("oo", "ਊ"), ("e", "ਏ"), ("ae", "ਏ"), ("ai", "ਐ"), ("o", "ਓ"),
    ("oa", "ਓ"), ("au", "ਔ"),
    ("ka", "ਕ"), ("kha", "ਖ"), ("ga", "ਗ"), ("gha", "ਘ"), ("nga", "ਙ"),
    ("cha", "ਚ"), ("chha", "ਛ"), ("ja", "ਜ"), ("jha", "ਝ"), ("nya", "ਞ"),
    ("tta", "ਟ"), ("ttha", "ਠ"), ("dda", "ਡ"), ("ddha", "ਢ"), ("nna", "ਣ"),
    ("ta", "ਤ"), ("tha", "ਥ"), ("da", "ਦ"), ("dha", "ਧ"), ("na", "ਨ"),
    ("pa", "ਪ"), ("pha", "ਫ"), ("fa", "ਫ"), ("ba", "ਬ"), ("bha", "ਭ"), ("ma", "ਮ"),
    ("ya", "ਯ"), ("ra", "ਰ"), ("rra", "ੜ"), ("la", "ਲ"), ("lla", "\u{0A33}"),
    ("zha", "\u{0A33}"), ("va", "ਵ"), ("wa", "ਵ"), ("za", "\u{0A5B}"),
    ("sha", "\u{0A36}"), ("shha", "\u{0A36}"), ("sa", "ਸ"), ("ha", "ਹ"),
    ("k", "ਕ੍"), ("kh", "ਖ੍"), ("g", "ਗ੍"), ("gh", "ਘ੍"), ("ch", "ਚ੍"), ("j", "ਜ੍"),
    ("tt", "ਟ੍"), ("dd", "ਡ੍"), ("t", "ਤ੍"), ("th", "ਥ੍"), ("d", "ਦ੍"), ("dh", "ਧ੍"),
    ("n", "ਨ੍"), ("p", "ਪ੍"), ("ph", "ਫ੍"), ("f", "ਫ੍"), ("b", "ਬ੍"), ("bh", "ਭ੍"),
    ("m", "ਮ੍"), ("y", "ਯ੍"), ("r", "ਰ੍"), ("l", "ਲ੍"), ("v", "ਵ੍"), ("w", "ਵ੍"),
    ("sh", "\u{0A36}੍"), ("s", "ਸ੍"), ("h", "ਹ੍"), ("ng", "ਙ੍"), ("ny", "ਞ੍"),
    ("nn", "ਣ੍"), ("shh", "\u{0A36}੍"), ("ll", "\u{0A33}੍"), ("rr", "ੜ੍"),
    ("zh", "\u{0A33}੍"), ("z", "\u{0A5B}੍"),
    ("0", "੦"), ("1", "੧"), ("2", "੨"), ("3", "੩"), ("4", "੪"),
    ("5", "੫"), ("6", "੬"), ("7", "੭"), ("8", "੮"), ("9", "੯"),
];

#[rustfmt::skip]
pub static GURMUKHI_SIGNS: Pairs = &[
    ("a", ""), ("aa", "ਾ"), ("i", "ਿ"), ("ii", "ੀ"), ("ee", "ੀ"), ("u", "ੁ"),
    ("uu", "ੂ"), ("oo", "ੂ"), ("e", "ੇ"), ("ae", "ੇ"), ("ai", "ੈ"), ("o", "ੋ"),
    ("oa", "ੋ"), ("au", "ੌ"),
];

// Native -> romanized

#[rustfmt::skip]
pub static FROM_DEVANAGARI: Pairs = &[
    ("अ", "a"), ("आ", "aa"), ("इ", "i"), ("ई", "ee"), ("उ", "u"), ("ऊ", "oo"),
    ("ऋ", "ri"), ("ए", "e"), ("ऐ", "ai"), ("ओ", "o"), ("औ", "au"),
    ("क", "ka"), ("ख", "kha"), ("ग", "ga"), ("घ", "gha"), ("ङ", "nga"),
    ("च", "cha"), ("छ", "chha"), ("ज", "ja"), ("झ", "jha"), ("ञ", "nya"),
    ("ट", "tta"), ("ठ", "ttha"), ("ड", "dda"), ("ढ", "ddha"), ("ण", "nna"),
    ("त", "ta"), ("थ", "tha"), ("द", "da"), ("ध", "dha"), ("न", "na"),
    ("प", "pa"), ("फ", "pha"), ("ब", "ba"), ("भ", "bha"), ("म", "ma"),
    ("य", "ya"), ("र", "ra"), ("\u{0931}", "rra"), ("ल", "la"), ("ळ", "lla"),
    ("\u{0934}", "zha"), ("व", "va"), ("\u{095B}", "za"),
    ("श", "sha"), ("ष", "shha"), ("स", "sa"), ("ह", "ha"),
    ("क्ष", "ksha"), ("त्र", "tra"), ("ज्ञ", "gya"),
    ("ा", "aa"), ("ि", "i"), ("ी", "ee"), ("ु", "u"), ("ू", "oo"), ("ृ", "ri"),
    ("े", "e"), ("ै", "ai"), ("ो", "o"), ("ौ", "au"), ("्", ""),
    ("ं", "n"), ("ँ", "n"), ("ः", "h"), ("़", ""),
    ("।", "."), ("॥", ".."),
    ("०", "0"), ("१", "1"), ("२", "2"), ("३", "3"), ("४", "4"),
    ("५", "5"), ("६", "6"), ("७", "7"), ("८", "8"), ("९", "9"),
];

#[rustfmt::skip]
pub static FROM_TAMIL: Pairs = &[
    ("அ", "a"), ("ஆ", "aa"), ("இ", "i"), ("ஈ", "ee"), ("உ", "u"), ("ஊ", "oo"),
    ("எ", "e"), ("ஏ", "ae"), ("ஐ", "ai"), ("ஒ", "o"), ("ஓ", "oa"), ("ஔ", "au"),
    ("ஃ", "h"),
    ("க", "ka"), ("ங", "nga"), ("ச", "cha"), ("ஞ", "nya"), ("ட", "tta"),
    ("ண", "nna"), ("த", "ta"), ("ந", "na"), ("ப", "pa"), ("ம", "ma"),
    ("ய", "ya"), ("ர", "ra"), ("ல", "la"), ("வ", "va"), ("ழ", "zha"),
    ("ள", "lla"), ("ற", "rra"), ("ன", "na"), ("ஜ", "ja"), ("ஶ", "sha"),
    ("ஷ", "shha"), ("ஸ", "sa"), ("ஹ", "ha"),
    ("க்ஷ", "ksha"),
    ("ா", "aa"), ("ி", "i"), ("ீ", "ee"), ("ு", "u"), ("ூ", "oo"), ("ெ", "e"),
    ("ே", "ae"), ("ை", "ai"), ("ொ", "o"), ("ோ", "oa"), ("ௌ", "au"), ("்", ""),
    ("௦", "0"), ("௧", "1"), ("௨", "2"), ("௩", "3"), ("௪", "4"),
    ("௫", "5"), ("௬", "6"), ("௭", "7"), ("௮", "8"), ("௯", "9"),
];

#[rustfmt::skip]
pub static FROM_MALAYALAM: Pairs = &[
    ("അ", "a"), ("ആ", "aa"), ("ഇ", "i"), ("ഈ", "ee"), ("ഉ", "u"), ("ഊ", "oo"),
    ("ഋ", "ri"), ("എ", "e"), ("ഏ", "ae"), ("ഐ", "ai"), ("ഒ", "o"), ("ഓ", "oa"),
    ("ഔ", "au"),
    ("ക", "ka"), ("ഖ", "kha"), ("ഗ", "ga"), ("ഘ", "gha"), ("ങ", "nga"),
    ("ച", "cha"), ("ഛ", "chha"), ("ജ", "ja"), ("ഝ", "jha"), ("ഞ", "nya"),
    ("ട", "tta"), ("ഠ", "ttha"), ("ഡ", "dda"), ("ഢ", "ddha"), ("ണ", "nna"),
    ("ത", "ta"), ("ഥ", "tha"), ("ദ", "da"), ("ധ", "dha"), ("ന", "na"),
    ("പ", "pa"), ("ഫ", "pha"), ("ബ", "ba"), ("ഭ", "bha"), ("മ", "ma"),
    ("യ", "ya"), ("ര", "ra"), ("റ", "rra"), ("ല", "la"), ("ള", "lla"),
    ("ഴ", "zha"), ("വ", "va"), ("ശ", "sha"), ("ഷ", "shha"), ("സ", "sa"),
    ("ഹ", "ha"),
    ("ാ", "aa"), ("ി", "i"), ("ീ", "ee"), ("ു", "u"), ("ൂ", "oo"), ("ൃ", "ri"),
    ("െ", "e"), ("േ", "ae"), ("ൈ", "ai"), ("ൊ", "o"), ("ോ", "oa"), ("ൌ", "au"),
    ("്", ""), ("ം", "m"), ("ഃ", "h"),
    ("ൺ", "nn"), ("ൻ", "n"), ("ർ", "r"), ("ൽ", "l"), ("ൾ", "ll"), ("ൿ", "k"),
    ("൦", "0"), ("൧", "1"), ("൨", "2"), ("൩", "3"), ("൪", "4"),
    ("൫", "5"), ("൬", "6"), ("൭", "7"), ("൮", "8"), ("൯", "9"),
];

#[rustfmt::skip]
pub static FROM_GURMUKHI: Pairs = &[
    ("ਅ", "a"), ("ਆ", "aa"), ("ਇ", "i"), ("ਈ", "ee"), ("ਉ", "u"), ("ਊ", "oo"),
    ("ਏ", "e"), ("ਐ", "ai"), ("ਓ", "o"), ("ਔ", "au"),
    ("ਕ", "ka"), ("ਖ", "kha"), ("ਗ", "ga"), ("ਘ", "gha"), ("ਙ", "nga"),
    ("ਚ", "cha"), ("ਛ", "chha"), ("ਜ", "ja"), ("ਝ", "jha"), ("ਞ", "nya"),
    ("ਟ", "tta"), ("ਠ", "ttha"), ("ਡ", "dda"), ("ਢ", "ddha"), ("ਣ", "nna"),
    ("ਤ", "ta"), ("ਥ", "tha"), ("ਦ", "da"), ("ਧ", "dha"), ("ਨ", "na"),
    ("ਪ", "pa"), ("ਫ", "pha"), ("ਬ", "ba"), ("ਭ", "bha"), ("ਮ", "ma"),
    ("ਯ", "ya"), ("ਰ", "ra"), ("ਲ", "la"), ("\u{0A33}", "lla"), ("ਵ", "va"),
    ("ੜ", "rra"),
    ("\u{0A36}", "sha"), ("ਸ\u{0A3C}", "sha"), ("ਸ", "sa"), ("ਹ", "ha"),
    ("\u{0A5B}", "za"), ("\u{0A5E}", "fa"),
    ("ਾ", "aa"), ("ਿ", "i"), ("ੀ", "ee"), ("ੁ", "u"), ("ੂ", "oo"), ("ੇ", "e"),
    ("ੈ", "ai"), ("ੋ", "o"), ("ੌ", "au"), ("੍", ""),
    ("ਂ", "n"), ("ੰ", "n"), ("ੱ", ""), ("਼", ""),
    ("੦", "0"), ("੧", "1"), ("੨", "2"), ("੩", "3"), ("੪", "4"),
    ("੫", "5"), ("੬", "6"), ("੭", "7"), ("੮", "8"), ("੯", "9"),
];
