//! Whole-word vocabulary: greetings and place names
//!
//! Consulted only when an entire lower-cased input word matches.

use super::romanized::Pairs;

#[rustfmt::skip]
pub static DEVANAGARI_WORDS: Pairs = &[
    ("hello", "हैलो"), ("namaste", "नमस्ते"), ("namaskar", "नमस्कार"),
    ("dhanyawad", "धन्यवाद"), ("dhanyavad", "धन्यवाद"), ("please", "कृपया"),
    ("water", "पानी"), ("food", "खाना"), ("help", "सहायता"),
    ("mumbai", "मुंबई"), ("delhi", "दिल्ली"), ("bangalore", "बंगलोर"),
    ("hyderabad", "हैदराबाद"), ("chennai", "चेन्नै"), ("kolkata", "कोलकाता"),
    ("ahmedabad", "अहमदाबाद"), ("pune", "पुणे"), ("surat", "सूरत"),
    ("jaipur", "जयपुर"), ("lucknow", "लखनऊ"), ("kanpur", "कानपुर"),
    ("nagpur", "नागपुर"), ("indore", "इंदौर"), ("thane", "ठाणे"),
    ("bhopal", "भोपाल"), ("visakhapatnam", "विशाखापत्तनम"), ("pimpri", "पिंपरी"),
    ("patna", "पटना"), ("vadodara", "वडोदरा"), ("ghaziabad", "गाज़ियाबाद"),
    ("ludhiana", "लुधियाना"), ("agra", "आगरा"), ("nashik", "नासिक"),
    ("faridabad", "फरीदाबाद"), ("meerut", "मेरठ"), ("rajkot", "राजकोट"),
];

#[rustfmt::skip]
pub static TAMIL_WORDS: Pairs = &[
    ("hello", "வணக்கம்"), ("vanakkam", "வணக்கம்"), ("nandri", "நன்றி"),
    ("chennai", "சென்னை"), ("madurai", "மதுரை"), ("coimbatore", "கோயம்புத்தூர்"),
    ("salem", "சேலம்"), ("tirupur", "திருப்பூர்"), ("erode", "ஈரோடு"),
    ("vellore", "வேலூர்"), ("thoothukudi", "தூத்துக்குடி"), ("dindigul", "திண்டுக்கல்"),
    ("thanjavur", "தஞ்சாவூர்"), ("tirunelveli", "திருநெல்வேலி"), ("karur", "கரூர்"),
];

#[rustfmt::skip]
pub static MALAYALAM_WORDS: Pairs = &[
    ("hello", "നമസ്കാരം"), ("namaskaram", "നമസ്കാരം"), ("nanni", "നന്ദി"),
    ("kochi", "കൊച്ചി"), ("thiruvananthapuram", "തിരുവനന്തപുരം"), ("kozhikode", "കോഴിക്കോട്"),
    ("kollam", "കൊല്ലം"), ("thrissur", "തൃശൂർ"), ("alappuzha", "ആലപ്പുഴ"),
    ("kannur", "കണ്ണൂർ"), ("kottayam", "കോട്ടയം"), ("palakkad", "പാലക്കാട്"),
];

#[rustfmt::skip]
pub static GURMUKHI_WORDS: Pairs = &[
    ("hello", "ਸਤ ਸ੍ਰੀ ਅਕਾਲ"), ("dhanwad", "ਧੰਨਵਾਦ"),
    ("amritsar", "ਅੰਮ੍ਰਿਤਸਰ"), ("ludhiana", "ਲੁਧਿਆਣਾ"), ("jalandhar", "ਜਲੰਧਰ"),
    ("patiala", "ਪਟਿਆਲਾ"), ("bathinda", "ਬਠਿੰਡਾ"), ("mohali", "ਮੋਹਾਲੀ"),
    ("pathankot", "ਪਠਾਨਕੋਟ"), ("hoshiarpur", "ਹੁਸ਼ਿਆਰਪੁਰ"), ("moga", "ਮੋਗਾ"),
];
