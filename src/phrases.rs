//! Tourist phrasebook
//!
//! Meaning-based translations of common traveller phrases. Unlike the
//! transliterators this is a plain lookup: an English phrase either has an
//! entry or it does not.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::core::script::Script;

const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Greetings,
    Directions,
    Food,
    Shopping,
    Emergency,
    Numbers,
    Transport,
    Accommodation,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Greetings,
        Category::Directions,
        Category::Food,
        Category::Shopping,
        Category::Emergency,
        Category::Numbers,
        Category::Transport,
        Category::Accommodation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Greetings => "greetings",
            Category::Directions => "directions",
            Category::Food => "food",
            Category::Shopping => "shopping",
            Category::Emergency => "emergency",
            Category::Numbers => "numbers",
            Category::Transport => "transport",
            Category::Accommodation => "accommodation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("unknown phrase category: {}", s))
    }
}

/// One phrase and its rendering in every script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseEntry {
    pub english: &'static str,
    pub devanagari: &'static str,
    pub tamil: &'static str,
    pub malayalam: &'static str,
    pub gurmukhi: &'static str,
    pub meaning: &'static str,
    pub category: Category,
}

impl PhraseEntry {
    pub fn get(&self, script: Script) -> &'static str {
        match script {
            Script::Devanagari => self.devanagari,
            Script::Tamil => self.tamil,
            Script::Malayalam => self.malayalam,
            Script::Gurmukhi => self.gurmukhi,
        }
    }
}

macro_rules! phrase {
    ($en:literal, $cat:ident, $meaning:literal, [$dev:literal, $ta:literal, $ml:literal, $pa:literal]) => {
        PhraseEntry {
            english: $en,
            devanagari: $dev,
            tamil: $ta,
            malayalam: $ml,
            gurmukhi: $pa,
            meaning: $meaning,
            category: Category::$cat,
        }
    };
}

#[rustfmt::skip]
pub static PHRASES: &[PhraseEntry] = &[
    // greetings
    phrase!("hello", Greetings, "Traditional greeting",
        ["नमस्ते", "வணக்கம்", "നമസ്കാരം", "ਸਤ ਸ੍ਰੀ ਅਕਾਲ"]),
    phrase!("goodbye", Greetings, "Farewell",
        ["अलविदा", "போய் வருகிறேன்", "വിട", "ਅਲਵਿਦਾ"]),
    phrase!("thank you", Greetings, "Expression of gratitude",
        ["धन्यवाद", "நன்றி", "നന്ദി", "ਧੰਨਵਾਦ"]),
    phrase!("please", Greetings, "Polite request",
        ["कृपया", "தயவு செய்து", "ദയവായി", "ਕਿਰਪਾ ਕਰਕੇ"]),
    phrase!("excuse me", Greetings, "Polite attention getter",
        ["माफ़ करिये", "மன்னிக்கவும்", "ക്ഷമിക്കണം", "ਮਾਫ਼ ਕਰਨਾ"]),
    phrase!("i don't speak hindi", Greetings, "Cannot speak Hindi",
        ["मैं हिंदी नहीं बोलता", "எனக்கு இந்தி தெரியாது", "എനിക്ക് ഹിന്ദി അറിയില്ല", "ਮੈਂ ਹਿੰਦੀ ਨਹੀਂ ਬੋਲਦਾ"]),
    phrase!("i don't speak tamil", Greetings, "Cannot speak Tamil",
        ["मैं तमिल नहीं बोलता", "எனக்கு தமிழ் தெரியாது", "എനിക്ക് തമിഴ് അറിയില്ല", "ਮੈਂ ਤਮਿਲ ਨਹੀਂ ਬੋਲਦਾ"]),
    phrase!("i don't speak malayalam", Greetings, "Cannot speak Malayalam",
        ["मैं मलयालम नहीं बोलता", "எனக்கு மலையாளம் தெரியாது", "എനിക്ക് മലയാളം അറിയില്ല", "ਮੈਂ ਮਲਯਾਲਮ ਨਹੀਂ ਬੋਲਦਾ"]),
    phrase!("do you speak english", Greetings, "Question about English ability",
        ["क्या आप अंग्रेजी बोलते हैं?", "நீங்கள் ஆங்கிலம் பேசுவீர்களா?", "നിങ്ങൾ ഇംഗ്ലീഷ് സംസാരിക്കുമോ?", "ਕੀ ਤੁਸੀਂ ਅੰਗਰੇਜ਼ੀ ਬੋਲਦੇ ਹੋ?"]),
    phrase!("i am a tourist", Greetings, "Identifying as tourist",
        ["मैं एक पर्यटक हूँ", "நான் ஒரு சுற்றுலா பயணி", "ഞാൻ ഒരു വിനോദസഞ്ചാരി ആണ്", "ਮੈਂ ਇੱਕ ਸੈਲਾਨੀ ਹਾਂ"]),
    phrase!("can you help me", Greetings, "Request for assistance",
        ["क्या आप मेरी मदद कर सकते हैं?", "நீங்கள் எனக்கு உதவ முடியுமா?", "നിങ്ങൾക്ക് എന്നെ സഹായിക്കാമോ?", "ਕੀ ਤੁਸੀਂ ਮੇਰੀ ਮਦਦ ਕਰ ਸਕਦੇ ਹੋ?"]),
    phrase!("beautiful place", Greetings, "Compliment about location",
        ["सुंदर जगह", "அழகான இடம்", "സുന്ദരമായ സ്ഥലം", "ਸੁੰਦਰ ਜਗ੍ਹਾ"]),
    phrase!("thank you for your help", Greetings, "Gratitude for assistance",
        ["आपकी मदद के लिए धन्यवाद", "உங்கள் உதவிக்கு நன்றி", "നിങ്ങളുടെ സഹായത്തിന് നന്ദി", "ਤੁਹਾਡੀ ਮਦਦ ਲਈ ਧੰਨਵਾਦ"]),

    // directions
    phrase!("where is", Directions, "Question about location",
        ["कहाँ है", "எங்கே இருக்கிறது", "എവിടെയാണ്", "ਕਿੱਥੇ ਹੈ"]),
    phrase!("railway station", Directions, "Train station",
        ["रेलवे स्टेशन", "ரயில் நிலையம்", "റെയിൽവേ സ്റ്റേഷൻ", "ਰੇਲਵੇ ਸਟੇਸ਼ਨ"]),
    phrase!("airport", Directions, "Airport",
        ["हवाई अड्डा", "விமான நிலையம்", "വിമാനത്താവളം", "ਹਵਾਈ ਅੱਡਾ"]),
    phrase!("where is the bathroom", Directions, "Asking for restroom location",
        ["शौचालय कहाँ है?", "கழிவறை எங்கே?", "കുളിമുറി എവിടെ?", "ਗੁਸਲਖਾਨਾ ਕਿੱਥੇ ਹੈ?"]),
    phrase!("i am lost", Directions, "Lost/need directions",
        ["मैं रास्ता भूल गया हूँ", "நான் வழி தெரியாமல் இருக்கிறேன்", "ഞാൻ വഴിതെറ്റി", "ਮੈਂ ਰਸਤਾ ਭੁੱਲ ਗਿਆ ਹਾਂ"]),

    // food
    phrase!("food", Food, "Food/meal",
        ["खाना", "உணவு", "ഭക്ഷണം", "ਖਾਣਾ"]),
    phrase!("water", Food, "Water",
        ["पानी", "தண்ணீர்", "വെള്ളം", "ਪਾਣੀ"]),
    phrase!("restaurant", Food, "Dining establishment",
        ["रेस्टोरेंट", "உணவகம்", "റെസ്റ്റോറന്റ്", "ਰੈਸਟੋਰੈਂਟ"]),
    phrase!("spicy", Food, "Hot/spicy taste",
        ["मसालेदार", "காரமான", "കാരമുള്ള", "ਤਿੱਖਾ"]),
    phrase!("vegetarian", Food, "No meat diet",
        ["शाकाहारी", "சைவம்", "സസ്യാഹാരി", "ਸ਼ਾਕਾਹਾਰੀ"]),
    phrase!("where can i find a good restaurant", Food, "Looking for restaurant recommendation",
        ["अच्छा रेस्टोरेंट कहाँ मिलेगा?", "நல்ல உணவகம் எங்கே கிடைக்கும்?", "നല്ല റെസ്റ്റോറന്റ് എവിടെ കിട്ടും?", "ਚੰਗਾ ਰੈਸਟੋਰੈਂਟ ਕਿੱਥੇ ਮਿਲੇਗਾ?"]),
    phrase!("is this vegetarian", Food, "Asking if food is vegetarian",
        ["क्या यह शाकाहारी है?", "இது சைவமா?", "ഇത് വെജിറ്റേറിയൻ ആണോ?", "ਕੀ ਇਹ ਸ਼ਾਕਾਹਾਰੀ ਹੈ?"]),
    phrase!("not too spicy please", Food, "Requesting mild spice level",
        ["कृपया बहुत तीखा नहीं", "தயவு செய்து அதிக காரம் வேண்டாம்", "ദയവായി അധികം കാരം വേണ്ട", "ਕਿਰਪਾ ਕਰਕੇ ਬਹੁਤ ਤਿੱਖਾ ਨਹੀਂ"]),
    phrase!("this is delicious", Food, "Complimenting food taste",
        ["यह स्वादिष्ट है", "இது சுவையாக இருக்கிறது", "ഇത് രുചികരമാണ്", "ਇਹ ਸੁਆਦੀ ਹੈ"]),

    // shopping
    phrase!("how much", Shopping, "Price inquiry",
        ["कितना", "எவ்வளவு", "എത്ര", "ਕਿੰਨਾ"]),
    phrase!("expensive", Shopping, "High cost",
        ["महंगा", "விலை அதிகம்", "വില കൂടുതൽ", "ਮਹਿੰਗਾ"]),
    phrase!("cheap", Shopping, "Low cost",
        ["सस्ता", "மலிவு", "വില കുറവ്", "ਸਸਤਾ"]),
    phrase!("market", Shopping, "Shopping area",
        ["बाज़ार", "சந்தை", "ചന്ത", "ਬਜ਼ਾਰ"]),
    phrase!("where can i buy souvenirs", Shopping, "Looking for souvenir shops",
        ["स्मृति चिन्ह कहाँ से खरीद सकता हूँ?", "நினைவு பரிசுகள் எங்கே வாங்கலாம்?", "സുവനീറുകൾ എവിടെ നിന്ന് വാങ്ങാം?", "ਯਾਦਗਾਰ ਕਿੱਥੋਂ ਖਰੀਦ ਸਕਦਾ ਹਾਂ?"]),

    // numbers
    phrase!("one", Numbers, "Number 1", ["एक", "ஒன்று", "ഒന്ന്", "ਇੱਕ"]),
    phrase!("two", Numbers, "Number 2", ["दो", "இரண்டு", "രണ്ട്", "ਦੋ"]),
    phrase!("three", Numbers, "Number 3", ["तीन", "மூன்று", "മൂന്ന്", "ਤਿੰਨ"]),
    phrase!("five", Numbers, "Number 5", ["पांच", "ஐந்து", "അഞ്ച്", "ਪੰਜ"]),
    phrase!("ten", Numbers, "Number 10", ["दस", "பத்து", "പത്ത്", "ਦਸ"]),

    // emergency
    phrase!("help", Emergency, "Assistance needed",
        ["मदद", "உதவி", "സഹായം", "ਮਦਦ"]),
    phrase!("police", Emergency, "Law enforcement",
        ["पुलिस", "காவல்துறை", "പൊലീസ്", "ਪੁਲਿਸ"]),
    phrase!("emergency", Emergency, "Urgent situation",
        ["आपातकाल", "அவசரநிலை", "അടിയന്തിരസ്ഥിതി", "ਐਮਰਜੈਂਸੀ"]),
    phrase!("hospital", Emergency, "Medical facility",
        ["अस्पताल", "மருத்துவமனை", "ആശുപത്രി", "ਹਸਪਤਾਲ"]),

    // transport
    phrase!("taxi", Transport, "Hired car",
        ["टैक्सी", "டாக்ஸி", "ടാക്സി", "ਟੈਕਸੀ"]),
    phrase!("bus", Transport, "Public transport",
        ["बस", "பேருந்து", "ബസ്", "ਬੱਸ"]),
    phrase!("auto rickshaw", Transport, "Three-wheeler",
        ["ऑटो रिक्शा", "ஆட்டோ ரிக்ஷா", "ഓട്ടോ റിക്ഷ", "ਆਟੋ ਰਿਕਸ਼ਾ"]),

    // accommodation
    phrase!("hotel", Accommodation, "Accommodation",
        ["होटल", "விடுதி", "ഹോട്ടൽ", "ਹੋਟਲ"]),
];

/// Alternate spellings that resolve to an entry
#[rustfmt::skip]
static VARIATIONS: &[(&str, &str)] = &[
    ("i don't speak hindi/tamil/malayalam", "i don't speak hindi"),
    ("i don't speak hindi/tamil", "i don't speak hindi"),
    ("don't speak hindi", "i don't speak hindi"),
    ("don't speak tamil", "i don't speak tamil"),
    ("don't speak malayalam", "i don't speak malayalam"),
    ("where is bathroom", "where is the bathroom"),
    ("where is the restroom", "where is the bathroom"),
    ("how much does this cost", "how much"),
    ("thanks", "thank you"),
];

static INDEX: LazyLock<HashMap<&'static str, &'static PhraseEntry>> =
    LazyLock::new(|| PHRASES.iter().map(|p| (p.english, p)).collect());

/// Lower-case, trim and drop a trailing question mark
fn normalize(phrase: &str) -> String {
    phrase
        .trim()
        .trim_end_matches('?')
        .trim_end()
        .to_lowercase()
}

/// Categories that have at least one phrase, in display order
pub fn categories() -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|c| PHRASES.iter().any(|p| p.category == *c))
        .collect()
}

pub fn phrases_in(category: Category) -> Vec<&'static PhraseEntry> {
    PHRASES.iter().filter(|p| p.category == category).collect()
}

/// Exact (case-insensitive) lookup, including known variations
pub fn translations(phrase: &str) -> Option<&'static PhraseEntry> {
    let key = normalize(phrase);
    if let Some(entry) = INDEX.get(key.as_str()) {
        return Some(*entry);
    }
    VARIATIONS
        .iter()
        .find(|(alias, _)| *alias == key)
        .and_then(|(_, canonical)| INDEX.get(canonical).copied())
}

/// Lookup with a loose fallback: the first entry whose phrase contains the
/// query or is contained in it.
pub fn translate(phrase: &str, script: Script) -> Option<&'static str> {
    if let Some(entry) = translations(phrase) {
        return Some(entry.get(script));
    }
    let key = normalize(phrase);
    if key.is_empty() {
        return None;
    }
    PHRASES
        .iter()
        .find(|p| p.english.contains(key.as_str()) || key.contains(p.english))
        .map(|p| p.get(script))
}

/// Phrases starting with `partial`, at most five, phrasebook order
pub fn suggestions(partial: &str) -> Vec<&'static str> {
    let prefix = partial.trim_start().to_lowercase();
    if prefix.is_empty() {
        return Vec::new();
    }
    PHRASES
        .iter()
        .map(|p| p.english)
        .filter(|e| e.starts_with(prefix.as_str()))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Phrases whose text or category name contains `query`
pub fn search(query: &str) -> Vec<&'static PhraseEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    PHRASES
        .iter()
        .filter(|p| p.english.contains(query.as_str()) || p.category.as_str().contains(query.as_str()))
        .collect()
}

pub fn is_translatable(phrase: &str) -> bool {
    translations(phrase).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unique_phrases() {
        let mut seen = HashSet::new();
        for p in PHRASES {
            assert!(seen.insert(p.english), "duplicate phrase {}", p.english);
            assert_eq!(p.english, p.english.to_lowercase());
        }
        for (alias, canonical) in VARIATIONS {
            assert!(INDEX.contains_key(canonical), "{} points nowhere", alias);
        }
    }

    #[test]
    fn test_translations_case_insensitive() {
        let entry = translations("Thank You").unwrap();
        assert_eq!(entry.get(Script::Devanagari), "धन्यवाद");
        assert_eq!(entry.get(Script::Tamil), "நன்றி");
        assert_eq!(entry.category, Category::Greetings);

        let entry = translations("  Do you speak English?  ").unwrap();
        assert_eq!(entry.english, "do you speak english");
    }

    #[test]
    fn test_variations() {
        let entry = translations("Where is the restroom?").unwrap();
        assert_eq!(entry.english, "where is the bathroom");
        assert!(is_translatable("thanks"));
        assert!(!is_translatable("quantum physics"));
    }

    #[test]
    fn test_translate_loose_match() {
        assert_eq!(translate("call a taxi", Script::Malayalam), Some("ടാക്സി"));
        assert_eq!(translate("water", Script::Gurmukhi), Some("ਪਾਣੀ"));
        assert_eq!(translate("zzz", Script::Tamil), None);
        assert_eq!(translate("", Script::Tamil), None);
    }

    #[test]
    fn test_categories() {
        let cats = categories();
        assert_eq!(cats.first(), Some(&Category::Greetings));
        assert!(cats.contains(&Category::Transport));
        assert!(phrases_in(Category::Emergency)
            .iter()
            .any(|p| p.english == "police"));
        assert_eq!("FOOD".parse::<Category>(), Ok(Category::Food));
        assert!("weather".parse::<Category>().is_err());
    }

    #[test]
    fn test_suggestions() {
        let found = suggestions("i ");
        assert!(found.len() <= 5);
        assert_eq!(found.first(), Some(&"i don't speak hindi"));
        assert!(found.iter().all(|s| s.starts_with("i ")));
        assert_eq!(suggestions("wh"), vec!["where is", "where is the bathroom", "where can i find a good restaurant", "where can i buy souvenirs"]);
        assert!(suggestions("").is_empty());
    }

    #[test]
    fn test_search() {
        assert!(search("shopping").iter().any(|p| p.english == "market"));
        assert!(search("bus").iter().any(|p| p.english == "bus"));
        assert!(search(" ").is_empty());
    }
}
