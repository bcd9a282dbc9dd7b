//! Native script -> romanized

use crate::core::script::{is_consonant, is_dependent_sign, is_nukta, Script};
use crate::core::tables::ScriptTables;

/// Romanize `text` written in `source`.
///
/// A vowel sign or virama that follows a consonant replaces the consonant's
/// inherent `a` (`का` -> `kaa`, `क्` -> `k`). The result is trimmed.
pub fn to_romanized(tables: &ScriptTables, text: &str, source: Script) -> String {
    let table = tables.from_script(source);
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut after_consonant = false;
    let mut i = 0;

    while i < chars.len() {
        let Some(m) = table.longest_match(&chars[i..]) else {
            out.push(chars[i]);
            after_consonant = false;
            i += 1;
            continue;
        };
        i += m.len;

        let starts_with_sign = m.key.chars().next().is_some_and(is_dependent_sign);
        if after_consonant && starts_with_sign && out.ends_with('a') {
            out.pop();
        }
        out.push_str(m.value);

        // a lone nukta leaves the preceding consonant open
        if let Some(last) = m.key.chars().rev().find(|c| !is_nukta(*c)) {
            after_consonant = is_consonant(last);
        }
    }

    out.trim().to_string()
}
