use tracing::debug_span;

use super::map::CharacterMap;

/// Transliterate Cyrillic text to Latin script.
///
/// Each character is looked up in [`CharacterMap`]; mapped characters are
/// replaced (the hard and soft signs with nothing), the space becomes `_`,
/// and every other character is copied as is.
///
/// ```
/// use translit_core::cyrillic::transliterate;
///
/// assert_eq!(transliterate("Привет Мир"), "Privet_Mir");
/// assert_eq!(transliterate(""), "");
/// ```
pub fn transliterate(text: &str) -> String {
    let _span = debug_span!("transliterate", len = text.len()).entered();

    let map = CharacterMap::global();
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match map.get(c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}
