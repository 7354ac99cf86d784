use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::debug;

use super::config::parse_table_toml;
use super::table::DEFAULT_TOML;

/// Read-only lookup from a source character to its Latin replacement.
#[derive(Debug)]
pub struct CharacterMap {
    entries: BTreeMap<char, String>,
}

impl CharacterMap {
    /// Get or initialize the global table. It is built once from the
    /// embedded TOML and never changes afterwards.
    pub fn global() -> &'static CharacterMap {
        static INSTANCE: OnceLock<CharacterMap> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            // build.rs already checked the syntax; this checks the shape.
            let entries =
                parse_table_toml(DEFAULT_TOML).expect("cyrillic table TOML must be valid");
            debug!(entries = entries.len(), "character map initialized");
            CharacterMap { entries }
        })
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(String::as_str)
    }

    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in source-character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.entries.iter().map(|(c, s)| (*c, s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letters() {
        let map = CharacterMap::global();
        assert_eq!(map.get('А'), Some("A"));
        assert_eq!(map.get('п'), Some("p"));
        assert_eq!(map.get('Х'), Some("X"));
    }

    #[test]
    fn test_digraphs_keep_case() {
        let map = CharacterMap::global();
        assert_eq!(map.get('Ш'), Some("Sh"));
        assert_eq!(map.get('ш'), Some("sh"));
        assert_eq!(map.get('Щ'), Some("Shh"));
        assert_eq!(map.get('ю'), Some("yu"));
    }

    #[test]
    fn test_signs_map_to_empty() {
        let map = CharacterMap::global();
        for c in ['Ъ', 'ъ', 'Ь', 'ь'] {
            assert_eq!(map.get(c), Some(""), "sign {c} should be elided");
        }
    }

    #[test]
    fn test_space_maps_to_underscore() {
        assert_eq!(CharacterMap::global().get(' '), Some("_"));
    }

    #[test]
    fn test_unknown_chars() {
        let map = CharacterMap::global();
        assert_eq!(map.get('a'), None);
        assert_eq!(map.get('\t'), None);
        // Ukrainian letters are outside the table
        assert!(!map.contains('ї'));
        assert!(!map.contains('Є'));
    }

    #[test]
    fn test_every_cyrillic_letter_has_both_cases() {
        let map = CharacterMap::global();
        for (c, _) in map.iter().filter(|(c, _)| c.is_uppercase()) {
            let lower = c.to_lowercase().next().unwrap();
            assert!(map.contains(lower), "missing lowercase for {c}");
        }
    }

    #[test]
    fn test_replacement_lengths() {
        let map = CharacterMap::global();
        assert_eq!(map.len(), 67);
        assert!(!map.is_empty());
        for (c, latin) in map.iter() {
            assert!(latin.chars().count() <= 3, "{c} -> {latin} too long");
            assert!(latin.is_ascii(), "{c} -> {latin} is not ASCII");
        }
    }

    #[test]
    fn test_iter_sorted() {
        let keys: Vec<char> = CharacterMap::global().iter().map(|(c, _)| c).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }
}
