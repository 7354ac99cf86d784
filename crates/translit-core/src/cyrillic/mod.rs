//! Cyrillic-to-Latin transliteration.
//!
//! A fixed table maps each Cyrillic letter (and the space) to a Latin
//! replacement of zero to three characters. Anything outside the table is
//! passed through unchanged.

mod config;
mod convert;
mod map;
mod table;

#[cfg(test)]
mod proptest_convert;

pub use config::{parse_table_toml, TableError};
pub use convert::transliterate;
pub use map::CharacterMap;

/// Returns the embedded mapping table TOML.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}

/// Check the Cyrillic block (U+0400..U+04FF).
pub fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cyrillic() {
        assert!(is_cyrillic('Ж'));
        assert!(is_cyrillic('ё'));
        assert!(is_cyrillic('Ѣ'));
        assert!(!is_cyrillic('z'));
        assert!(!is_cyrillic(' '));
        assert!(!is_cyrillic('あ'));
    }

    #[test]
    fn test_default_toml_is_exported() {
        assert!(default_toml().contains("[mappings]"));
    }
}
