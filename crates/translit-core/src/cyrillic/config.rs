use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct TableConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key must be a single character: {0:?}")]
    MultiCharKey(String),
}

/// Parse TOML text into a sorted `BTreeMap<source char, replacement>`.
///
/// Empty replacements are allowed; they drop the character from the output.
pub fn parse_table_toml(toml_str: &str) -> Result<BTreeMap<char, String>, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(TableError::Empty);
    }

    let mut table = BTreeMap::new();
    for (key, value) in config.mappings {
        let mut chars = key.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(TableError::MultiCharKey(key)),
        };
        table.insert(c, value);
    }

    Ok(table)
}
