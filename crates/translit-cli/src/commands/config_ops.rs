use std::fs;
use std::io::{self, Write};

use crate::die;

pub fn table_export(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", translit_core::cyrillic::default_toml())
}

/// Check a mapping table file. The running program keeps its built-in table.
pub fn table_validate(file: &str, out: &mut impl Write) -> io::Result<()> {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(
        translit_core::cyrillic::parse_table_toml(&content),
        "Error: {}"
    );
    let dropped = map.values().filter(|v| v.is_empty()).count();
    writeln!(out, "OK: {} mappings ({} dropped)", map.len(), dropped)
}

pub fn settings_export(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", translit_core::settings::default_toml())
}

pub fn settings_validate(file: &str, out: &mut impl Write) -> io::Result<()> {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        translit_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    writeln!(
        out,
        "OK: random.space_probability={}, nav_icon.span_count={}, motion.interval_ms={}",
        s.random.space_probability, s.nav_icon.span_count, s.motion.interval_ms
    )
}
