pub(super) const DEFAULT_TOML: &str = include_str!("default_table.toml");
