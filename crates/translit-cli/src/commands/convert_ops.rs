use std::io::{self, BufRead, Write};

use tracing::info;
use translit_core::cyrillic::transliterate;
use translit_core::settings::settings;

/// Transliterate the words joined by single spaces.
pub fn convert_args(words: &[String], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", transliterate(&words.join(" ")))
}

/// Transliterate each input line separately.
pub fn convert_lines(input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    for (i, line) in input.lines().enumerate() {
        let line = line.map_err(|e| {
            io::Error::new(e.kind(), format!("reading input line {}: {e}", i + 1))
        })?;
        writeln!(out, "{}", transliterate(&line))?;
    }
    Ok(())
}

/// Transliterate the configured sample and log it.
pub fn demo(out: &mut impl Write) -> io::Result<()> {
    let sample = &settings().demo.sample;
    let latin = transliterate(sample);
    info!(sample = %sample, latin = %latin, "demo");
    writeln!(out, "{latin}")
}
