use std::fs;
use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;
use translit_core::motion::{parse_motion_events, replay};
use translit_core::nav_icon::nav_icon;
use translit_core::random::generate_random_text;
use translit_core::settings::settings;

use crate::die;

pub fn random(
    length: usize,
    space_probability: Option<f64>,
    seed: Option<u64>,
    out: &mut impl Write,
) -> io::Result<()> {
    let cfg = &settings().random;
    let p = space_probability.unwrap_or(cfg.space_probability);
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let text = die!(
        generate_random_text(&mut rng, length, p, &cfg.alphabet),
        "Error: {}"
    );
    writeln!(out, "{text}")
}

pub fn nav_icon_cmd(id: &str, span_count: Option<usize>, out: &mut impl Write) -> io::Result<()> {
    let count = span_count.unwrap_or(settings().nav_icon.span_count);
    let html = die!(nav_icon(id, count), "Error: {}");
    writeln!(out, "{html}")
}

pub fn motion(file: &str, interval_ms: Option<u64>, out: &mut impl Write) -> io::Result<()> {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let events = die!(parse_motion_events(&content), "Error in {file}: {}");
    let interval = interval_ms.unwrap_or(settings().motion.interval_ms);
    let reports = die!(replay(&events, interval), "Error: {}");
    for report in &reports {
        writeln!(out, "{report}")?;
    }
    Ok(())
}
