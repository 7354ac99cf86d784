//! Random filler text made of ASCII symbols and spaces.

use rand::Rng;

use crate::settings::settings;

#[derive(Debug, thiserror::Error)]
pub enum RandomTextError {
    #[error("space probability must be between 0 and 1, got {0}")]
    InvalidProbability(f64),
    #[error("alphabet is empty")]
    EmptyAlphabet,
}

/// Generate `length` characters. Each position is a space with probability
/// `space_probability`, otherwise a uniformly chosen character of `alphabet`.
pub fn generate_random_text<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    space_probability: f64,
    alphabet: &str,
) -> Result<String, RandomTextError> {
    if !(0.0..=1.0).contains(&space_probability) {
        return Err(RandomTextError::InvalidProbability(space_probability));
    }
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return Err(RandomTextError::EmptyAlphabet);
    }

    let mut text = String::with_capacity(length);
    for _ in 0..length {
        if rng.gen_bool(space_probability) {
            text.push(' ');
        } else {
            text.push(chars[rng.gen_range(0..chars.len())]);
        }
    }
    Ok(text)
}

/// [`generate_random_text`] with the thread RNG and the configured defaults.
pub fn random_text(length: usize) -> Result<String, RandomTextError> {
    let cfg = &settings().random;
    generate_random_text(
        &mut rand::thread_rng(),
        length,
        cfg.space_probability,
        &cfg.alphabet,
    )
}
