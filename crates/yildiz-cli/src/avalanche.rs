//! Avalanche-effect diagnostic built on the public encrypt contract.

use yildiz_core::{Mode, YildizCipher};

/// Ratio (in percent) above which the avalanche effect is reported as strong.
pub const STRONG_THRESHOLD: f64 = 40.0;

/// Outcome of one avalanche comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct AvalancheReport {
    pub original: String,
    pub modified: String,
    pub first: String,
    pub second: String,
    pub differing: usize,
    pub total: usize,
}

impl AvalancheReport {
    /// Share of differing hex characters, in percent.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.differing as f64 / self.total as f64 * 100.0
    }

    pub fn is_strong(&self) -> bool {
        self.ratio() > STRONG_THRESHOLD
    }
}

/// Flips the lowest bit of the last character. Empty text becomes `"a"`.
pub fn flip_last_char(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    match chars.last_mut() {
        Some(last) => {
            // Surrogates sit on an even boundary, so flipping bit 0 of a valid
            // scalar value always yields another valid one.
            *last = char::from_u32(*last as u32 ^ 1).unwrap_or(*last);
            chars.into_iter().collect()
        }
        None => "a".to_owned(),
    }
}

/// Counts positions where two hex strings differ, over the shorter length.
pub fn hex_diff(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count()
}

/// Encrypts `text` and its one-bit variant and compares the outputs.
pub fn analyze(cipher: &YildizCipher, text: &str, mode: Mode) -> AvalancheReport {
    let modified = flip_last_char(text);
    let first = cipher.encrypt(text, mode);
    let second = cipher.encrypt(&modified, mode);
    let differing = hex_diff(&first, &second);
    let total = first.len();
    AvalancheReport {
        original: text.to_owned(),
        modified,
        first,
        second,
        differing,
        total,
    }
}
