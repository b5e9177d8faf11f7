//! Shannon entropy over a string's character distribution
//!
//! Used as a randomness proxy when scoring detections: machine-generated
//! keys sit well above 4 bits/char, while prose and repeated filler sit
//! below 2.

use std::collections::HashMap;

/// Shannon entropy of `value` in bits per character.
///
/// H = -sum(p_i * log2(p_i)) over the relative frequency p_i of each
/// distinct character. Returns 0.0 for strings of length <= 1.
pub fn shannon_entropy(value: &str) -> f64 {
    let len = value.chars().count();
    if len <= 1 {
        return 0.0;
    }

    let mut frequencies: HashMap<char, usize> = HashMap::new();
    for ch in value.chars() {
        *frequencies.entry(ch).or_insert(0) += 1;
    }

    let len = len as f64;
    frequencies
        .values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}
