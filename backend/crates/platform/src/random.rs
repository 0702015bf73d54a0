//! Random Sampling
//!
//! Uniform, independent per-character sampling from an alphabet. The thread
//! RNG is fine here: generated strings are convenience output, not key
//! material.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Draw `len` characters independently and uniformly from `alphabet`.
///
/// Returns `None` when the alphabet is empty.
pub fn sample_string<R>(rng: &mut R, alphabet: &[char], len: usize) -> Option<String>
where
    R: Rng + ?Sized,
{
    if alphabet.is_empty() {
        return None;
    }
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        // non-empty, checked above
        out.push(*alphabet.choose(rng)?);
    }
    Some(out)
}
