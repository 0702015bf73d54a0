//! Domain Services - character set assembly

use crate::domain::value_objects::{Complexity, ExcludeSet};

pub const ASCII_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const ASCII_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// All 32 printable ASCII punctuation characters
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Build the character set for a tier.
///
/// Exclusions only apply to punctuation, and only at [`Complexity::High`].
pub fn charset(complexity: Complexity, exclude: &ExcludeSet) -> Vec<char> {
    match complexity {
        Complexity::Low => ASCII_LOWERCASE.chars().collect(),
        Complexity::Medium => ASCII_LOWERCASE
            .chars()
            .chain(ASCII_UPPERCASE.chars())
            .chain(DIGITS.chars())
            .collect(),
        Complexity::High => ASCII_LOWERCASE
            .chars()
            .chain(ASCII_UPPERCASE.chars())
            .chain(DIGITS.chars())
            .chain(PUNCTUATION.chars().filter(|c| !exclude.contains(*c)))
            .collect(),
    }
}
