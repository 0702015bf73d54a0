//! Domain Value Objects

use std::collections::BTreeSet;

use crate::error::{PassgenError, PassgenResult};

/// Requested password length, always within [`PasswordLength::MIN`, `PasswordLength::MAX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordLength(usize);

impl PasswordLength {
    pub const MIN: usize = 4;
    pub const MAX: usize = 128;
    pub const DEFAULT: PasswordLength = PasswordLength(12);

    pub fn new(value: i64) -> PassgenResult<Self> {
        let value = usize::try_from(value).map_err(|_| PassgenError::InvalidLength)?;
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PassgenError::InvalidLength)
        }
    }

    /// Length sent as a fractional number; truncated toward zero
    pub fn from_fraction(value: f64) -> PassgenResult<Self> {
        if !value.is_finite() {
            return Err(PassgenError::InvalidLength);
        }
        Self::new(value.trunc() as i64)
    }

    /// Parse a length sent as text, e.g. `"16"` from a form field.
    pub fn parse(text: &str) -> PassgenResult<Self> {
        let value: i64 = text
            .trim()
            .parse()
            .map_err(|_| PassgenError::InvalidLength)?;
        Self::new(value)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for PasswordLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complexity tier: selects which character classes are eligible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Complexity {
    /// lowercase letters
    Low,
    /// letters and digits
    #[default]
    Medium,
    /// letters, digits and punctuation minus exclusions
    High,
}

impl Complexity {
    /// Unknown tier names fall through to `High`.
    pub fn parse(name: &str) -> Self {
        match name {
            "low" => Complexity::Low,
            "medium" => Complexity::Medium,
            _ => Complexity::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

/// Characters to drop from the punctuation class at high complexity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeSet(BTreeSet<char>);

impl ExcludeSet {
    /// From a list of entries. Only single-character entries can ever
    /// match a character, so longer entries are ignored.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = entries
            .into_iter()
            .filter_map(|entry| {
                let mut chars = entry.as_ref().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            })
            .collect();
        Self(set)
    }

    /// From a plain string: every character in it is excluded.
    pub fn from_text(text: &str) -> Self {
        Self(text.chars().collect())
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}
