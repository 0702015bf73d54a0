//! Application Configuration

use crate::domain::value_objects::{Complexity, PasswordLength};

/// Password generator configuration
///
/// Defaults apply when a request omits the field.
#[derive(Debug, Clone)]
pub struct PassgenConfig {
    pub default_length: PasswordLength,
    pub default_complexity: Complexity,
}

impl Default for PassgenConfig {
    fn default() -> Self {
        Self {
            default_length: PasswordLength::DEFAULT,
            default_complexity: Complexity::Medium,
        }
    }
}
