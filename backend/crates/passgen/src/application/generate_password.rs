//! Generate Password Use Case

use crate::domain::services::charset;
use crate::domain::value_objects::{Complexity, ExcludeSet, PasswordLength};
use crate::error::{PassgenError, PassgenResult};
use platform::random::sample_string;
use rand::Rng;

/// Input DTO for generate password
#[derive(Debug, Clone)]
pub struct GeneratePasswordInput {
    pub length: PasswordLength,
    pub complexity: Complexity,
    pub exclude: ExcludeSet,
}

/// Output DTO for generate password
#[derive(Debug, Clone)]
pub struct GeneratePasswordOutput {
    pub password: String,
}

/// Generate Password Use Case
///
/// Defaults are resolved before the input is built, so the use case
/// holds no state.
#[derive(Debug, Default)]
pub struct GeneratePasswordUseCase;

impl GeneratePasswordUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, input: GeneratePasswordInput) -> PassgenResult<GeneratePasswordOutput> {
        self.execute_with(&mut rand::rng(), input)
    }

    /// Same as [`Self::execute`] with a caller-supplied RNG
    pub fn execute_with<R>(
        &self,
        rng: &mut R,
        input: GeneratePasswordInput,
    ) -> PassgenResult<GeneratePasswordOutput>
    where
        R: Rng + ?Sized,
    {
        let chars = charset(input.complexity, &input.exclude);
        let password =
            sample_string(rng, &chars, input.length.get()).ok_or(PassgenError::EmptyCharset)?;

        tracing::info!(
            length = input.length.get(),
            complexity = input.complexity.as_str(),
            charset_size = chars.len(),
            "Generated password"
        );

        Ok(GeneratePasswordOutput { password })
    }
}
