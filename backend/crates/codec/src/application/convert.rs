//! Convert Use Case

use crate::domain::action::ConversionAction;
use crate::error::CodecResult;
use platform::crypto::{decode_base64_text, to_base64};

#[derive(Debug, Clone)]
pub struct ConvertInput {
    pub action: ConversionAction,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct ConvertOutput {
    pub result: String,
}

#[derive(Debug, Default)]
pub struct ConvertUseCase;

impl ConvertUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, input: ConvertInput) -> CodecResult<ConvertOutput> {
        let result = match input.action {
            ConversionAction::Encode => to_base64(input.text.as_bytes()),
            ConversionAction::Decode => decode_base64_text(&input.text)?,
        };

        tracing::debug!(
            action = input.action.as_str(),
            input_len = input.text.len(),
            output_len = result.len(),
            "Converted payload"
        );

        Ok(ConvertOutput { result })
    }
}
