//! Conversion Action

use crate::error::{CodecError, CodecResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionAction {
    Encode,
    Decode,
}

impl ConversionAction {
    /// Missing or unknown actions are rejected.
    pub fn parse(name: Option<&str>) -> CodecResult<Self> {
        match name {
            Some("encode") => Ok(ConversionAction::Encode),
            Some("decode") => Ok(ConversionAction::Decode),
            _ => Err(CodecError::InvalidAction),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionAction::Encode => "encode",
            ConversionAction::Decode => "decode",
        }
    }
}
