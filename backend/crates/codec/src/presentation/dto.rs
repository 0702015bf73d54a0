//! API DTOs

use serde::{Deserialize, Serialize};

/// Request for POST /base/convert
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertRequest {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub text: String,
}

/// Response for POST /base/convert
#[derive(Debug, Clone, Serialize)]
pub struct ConvertResponse {
    pub result: String,
}
