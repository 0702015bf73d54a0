//! Encoding and Digest Utilities

use base64::{
    Engine, alphabet,
    engine::{GeneralPurpose, general_purpose},
};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Failure turning base64 text back into a UTF-8 string
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode bytes as standard, padded base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Standard alphabet, canonical padding, unused trailing bits ignored
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    general_purpose::PAD.with_decode_allow_trailing_bits(true),
);

fn is_base64_symbol(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'+' || b == b'/'
}

/// Keep only alphabet symbols, up to and including the first complete
/// padded group. `=` that cannot close a group is dropped.
fn base64_payload(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pads = 0;

    for b in s.bytes() {
        if b == b'=' {
            let quad = out.len() % 4;
            if quad >= 2 {
                pads += 1;
                if quad + pads >= 4 {
                    out.extend(std::iter::repeat_n('=', pads));
                    break;
                }
            }
        } else if is_base64_symbol(b) {
            out.push(char::from(b));
            pads = 0;
        }
    }

    out
}

/// Decode base64 text into a UTF-8 string.
///
/// Characters outside the alphabet (whitespace, stray punctuation) are
/// skipped and anything after the first padded group is ignored. A final
/// group that is not padded is still an error.
pub fn decode_base64_text(s: &str) -> Result<String, DecodeError> {
    let bytes = LENIENT.decode(base64_payload(s))?;
    Ok(String::from_utf8(bytes)?)
}

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256 as lowercase hex
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}
