//! Base64 Codec Module
//!
//! - `domain/` - Conversion action
//! - `application/` - Convert use case
//! - `presentation/` - HTTP handlers, DTOs, page, router
//!
//! Text in, text out: encode takes the UTF-8 bytes of the payload, decode
//! must yield valid UTF-8. No binary payloads, no streaming.

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

pub use error::{CodecError, CodecResult};
pub use presentation::router::codec_router;
