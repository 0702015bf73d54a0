//! Password Generator Module
//!
//! Clean Architecture structure:
//! - `domain/` - Value objects (length, complexity tier, exclusions) and charset rules
//! - `application/` - Generate-password use case and configuration
//! - `presentation/` - HTTP handlers, DTOs, page, router
//!
//! Passwords are drawn uniformly and independently per character from the
//! tier's character set. The RNG is the thread-local one; this is a
//! convenience generator, not a key-derivation source.

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

pub use application::config::PassgenConfig;
pub use error::{PassgenError, PassgenResult};
pub use presentation::router::passgen_router;
