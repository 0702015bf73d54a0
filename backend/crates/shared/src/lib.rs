//! Shared Kernel - Cross-feature minimal core
//!
//! This crate holds the vocabulary every feature crate agrees on:
//! - The unified error type and its classification
//! - Typed identifiers for ephemeral resources (uploads)
//!
//! Feature crates keep their own error enums and classify them with
//! [`error::kind::ErrorKind`].

pub mod error {
    pub mod app_error;
    pub mod kind;
    pub mod response;
}
pub mod id;
