//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Base64 and SHA-256 helpers
//! - Uniform character sampling for generated secrets
//! - HTML escaping and the shared page layout for server-rendered views

pub mod crypto;
pub mod html;
pub mod random;
