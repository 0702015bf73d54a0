//! Domain Layer
//!
//! - Value objects (PasswordLength, Complexity, ExcludeSet)
//! - Domain services (character set assembly)

pub mod services;
pub mod value_objects;
