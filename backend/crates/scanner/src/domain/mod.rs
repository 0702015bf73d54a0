//! Domain Layer
//!
//! - Entities (UploadedFile, RuleMatch, ScanReport)
//! - Value objects (UploadName)
//! - Repository traits (UploadStore, SignatureEngine, RuleCatalog)

pub mod entities;
pub mod repository;
pub mod value_objects;
