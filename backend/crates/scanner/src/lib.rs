//! Signature Scanner Module
//!
//! Clean Architecture structure:
//! - `domain/` - Uploads, match reports, engine/store/catalog traits
//! - `application/` - Use cases (check upload, test rule, list rules)
//! - `infra/` - libyara engine, temp-directory upload store, rules directory
//! - `presentation/` - Multipart handlers, HTML pages, router
//!
//! ## Workflows
//! - **check**: one upload, scanned against the aggregate rule file from the
//!   rules directory. Saved under the client's file name (final path
//!   component only), removed after matching.
//! - **test-rule**: a rule upload and a target upload, both saved under
//!   random names and both removed whatever the outcome.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::ScannerConfig;
pub use error::{ScannerError, ScannerResult};
pub use infra::{rules_dir::FsRuleCatalog, temp_store::TempUploadStore, yara_engine::YaraEngine};
pub use presentation::router::{scanner_router, scanner_router_generic};

#[cfg(test)]
mod tests;
