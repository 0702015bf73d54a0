//! Infrastructure Layer

pub mod rules_dir;
pub mod temp_store;
pub mod yara_engine;
