//! Application Layer - Use Cases

pub mod check_file;
pub mod config;
pub mod list_rules;
pub mod test_rule;
