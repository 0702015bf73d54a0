//! Application Layer - Use Cases

pub mod config;
pub mod generate_password;
