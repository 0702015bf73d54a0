//! Application Layer - Use Cases

pub mod convert;
