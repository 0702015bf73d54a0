//! Presentation Layer
//!
//! HTTP handlers, DTOs and the generator page.

pub mod dto;
pub mod handlers;
pub mod pages;
pub mod router;
