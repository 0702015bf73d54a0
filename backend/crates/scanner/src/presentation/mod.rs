//! Presentation Layer

pub mod handlers;
pub mod multipart;
pub mod pages;
pub mod router;
