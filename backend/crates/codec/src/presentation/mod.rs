//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod pages;
pub mod router;
