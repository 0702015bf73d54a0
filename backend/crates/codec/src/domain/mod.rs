//! Domain Layer

pub mod action;
