//! Shared domain types, errors, and upload helpers for the MD Publicidades API.

pub mod error;
pub mod types;
pub mod uploads;
