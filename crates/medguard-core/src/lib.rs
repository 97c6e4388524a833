//! medguard-core
//!
//! Pure domain types for the de-identification pipeline and the text
//! helpers shared between stages. No network or model dependency.

pub mod models;
pub mod text;
