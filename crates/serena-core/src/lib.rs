//! serena-core
//!
//! Pure domain types and text cleanup for wellness reports.
//! No network or filesystem access. This is the shared vocabulary of the
//! Serena system.

pub mod error;
pub mod models;
pub mod sanitize;
