//! serena-cli library root.
//!
//! Re-exports the config and backend modules so integration tests can
//! exercise them without going through the terminal prompts.

pub mod backend;
pub mod config;
