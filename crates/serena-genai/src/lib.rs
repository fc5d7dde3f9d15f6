//! serena-genai
//!
//! Prompt construction and report generation against a hosted model.

pub mod bedrock;
pub mod client;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod usage;
