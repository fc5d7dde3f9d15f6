//! serena-session
//!
//! The single in-memory session: which questionnaire is open, whether a
//! report is being generated, and the report or error that came back.

pub mod error;
pub mod machine;
pub mod state;

pub use machine::{ExportTarget, Session};
pub use state::{GENERATION_FAILED_MESSAGE, NAME_REQUIRED_MESSAGE, SessionState, StateKind};
