use thiserror::Error;
use uuid::Uuid;

use serena_core::models::topic::Topic;

use crate::state::StateKind;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The submission was blocked locally; the message is also stored in
    /// the `Form` state.
    #[error("{0}")]
    Validation(String),

    #[error("cannot {action} while in {state} state")]
    InvalidTransition { action: &'static str, state: StateKind },

    #[error("form for topic '{form}' submitted while '{current}' is selected")]
    TopicMismatch { current: Topic, form: Topic },

    #[error("completion for request {0} does not match the outstanding request")]
    StaleCompletion(Uuid),
}
