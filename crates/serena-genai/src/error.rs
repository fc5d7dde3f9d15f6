use thiserror::Error;

/// Detailed cause of a failed generation call.
///
/// Only ever written to the diagnostic log; callers of
/// [`ReportClient::generate`](crate::client::ReportClient::generate) see
/// [`GenerationFailed`] instead.
#[derive(Debug, Error)]
pub enum GenaiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("authentication rejected: {0}")]
    Authentication(String),

    #[error("service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("client configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for GenaiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GenaiError::ResponseParse(e.to_string())
        } else if e.is_builder() {
            GenaiError::Config(e.to_string())
        } else {
            GenaiError::Transport(e.to_string())
        }
    }
}

/// The only failure a report generation call reports outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("report generation failed")]
pub struct GenerationFailed;

impl GenaiError {
    /// Log the cause and collapse it into [`GenerationFailed`].
    pub fn into_opaque(self, model: &str) -> GenerationFailed {
        tracing::error!(model, error = %self, "report generation call failed");
        GenerationFailed
    }
}
