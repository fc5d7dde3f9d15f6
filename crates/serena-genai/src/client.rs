use std::future::Future;

use crate::error::GenerationFailed;

/// Outcome of one generation call: the raw report text, or an opaque failure.
///
/// A successful call whose payload carries no text yields `Ok(String::new())`.
pub type ReportResult = Result<String, GenerationFailed>;

/// A hosted model that turns a prompt into report text.
///
/// Each call is exactly one round trip: no retries, no streaming, no
/// partial results. Implementations log the underlying cause of a failure
/// and return [`GenerationFailed`].
pub trait ReportClient: Send + Sync {
    /// Model identifier sent with every request.
    fn model(&self) -> &str;

    fn generate(&self, prompt: &str) -> impl Future<Output = ReportResult> + Send;
}
