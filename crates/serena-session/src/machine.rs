//! Session transitions.
//!
//! ```text
//! Form ──submit──▶ Loading ──ok──▶ Report
//!   ▲                 │
//!   │                 └──failed──▶ Error
//!   └────────────── reset ◀──────── (any)
//! ```
//!
//! `submit` is accepted only from `Form`, so at most one request is ever
//! outstanding. `select_topic` is accepted only from `Form`.

use tracing::{debug, info, warn};
use uuid::Uuid;

use serena_core::models::form::FormData;
use serena_core::models::request::ReportRequest;
use serena_core::models::topic::Topic;
use serena_core::sanitize::sanitize;
use serena_genai::client::{ReportClient, ReportResult};
use serena_genai::prompt::build_prompt;

use crate::error::SessionError;
use crate::state::{GENERATION_FAILED_MESSAGE, NAME_REQUIRED_MESSAGE, SessionState};

/// What an export needs from the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    pub topic: Topic,
    pub user_name: String,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn topic(&self) -> Topic {
        self.state.topic()
    }

    /// A questionnaire for the current topic with every answer at its default.
    pub fn blank_form(&self) -> FormData {
        FormData::defaults(self.topic())
    }

    /// Switch the open questionnaire. Only allowed while in `Form`.
    pub fn select_topic(&mut self, topic: Topic) -> Result<(), SessionError> {
        match &self.state {
            SessionState::Form { .. } => {
                debug!(topic = %topic, "topic selected");
                self.state = SessionState::Form {
                    topic,
                    validation_error: None,
                };
                Ok(())
            }
            other => Err(SessionError::InvalidTransition {
                action: "change topic",
                state: other.kind(),
            }),
        }
    }

    /// Submit a filled questionnaire and enter `Loading`.
    ///
    /// A blank name keeps the session in `Form` with the validation message
    /// set. The returned request must be handed back to [`Session::complete`]
    /// together with its outcome.
    pub fn submit(&mut self, form: FormData) -> Result<ReportRequest, SessionError> {
        let current = match &self.state {
            SessionState::Form { topic, .. } => *topic,
            other => {
                warn!(state = %other.kind(), "submission ignored, not in form state");
                return Err(SessionError::InvalidTransition {
                    action: "submit",
                    state: other.kind(),
                });
            }
        };

        if form.topic() != current {
            return Err(SessionError::TopicMismatch {
                current,
                form: form.topic(),
            });
        }

        let Ok(request) = ReportRequest::new(form) else {
            debug!(topic = %current, "submission blocked, name missing");
            self.state = SessionState::Form {
                topic: current,
                validation_error: Some(NAME_REQUIRED_MESSAGE.to_string()),
            };
            return Err(SessionError::Validation(NAME_REQUIRED_MESSAGE.to_string()));
        };

        info!(request_id = %request.id(), topic = %current, "report requested");
        self.state = SessionState::Loading {
            request_id: request.id(),
            topic: current,
            user_name: request.user_name().to_string(),
        };
        Ok(request)
    }

    /// Resolve the outstanding request.
    ///
    /// Report text is sanitized before it is stored. Any failure becomes the
    /// fixed generic message; the cause was already logged by the client.
    pub fn complete(&mut self, request_id: Uuid, result: ReportResult) -> Result<(), SessionError> {
        let (topic, user_name) = match &self.state {
            SessionState::Loading {
                request_id: outstanding,
                topic,
                user_name,
            } if *outstanding == request_id => (*topic, user_name.clone()),
            SessionState::Loading { .. } => return Err(SessionError::StaleCompletion(request_id)),
            other => {
                return Err(SessionError::InvalidTransition {
                    action: "complete a request",
                    state: other.kind(),
                });
            }
        };

        self.state = match result {
            Ok(raw) => {
                if raw.is_empty() {
                    debug!(request_id = %request_id, "generation returned no text");
                }
                let content = sanitize(&raw);
                info!(request_id = %request_id, content_len = content.len(), "report ready");
                SessionState::Report {
                    topic,
                    user_name,
                    content,
                }
            }
            Err(_) => {
                info!(request_id = %request_id, "report generation failed");
                SessionState::Error {
                    topic,
                    message: GENERATION_FAILED_MESSAGE.to_string(),
                }
            }
        };
        Ok(())
    }

    /// Return to an empty questionnaire on the default topic, from any state.
    pub fn reset(&mut self) {
        debug!(from = %self.state.kind(), "session reset");
        self.state = SessionState::initial();
    }

    /// The report to export, if there is one.
    ///
    /// Outside `Report`, or with an empty user name, there is nothing to
    /// export and this quietly returns `None`.
    pub fn export_target(&self) -> Option<ExportTarget> {
        match &self.state {
            SessionState::Report {
                topic,
                user_name,
                content,
            } if !user_name.is_empty() => Some(ExportTarget {
                topic: *topic,
                user_name: user_name.clone(),
                content: content.clone(),
            }),
            other => {
                debug!(state = %other.kind(), "nothing to export");
                None
            }
        }
    }

    /// Submit `form`, wait for the report, and settle in `Report` or `Error`.
    ///
    /// Returns an error only when the submission itself is rejected; a
    /// failed generation is a normal transition to `Error`.
    pub async fn generate<C: ReportClient>(
        &mut self,
        client: &C,
        form: FormData,
    ) -> Result<&SessionState, SessionError> {
        let request = self.submit(form)?;
        let prompt = build_prompt(&request);
        let result = client.generate(&prompt).await;
        self.complete(request.id(), result)?;
        Ok(&self.state)
    }
}
