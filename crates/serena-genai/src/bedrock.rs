//! Report generation via the Bedrock Converse API.
//!
//! The prompt goes out as a single user message with no system prompt; the
//! text blocks of the reply are joined into the report. A reply without an
//! output message is a successful, empty report.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message};
use tracing::info;

use crate::client::{ReportClient, ReportResult};
use crate::error::GenaiError;
use crate::usage::TokenCount;

/// Bedrock Converse client bound to one model (or inference profile) ID.
pub struct BedrockClient {
    client: Client,
    model_id: String,
}

impl BedrockClient {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(config),
            model_id: model_id.into(),
        }
    }

    /// Load credentials from the default provider chain for `region`.
    pub async fn from_region(region: impl Into<String>, model_id: impl Into<String>) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.into()))
            .load()
            .await;
        Self::new(&config, model_id)
    }

    /// Perform the call and return the report text, keeping the detailed error.
    pub async fn send(&self, prompt: &str) -> Result<String, GenaiError> {
        info!(model = %self.model_id, prompt_len = prompt.len(), "requesting report from Bedrock");

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| GenaiError::Invocation(e.to_string()))?;

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                if err.is_access_denied_exception() {
                    GenaiError::Authentication(err.to_string())
                } else {
                    GenaiError::Invocation(err.to_string())
                }
            })?;

        if let Some(usage) = response.usage() {
            let tokens = TokenCount {
                input: u64::try_from(usage.input_tokens).unwrap_or_default(),
                output: u64::try_from(usage.output_tokens).unwrap_or_default(),
            };
            info!(
                model = %self.model_id,
                input_tokens = tokens.input,
                output_tokens = tokens.output,
                total_tokens = tokens.total(),
                "Bedrock token usage"
            );
        }

        let text = response
            .output()
            .and_then(|o| o.as_message().ok())
            .map(|message| {
                message
                    .content()
                    .iter()
                    .filter_map(|block| {
                        if let ContentBlock::Text(text) = block {
                            Some(text.as_str())
                        } else {
                            None
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        info!(model = %self.model_id, text_len = text.len(), "Bedrock report received");
        Ok(text)
    }
}

impl ReportClient for BedrockClient {
    fn model(&self) -> &str {
        &self.model_id
    }

    async fn generate(&self, prompt: &str) -> ReportResult {
        self.send(prompt).await.map_err(|e| e.into_opaque(&self.model_id))
    }
}
