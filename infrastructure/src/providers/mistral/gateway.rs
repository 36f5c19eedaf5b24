//! Mistral HTTP gateway

use super::types::{ChatCompletionBody, ChatCompletionResponse, error_message};
use async_trait::async_trait;
use punchline_application::ports::completion_gateway::{CompletionGateway, GatewayError};
use punchline_application::ports::secret_store::SecretStore;
use punchline_domain::{Completion, CompletionRequest, truncate};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const MAX_ERROR_BODY: usize = 300;

/// Gateway calling the Mistral chat-completion endpoint
pub struct MistralGateway {
    client: Client,
    endpoint: String,
    secrets: Arc<dyn SecretStore>,
}

impl MistralGateway {
    /// Create a gateway with a client bounded by `timeout`
    pub fn new(
        base_url: &str,
        timeout: Option<Duration>,
        secrets: Arc<dyn SecretStore>,
    ) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self::with_client(client, base_url, secrets))
    }

    /// Create a gateway around an already configured client
    pub fn with_client(client: Client, base_url: &str, secrets: Arc<dyn SecretStore>) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH),
            secrets,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn map_send_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else if err.is_connect() {
        GatewayError::ConnectionError(err.to_string())
    } else {
        GatewayError::RequestFailed(err.to_string())
    }
}

#[async_trait]
impl CompletionGateway for MistralGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError> {
        // The secrets file is read from disk on every call
        let secrets = Arc::clone(&self.secrets);
        let api_key = tokio::task::spawn_blocking(move || secrets.api_key())
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))??;
        let body = ChatCompletionBody::from(request);

        debug!(
            model = %request.model(),
            messages = body.messages.len(),
            "POST {}",
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = truncate(&error_message(&text), MAX_ERROR_BODY);
            warn!(status = status.as_u16(), "Completion request rejected: {}", message);
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::MalformedResponse(e.to_string())
            }
        })?;

        Ok(parsed.into())
    }
}
