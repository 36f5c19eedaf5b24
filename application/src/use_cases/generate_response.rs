//! Generate Response use case
//!
//! Composes the completion request for one question and returns the text of
//! the first choice.

use crate::config::{BehaviorConfig, ChatSettings};
use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use punchline_domain::CompletionRequest;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while generating a response
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Upstream error: {0}")]
    Upstream(#[from] GatewayError),
}

impl GenerateError {
    pub fn gateway_error(&self) -> &GatewayError {
        match self {
            GenerateError::Upstream(e) => e,
        }
    }
}

/// Use case producing the bot's reply to a single question
pub struct ResponseGenerator<G: CompletionGateway + ?Sized> {
    gateway: Arc<G>,
    settings: ChatSettings,
    behavior: BehaviorConfig,
}

impl<G: CompletionGateway + ?Sized> ResponseGenerator<G> {
    pub fn new(gateway: Arc<G>, settings: ChatSettings) -> Self {
        Self {
            gateway,
            settings,
            behavior: BehaviorConfig::default(),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Build the request that `generate` would send
    pub fn compose(&self, question: &str, context: Option<&str>) -> CompletionRequest {
        CompletionRequest::compose(
            self.settings.model.clone(),
            &self.settings.persona,
            question,
            context,
        )
    }

    /// Send the question (and optional document context) upstream.
    ///
    /// Fails when the call errors, times out, returns no choices, or the
    /// first choice is blank.
    pub async fn generate(
        &self,
        question: &str,
        context: Option<&str>,
    ) -> Result<String, GenerateError> {
        let request = self.compose(question, context);

        debug!(
            model = %request.model(),
            messages = request.messages().len(),
            context_bytes = context.map(str::len).unwrap_or(0),
            "Sending completion request"
        );

        let call = self.gateway.complete(&request);
        let completion = match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| GatewayError::Timeout)??,
            None => call.await?,
        };

        if completion.choices.len() > 1 {
            debug!(
                choices = completion.choices.len(),
                "Ignoring all but the first choice"
            );
        }

        let text = completion.first_text().ok_or(GatewayError::NoChoices)?;
        if text.trim().is_empty() {
            warn!(model = %request.model(), "First choice has no content");
            return Err(GatewayError::MalformedResponse(
                "first choice has empty content".to_string(),
            )
            .into());
        }

        info!(model = %request.model(), reply_bytes = text.len(), "Response generated");
        Ok(text.to_string())
    }
}
