//! Chat Session use case
//!
//! The session controller: answers questions, ingests uploaded documents and
//! resets the conversation. All mutable state lives in an explicit
//! [`SessionState`] owned by the [`ChatSession`]; nothing is global.
//!
//! # State machine
//!
//! ```text
//! submit:  history gains 0 or 2 messages
//! upload:  context Empty/Populated ──► Populated   (unchanged on error/unsupported)
//! reset:   any ──► history empty, context Empty
//! ```
//!
//! `submit` takes `&mut self`, so at most one completion call is in flight
//! per session. The pending call is reported through the
//! [`ProgressNotifier`] passed to it.

use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::document_extractor::DocumentExtractorPort;
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::generate_response::{GenerateError, ResponseGenerator};
use punchline_domain::{
    ContextStore, ConversationHistory, DocumentKind, DomainError, ExtractionError,
    ExtractionResult, Message, Question, TablePreview, UploadedFile,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Per-session mutable state: conversation log + document context.
///
/// Created at session start, dropped at session end.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    history: ConversationHistory,
    context: ContextStore,
}

impl SessionState {
    pub fn new(history_limit: usize) -> Result<Self, DomainError> {
        Ok(Self {
            history: ConversationHistory::with_limit(history_limit)?,
            context: ContextStore::new(),
        })
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn context(&self) -> &ContextStore {
        &self.context
    }
}

/// Result of a submit that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input: nothing sent, nothing recorded
    Ignored,
    /// The exchange was answered and appended to the history
    Answered { reply: String },
}

/// Result of an upload that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The extracted text replaced the document context
    Loaded {
        filename: String,
        kind: DocumentKind,
        /// Length of the stored context, in characters
        characters: usize,
        /// Present for tabular documents, for display
        table: Option<TablePreview>,
    },
    /// No extraction path for this media type; context unchanged
    Unsupported { filename: String, media_type: String },
}

/// Session controller
pub struct ChatSession<G: CompletionGateway + ?Sized> {
    generator: ResponseGenerator<G>,
    extractor: Arc<dyn DocumentExtractorPort>,
    logger: Arc<dyn ConversationLogger>,
    state: SessionState,
    last_error: Option<String>,
}

impl<G: CompletionGateway + ?Sized> ChatSession<G> {
    pub fn new(
        generator: ResponseGenerator<G>,
        extractor: Arc<dyn DocumentExtractorPort>,
        state: SessionState,
    ) -> Self {
        Self {
            generator,
            extractor,
            logger: Arc::new(NoConversationLogger),
            state,
            last_error: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    // ==================== Display accessors ====================

    /// Retained messages, oldest first
    pub fn history(&self) -> impl ExactSizeIterator<Item = &Message> + '_ {
        self.state.history.all()
    }

    /// Current document context, if any
    pub fn context(&self) -> Option<&str> {
        self.state.context.get()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Message of the most recent failed submit or upload
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn generator(&self) -> &ResponseGenerator<G> {
        &self.generator
    }

    // ==================== Transitions ====================

    /// Answer a question.
    ///
    /// Blank input is ignored without calling upstream. On success the user
    /// message and the reply are appended together; on failure the history
    /// is left exactly as it was.
    pub async fn submit(
        &mut self,
        text: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<SubmitOutcome, GenerateError> {
        let Some(question) = Question::try_new(text) else {
            debug!("Ignoring blank input");
            return Ok(SubmitOutcome::Ignored);
        };

        let settings = self.generator.settings();
        progress.on_submit_start(&settings.model, self.state.context.is_populated());

        let result = self
            .generator
            .generate(question.content(), self.state.context.get())
            .await;

        progress.on_submit_complete(result.is_ok());

        match result {
            Ok(reply) => {
                self.logger.log(ConversationEvent::new(
                    "exchange",
                    json!({
                        "model": self.generator.settings().model.as_str(),
                        "question": question.content(),
                        "reply": reply,
                        "with_context": self.state.context.is_populated(),
                    }),
                ));
                self.state
                    .history
                    .append_exchange(question.into_content(), reply.clone());
                self.last_error = None;
                Ok(SubmitOutcome::Answered { reply })
            }
            Err(e) => {
                warn!(error = %e, "Submit failed, history left unchanged");
                self.logger.log(ConversationEvent::new(
                    "exchange_failed",
                    json!({
                        "question": question.content(),
                        "error": e.to_string(),
                    }),
                ));
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Ingest an uploaded file as the new document context.
    ///
    /// Unsupported media types leave the context alone; extraction errors
    /// leave it at its prior value.
    pub fn upload(&mut self, file: UploadedFile) -> Result<UploadOutcome, ExtractionError> {
        let kind = file.kind();
        info!(
            filename = file.filename(),
            media_type = file.media_type(),
            bytes = file.size(),
            %kind,
            "Extracting uploaded file"
        );

        let result = match self.extractor.extract(&file) {
            Ok(result) => result,
            Err(e) => {
                warn!(filename = file.filename(), category = e.category(), error = %e, "Extraction failed");
                self.logger.log(ConversationEvent::new(
                    "upload_failed",
                    json!({ "filename": file.filename(), "error": e.to_string() }),
                ));
                self.last_error = Some(e.to_string());
                return Err(e);
            }
        };

        let table = match &result {
            ExtractionResult::TabularPreview(table) => Some(table.clone()),
            _ => None,
        };

        let Some(text) = result.into_context_text() else {
            info!(
                filename = file.filename(),
                media_type = file.media_type(),
                "No extraction path, context unchanged"
            );
            return Ok(UploadOutcome::Unsupported {
                filename: file.filename().to_string(),
                media_type: file.media_type().to_string(),
            });
        };

        let characters = text.chars().count();
        self.logger.log(ConversationEvent::new(
            "upload",
            json!({
                "filename": file.filename(),
                "kind": kind.as_str(),
                "characters": characters,
            }),
        ));
        self.state.context.set(text);
        self.last_error = None;

        Ok(UploadOutcome::Loaded {
            filename: file.filename().to_string(),
            kind,
            characters,
            table,
        })
    }

    /// Clear history and document context unconditionally
    pub fn reset(&mut self) {
        self.state.history.clear();
        self.state.context.clear();
        self.last_error = None;
        self.logger
            .log(ConversationEvent::new("reset", serde_json::Value::Null));
        info!("Session reset");
    }
}
