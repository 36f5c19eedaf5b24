//! Progress notification port
//!
//! Defines the interface for reporting a pending completion call.

use punchline_domain::Model;

/// Callback for progress updates while a question is being answered
///
/// Implementations live in the presentation layer (spinner, plain text, ...).
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the completion request is sent
    fn on_submit_start(&self, model: &Model, with_context: bool);

    /// Called once the call returned, successfully or not
    fn on_submit_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_submit_start(&self, _model: &Model, _with_context: bool) {}
    fn on_submit_complete(&self, _success: bool) {}
}
