//! Progress reporting while a question is being answered

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use punchline_application::ports::progress::{NoProgress, ProgressNotifier};
use punchline_domain::Model;
use std::io::IsTerminal;
use std::sync::Mutex;
use std::time::Duration;

const THINKING: &str = "Le bot réfléchit...";

/// Spinner shown while the completion call is pending
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn message(model: &Model, with_context: bool) -> String {
        if with_context {
            format!("{} ({}, avec le document)", THINKING, model)
        } else {
            format!("{} ({})", THINKING, model)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_submit_start(&self, model: &Model, with_context: bool) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message(Self::message(model, with_context));
        spinner.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(spinner);
        }
    }

    fn on_submit_complete(&self, _success: bool) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(spinner) = slot.take()
        {
            spinner.finish_and_clear();
        }
    }
}

/// Plain text progress (no spinner), for non-interactive terminals
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_submit_start(&self, model: &Model, with_context: bool) {
        println!(
            "{} {}",
            "->".cyan(),
            ProgressReporter::message(model, with_context).dimmed()
        );
    }

    fn on_submit_complete(&self, success: bool) {
        if !success {
            println!("  {} pas de réponse", "x".red());
        }
    }
}

/// How a pending question is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    Spinner,
    Plain,
    Off,
}

impl ProgressMode {
    /// Spinner on a terminal, plain lines when stdout is redirected
    pub fn select(show_progress: bool, interactive: bool) -> Self {
        match (show_progress, interactive) {
            (false, _) => ProgressMode::Off,
            (true, true) => ProgressMode::Spinner,
            (true, false) => ProgressMode::Plain,
        }
    }

    /// [`select`](Self::select) against the current stdout
    pub fn detect(show_progress: bool) -> Self {
        Self::select(show_progress, std::io::stdout().is_terminal())
    }

    pub fn notifier(self) -> Box<dyn ProgressNotifier> {
        match self {
            ProgressMode::Spinner => Box::new(ProgressReporter::new()),
            ProgressMode::Plain => Box::new(SimpleProgress),
            ProgressMode::Off => Box::new(NoProgress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_mentions_document() {
        let message = ProgressReporter::message(&Model::MistralSmall, true);
        assert!(message.starts_with(THINKING));
        assert!(message.contains("mistral-small-latest"));
        assert!(message.contains("avec le document"));
        assert!(!ProgressReporter::message(&Model::MistralSmall, false).contains("document"));
    }

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_submit_start(&Model::default(), false);
        assert!(reporter.spinner.lock().unwrap().is_some());
        reporter.on_submit_complete(true);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_mode_selection() {
        assert_eq!(ProgressMode::select(true, true), ProgressMode::Spinner);
        assert_eq!(ProgressMode::select(true, false), ProgressMode::Plain);
        assert_eq!(ProgressMode::select(false, true), ProgressMode::Off);
        assert_eq!(ProgressMode::select(false, false), ProgressMode::Off);
    }

    #[test]
    fn test_plain_notifier_runs_without_terminal() {
        colored::control::set_override(false);
        let notifier = ProgressMode::Plain.notifier();
        notifier.on_submit_start(&Model::MistralSmall, true);
        notifier.on_submit_complete(false);
        notifier.on_submit_complete(true);
    }
}
