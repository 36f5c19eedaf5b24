//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::ReplCommand;
use super::upload::read_upload;
use crate::{ConsoleFormatter, ProgressMode};
use punchline_application::{ChatSession, CompletionGateway, SubmitOutcome};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROMPT: &str = "Vous";
const HISTORY_CAPACITY: usize = 1000;

/// Interactive chat REPL
///
/// Lines are handled one at a time: a question is fully answered (or has
/// failed) before the next line is read.
pub struct ChatRepl<G: CompletionGateway + ?Sized + 'static> {
    session: ChatSession<G>,
    progress: ProgressMode,
    history_path: Option<PathBuf>,
}

impl<G: CompletionGateway + ?Sized + 'static> ChatRepl<G> {
    pub fn new(session: ChatSession<G>) -> Self {
        Self {
            session,
            progress: ProgressMode::Spinner,
            history_path: None,
        }
    }

    /// Set how a pending question is shown
    pub fn with_progress(mut self, mode: ProgressMode) -> Self {
        self.progress = mode;
        self
    }

    /// Persist line-editing history to this file
    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    pub fn session(&self) -> &ChatSession<G> {
        &self.session
    }

    /// The retained conversation, as redrawn after every answer
    pub fn transcript(&self) -> String {
        ConsoleFormatter::history(self.session.history())
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(history) = self.history_path.as_deref().and_then(open_history) {
            line_editor = line_editor.with_history(Box::new(history));
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(PROMPT.to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if self.handle_line(line).await {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("À plus !");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handle one line of input. Returns true if the REPL should exit.
    pub async fn handle_line(&mut self, line: &str) -> bool {
        match ReplCommand::parse(line) {
            Some(command) => self.handle_command(command),
            None => {
                self.process_question(line).await;
                false
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!(
            "{}",
            ConsoleFormatter::title(self.session.generator().settings().model.as_str())
        );
        println!("{}", ReplCommand::help());
        println!();
    }

    fn handle_command(&mut self, command: ReplCommand) -> bool {
        debug!(?command, "REPL command");
        match command {
            ReplCommand::Quit => {
                println!("À plus !");
                return true;
            }
            ReplCommand::Help => {
                println!();
                println!("{}", ReplCommand::help());
                println!();
            }
            ReplCommand::Upload(Some(path)) => self.upload(&path),
            ReplCommand::Upload(None) => {
                println!("{}", ConsoleFormatter::error("Usage: /upload <path>"));
            }
            ReplCommand::Reset => {
                self.session.reset();
                println!("{}", ConsoleFormatter::notice("Conversation réinitialisée."));
            }
            ReplCommand::History => {
                println!();
                print!("{}", ConsoleFormatter::history(self.session.history()));
                println!();
            }
            ReplCommand::Context => {
                print!("{}", ConsoleFormatter::context(self.session.context()));
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    fn upload(&mut self, path: &Path) {
        let result = read_upload(path).and_then(|file| self.session.upload(file));
        match result {
            Ok(outcome) => print!("{}", ConsoleFormatter::upload(&outcome)),
            Err(e) => eprintln!("{}", ConsoleFormatter::error(&e.to_string())),
        }
    }

    async fn process_question(&mut self, question: &str) {
        let progress = self.progress.notifier();

        match self.session.submit(question, progress.as_ref()).await {
            Ok(SubmitOutcome::Answered { .. }) => {
                println!();
                print!("{}", self.transcript());
                println!();
            }
            Ok(SubmitOutcome::Ignored) => {}
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
            }
        }
    }
}

/// Open the line-editing history, creating its directory first.
///
/// Failures are logged and the REPL runs without persisted history.
fn open_history(path: &Path) -> Option<FileBackedHistory> {
    if let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        debug!("Cannot create history directory {}: {}", parent.display(), e);
    }
    match FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf()) {
        Ok(history) => Some(history),
        Err(e) => {
            debug!("History file unavailable: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use punchline_application::{
        ChatSettings, DocumentExtractorPort, GatewayError, ResponseGenerator, SessionState,
    };
    use punchline_domain::{
        Completion, CompletionRequest, ExtractionError, ExtractionResult, UploadedFile,
    };
    use std::sync::{Arc, Mutex};

    struct EchoGateway {
        calls: Mutex<usize>,
    }

    #[async_trait]
    impl CompletionGateway for EchoGateway {
        async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError> {
            *self.calls.lock().unwrap() += 1;
            let question = &request.messages().last().unwrap().content;
            Ok(Completion::from_texts([format!("Écho: {question}")]))
        }
    }

    /// Uses the raw bytes as text
    struct BytesExtractor;

    impl DocumentExtractorPort for BytesExtractor {
        fn extract(&self, file: &UploadedFile) -> Result<ExtractionResult, ExtractionError> {
            Ok(ExtractionResult::PlainText(
                String::from_utf8_lossy(file.bytes()).into_owned(),
            ))
        }
    }

    fn repl() -> (Arc<EchoGateway>, ChatRepl<EchoGateway>) {
        let gateway = Arc::new(EchoGateway {
            calls: Mutex::new(0),
        });
        let generator = ResponseGenerator::new(Arc::clone(&gateway), ChatSettings::default());
        let session = ChatSession::new(generator, Arc::new(BytesExtractor), SessionState::default());
        (gateway, ChatRepl::new(session).with_progress(ProgressMode::Off))
    }

    #[tokio::test]
    async fn test_question_is_answered_and_recorded() {
        let (gateway, mut repl) = repl();

        assert!(!repl.handle_line("Tu connais Paris ?").await);

        assert_eq!(*gateway.calls.lock().unwrap(), 1);
        let texts: Vec<_> = repl.session().history().map(|m| m.text().to_string()).collect();
        assert_eq!(texts, vec!["Tu connais Paris ?", "Écho: Tu connais Paris ?"]);
    }

    #[tokio::test]
    async fn test_upload_then_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "Le contexte").unwrap();
        let (_, mut repl) = repl();

        repl.handle_line(&format!("/upload {}", path.display())).await;
        assert_eq!(repl.session().context(), Some("Le contexte"));

        repl.handle_line("Et alors ?").await;
        assert_eq!(repl.session().history().len(), 2);

        repl.handle_line("/reset").await;
        assert_eq!(repl.session().context(), None);
        assert_eq!(repl.session().history().len(), 0);
    }

    #[tokio::test]
    async fn test_missing_upload_keeps_context() {
        let dir = tempfile::tempdir().unwrap();
        let (_, mut repl) = repl();

        repl.handle_line(&format!("/upload {}", dir.path().join("absent.txt").display()))
            .await;
        assert_eq!(repl.session().context(), None);
    }

    #[tokio::test]
    async fn test_commands_do_not_reach_the_gateway() {
        let (gateway, mut repl) = repl();

        assert!(!repl.handle_line("/help").await);
        assert!(!repl.handle_line("/history").await);
        assert!(!repl.handle_line("/context").await);
        assert!(!repl.handle_line("/nope").await);
        assert!(repl.handle_line("/quit").await);

        assert_eq!(*gateway.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_transcript_shows_only_retained_messages() {
        colored::control::set_override(false);
        let (_, mut repl) = repl();
        assert!(repl.transcript().contains("(aucun message)"));

        for k in 1..=6 {
            repl.handle_line(&format!("question {k}")).await;
        }

        let transcript = repl.transcript();
        assert!(!transcript.contains("question 1"));
        assert!(transcript.contains("question 2"));
        assert!(transcript.contains("Écho: question 6"));
        assert_eq!(repl.session().history().len(), 10);
    }

    #[test]
    fn test_open_history_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.txt");

        assert!(open_history(&path).is_some());
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_open_history_under_a_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        assert!(open_history(&blocker.join("history.txt")).is_none());
    }
}
