//! Slash commands understood by the REPL

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// `/upload <path>`; `None` when the path is missing
    Upload(Option<PathBuf>),
    Reset,
    History,
    Context,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`. Other lines are questions.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        let command = match name {
            "upload" | "u" => {
                Self::Upload((!arg.is_empty()).then(|| PathBuf::from(arg)))
            }
            "reset" => Self::Reset,
            "history" => Self::History,
            "context" => Self::Context,
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        };
        Some(command)
    }

    pub fn help() -> &'static str {
        "Commands:
  /upload <path>    - Load a txt, csv, xlsx or pdf file as context
  /reset            - Clear the conversation and the document context
  /history          - Show the conversation
  /context          - Show the loaded document context
  /help, /h, /?     - Show this help
  /quit, /exit, /q  - Exit chat"
    }
}
