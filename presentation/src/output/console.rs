//! Console output formatter for chat sessions

use colored::Colorize;
use punchline_application::UploadOutcome;
use punchline_domain::{Message, Speaker, TablePreview, truncate};

const CONTEXT_PREVIEW_CHARS: usize = 400;

/// Formats chat messages, uploads and errors for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner shown when the REPL starts
    pub fn title(model: &str) -> String {
        let line = "=".repeat(60);
        format!(
            "{}\n{:^60}\n{}\n\n{}\n{} {}\n",
            line.cyan(),
            "Chatbot Punchline".bold(),
            line.cyan(),
            "Bienvenue ! Posez-moi des questions ou téléchargez un fichier !",
            "Modèle:".dimmed(),
            model
        )
    }

    /// One history entry: the user's lines in bold, the bot's in italics
    pub fn message(message: &Message) -> String {
        match message.speaker() {
            Speaker::User => format!("{} {}", "Vous:".bold(), message.text().bold()),
            Speaker::Bot => format!("{} {}", "Bot:".italic(), message.text().italic()),
        }
    }

    /// The whole retained conversation, oldest first
    pub fn history<'a>(messages: impl Iterator<Item = &'a Message>) -> String {
        let blocks: Vec<String> = messages.map(Self::message).collect();
        if blocks.is_empty() {
            return format!("{}\n", "(aucun message)".dimmed());
        }
        format!("{}\n", blocks.join("\n\n"))
    }

    pub fn reply(reply: &str) -> String {
        format!("{} {}\n", "Bot:".italic().cyan(), reply.italic())
    }

    /// Confirmation for an upload, with a table preview when there is one
    pub fn upload(outcome: &UploadOutcome) -> String {
        match outcome {
            UploadOutcome::Loaded {
                filename,
                characters,
                table,
                ..
            } => {
                let mut output = format!(
                    "{}\n",
                    format!("Fichier {} téléchargé avec succès !", filename).green()
                );
                match table {
                    Some(table) => output.push_str(&Self::table(table)),
                    None => output.push_str(&format!(
                        "{}\n",
                        format!("{} caractères chargés comme contexte", characters).dimmed()
                    )),
                }
                output
            }
            UploadOutcome::Unsupported {
                filename,
                media_type,
            } => format!(
                "{}\n{}\n",
                format!("Fichier {} téléchargé avec succès !", filename).green(),
                format!(
                    "Type {} non pris en charge: le contexte est inchangé",
                    media_type
                )
                .yellow()
            ),
        }
    }

    /// Head of a table plus its dimensions
    pub fn table(table: &TablePreview) -> String {
        format!(
            "{}\n{}\n",
            Self::indent(table.preview(), "  "),
            format!("({} lignes, {} colonnes)", table.rows(), table.columns()).dimmed()
        )
    }

    /// The current document context, shortened
    pub fn context(context: Option<&str>) -> String {
        match context {
            Some(text) => format!(
                "{} {}\n{}\n",
                "Contexte:".cyan().bold(),
                format!("{} caractères", text.chars().count()).dimmed(),
                Self::indent(&truncate(text, CONTEXT_PREVIEW_CHARS), "  ")
            ),
            None => format!("{}\n", "Aucun document chargé".dimmed()),
        }
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "Erreur:".red().bold(), message)
    }

    pub fn notice(message: &str) -> String {
        format!("{}", message.dimmed())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
