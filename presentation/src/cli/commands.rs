//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for punchline
#[derive(Parser, Debug)]
#[command(name = "punchline")]
#[command(author, version, about = "Chatbot that answers every question with French punchlines")]
#[command(long_about = r#"
Punchline sends your question to a Mistral chat model instructed to answer
with punchlines in French. A document (txt, csv, xlsx, pdf) can be loaded
first; its text is passed along as context.

Configuration files are loaded from (in priority order):
1. PUNCHLINE_* environment variables
2. --config <path>     Explicit config file
3. ./punchline.toml    Project-level config
4. ~/.config/punchline/config.toml   Global config

The Mistral API key is read from secrets.toml (key `mistral_key`).

Example:
  punchline "C'est quoi le secret d'un bon croissant ?"
  punchline --file ventes.csv "Quel mois a été le meilleur ?"
  punchline --chat -m mistral-small-latest
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Model to use (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Load a document as context before the first question
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write diagnostic logs to a daily file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}
