//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface over a
//! [`ChatSession`](punchline_application::ChatSession).

mod command;
mod repl;
mod upload;

pub use command::ReplCommand;
pub use repl::ChatRepl;
pub use upload::read_upload;
