//! Progress indicators shown while the bot is answering

pub mod reporter;
