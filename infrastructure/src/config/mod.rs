//! Configuration file loading for punchline
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PUNCHLINE_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./punchline.toml` or `./.punchline.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/punchline/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileChatConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileProviderConfig, FileReplConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
