//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler validates its arguments, drives the changelog
//! pipeline, and formats output. The network-facing `generate` command is
//! async inside; its handler bridges from the sync CLI with a locally
//! constructed tokio runtime.

mod completion;
mod generate;

pub use completion::completion;
pub use generate::{generate, GenerateOptions};

use anyhow::Result;

use super::args::Command;
use crate::ui::output::Verbosity;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, verbosity: Verbosity) -> Result<()> {
    match command {
        Command::Generate {
            repo,
            url,
            token,
            per_page,
            released_only,
            output,
        } => generate(
            GenerateOptions {
                repo,
                url,
                token,
                per_page,
                released_only,
                output,
            },
            verbosity,
        ),
        Command::Completion { shell } => completion(shell),
    }
}
