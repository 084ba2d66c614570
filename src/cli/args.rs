//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Echo constructed API URLs to stderr
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Milemark - render a markdown changelog from GitLab milestones
#[derive(Parser, Debug)]
#[command(name = "milemark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Echo constructed API URLs to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; only the changelog itself and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the changelog for a project
    #[command(
        name = "generate",
        long_about = "Generate a markdown changelog for a GitLab project.\n\n\
            Resolves the project by its path-with-namespace, collects every \
            closed issue that belongs to a milestone, and renders one markdown \
            section per milestone (newest due date first). The document goes to \
            stdout unless --output is given.\n\n\
            The base URL and token are resolved from (in order): flags, the \
            GITLAB_URL / GITLAB_PRIVATE_TOKEN environment variables, the config \
            file, and - for the token - an interactive prompt.",
        after_help = "\
EXAMPLES:
    # Print the changelog for a project
    milemark generate mygroup/myproject --url https://gitlab.example.com/

    # Write it to a file, skipping unreleased milestones
    milemark generate mygroup/myproject --released-only -o CHANGELOG.md

    # From a release script, with the token in the environment
    GITLAB_PRIVATE_TOKEN=glpat-xxx milemark -q generate mygroup/myproject"
    )]
    Generate {
        /// Project path with namespace, e.g. `mygroup/myproject`
        #[arg(value_name = "PROJECT_PATH")]
        repo: String,

        /// GitLab instance base URL, e.g. `https://gitlab.example.com/`
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Private access token (prefer GITLAB_PRIVATE_TOKEN or the config file)
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,

        /// Entries requested per paginated API call (at least 1)
        #[arg(
            long,
            default_value_t = 100,
            value_name = "N",
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        per_page: u32,

        /// Only include released (closed) milestones
        #[arg(long)]
        released_only: bool,

        /// Write the changelog to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
