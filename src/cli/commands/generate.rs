//! cli::commands::generate
//!
//! Generate a changelog and write it out.
//!
//! # Design
//!
//! The handler resolves the base URL and token, builds the REST client and
//! pipeline options, and runs the pipeline. The pipeline returning
//! `Ok(None)` (no closed milestoned issues) is a normal outcome: a notice
//! goes to stderr, nothing is written, and the exit status is zero. Every
//! error - an unresolvable project path included - propagates to `main`,
//! which prints the diagnostic and exits non-zero.
//!
//! # Token Resolution
//!
//! In precedence order: `--token`, `$GITLAB_PRIVATE_TOKEN`, the config
//! file, and finally an interactive prompt when stdin is a terminal.

use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::api::rest::RestClient;
use crate::api::MilestoneState;
use crate::changelog::{self, ChangelogOptions};
use crate::config::GlobalConfig;
use crate::ui::output::{self, Verbosity};

/// Generate options parsed from CLI arguments.
#[derive(Debug)]
pub struct GenerateOptions {
    pub repo: String,
    pub url: Option<String>,
    pub token: Option<String>,
    pub per_page: u32,
    pub released_only: bool,
    pub output: Option<PathBuf>,
}

/// Run the generate command.
///
/// This is a synchronous wrapper that uses tokio to run the async pipeline.
pub fn generate(opts: GenerateOptions, verbosity: Verbosity) -> Result<()> {
    let config = GlobalConfig::load().context("loading configuration")?;

    let url = resolve_url(opts.url.clone(), &config)?;
    let token = resolve_token(opts.token.clone(), &config)?;

    let api = RestClient::new(url, token, verbosity);

    let mut pipeline_opts = ChangelogOptions::default();
    pipeline_opts.per_page = opts.per_page;
    if opts.released_only {
        pipeline_opts =
            pipeline_opts.with_milestone_filter(|m| m.state == MilestoneState::Closed);
    }

    // Use tokio runtime to run async code
    let rt = tokio::runtime::Runtime::new()?;
    let rendered = rt.block_on(changelog::generate(
        &api,
        api.base_url(),
        &opts.repo,
        &pipeline_opts,
    ))?;

    match rendered {
        Some(markdown) => write_changelog(&markdown, opts.output.as_deref(), verbosity),
        None => {
            output::warn(
                format!(
                    "'{}' has no closed issues with a milestone; no changelog produced",
                    opts.repo
                ),
                verbosity,
            );
            Ok(())
        }
    }
}

/// Write the document to the requested destination.
fn write_changelog(
    markdown: &str,
    destination: Option<&std::path::Path>,
    verbosity: Verbosity,
) -> Result<()> {
    match destination {
        Some(path) => {
            fs::write(path, markdown)
                .with_context(|| format!("writing changelog to '{}'", path.display()))?;
            output::print(format!("wrote changelog to {}", path.display()), verbosity);
        }
        None => print!("{}", markdown),
    }
    Ok(())
}

/// Resolve the base URL: flag > environment > config file.
///
/// The result always carries a trailing slash; every API path and issue
/// link is joined onto it directly.
fn resolve_url(flag: Option<String>, config: &GlobalConfig) -> Result<String> {
    let url = flag
        .or_else(|| std::env::var("GITLAB_URL").ok().filter(|u| !u.is_empty()))
        .or_else(|| config.url.clone());

    match url {
        Some(url) => Ok(normalize_base_url(url)),
        None => bail!(
            "no GitLab URL configured; pass --url, set GITLAB_URL, \
             or add `url` to the config file"
        ),
    }
}

/// Ensure the base URL ends with a slash.
fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

/// Resolve the token: flag > environment > config file > prompt.
fn resolve_token(flag: Option<String>, config: &GlobalConfig) -> Result<String> {
    if let Some(token) = flag {
        return Ok(token);
    }
    if let Ok(token) = std::env::var("GITLAB_PRIVATE_TOKEN") {
        if !token.is_empty() {
            return Ok(token);
        }
    }
    if let Some(token) = config.token.clone() {
        return Ok(token);
    }
    if std::io::stdin().is_terminal() {
        let token = rpassword::prompt_password("GitLab private token: ")
            .context("reading token from terminal")?;
        let token = token.trim();
        if !token.is_empty() {
            return Ok(token.to_string());
        }
    }
    bail!(
        "no access token configured; pass --token, set GITLAB_PRIVATE_TOKEN, \
         or add `token` to the config file"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    mod base_url {
        use super::*;

        #[test]
        fn trailing_slash_appended() {
            assert_eq!(
                normalize_base_url("https://gitlab.example.com".to_string()),
                "https://gitlab.example.com/"
            );
        }

        #[test]
        fn existing_slash_kept() {
            assert_eq!(
                normalize_base_url("https://gitlab.example.com/".to_string()),
                "https://gitlab.example.com/"
            );
        }

        #[test]
        fn flag_beats_config() {
            let config = GlobalConfig {
                url: Some("https://config.example.com/".to_string()),
                token: None,
            };
            std::env::remove_var("GITLAB_URL");

            let url = resolve_url(Some("https://flag.example.com".to_string()), &config).unwrap();

            assert_eq!(url, "https://flag.example.com/");
        }

        #[test]
        fn config_used_when_no_flag() {
            let config = GlobalConfig {
                url: Some("https://config.example.com/".to_string()),
                token: None,
            };
            std::env::remove_var("GITLAB_URL");

            let url = resolve_url(None, &config).unwrap();

            assert_eq!(url, "https://config.example.com/");
        }

        #[test]
        fn missing_everywhere_is_an_error() {
            std::env::remove_var("GITLAB_URL");

            let result = resolve_url(None, &GlobalConfig::default());

            assert!(result.is_err());
        }
    }

    mod token {
        use super::*;

        #[test]
        fn flag_beats_config() {
            let config = GlobalConfig {
                url: None,
                token: Some("from-config".to_string()),
            };
            std::env::remove_var("GITLAB_PRIVATE_TOKEN");

            let token = resolve_token(Some("from-flag".to_string()), &config).unwrap();

            assert_eq!(token, "from-flag");
        }

        #[test]
        fn config_used_when_no_flag_or_env() {
            let config = GlobalConfig {
                url: None,
                token: Some("from-config".to_string()),
            };
            std::env::remove_var("GITLAB_PRIVATE_TOKEN");

            let token = resolve_token(None, &config).unwrap();

            assert_eq!(token, "from-config");
        }
    }
}
