//! Command-line interface for the profile service.
//!
//! Accepts a single `userId` argument, resolves the profile through the
//! same facade the HTTP server uses, and prints it to stdout. Argument
//! and fetch errors go to stderr with a non-zero exit code; a domain
//! error never panics the process.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;

use crate::domain::models::{UserId, UserProfile};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::setup::build_profile_service;

/// Resolve a user profile by ID.
#[derive(Parser, Debug)]
#[command(name = "profile")]
#[command(about = "Resolve a user profile (user + posts) from the upstream API")]
pub struct Cli {
    /// ID of the user to resolve
    pub user_id: Option<String>,

    /// Print the profile as pretty JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Path to a configuration file (defaults to profile-service.yaml + env)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Run the CLI to completion, writing to stdout/stderr.
pub async fn run(cli: Cli) -> ExitCode {
    match execute(cli).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Resolve the requested profile and render it.
///
/// # Errors
///
/// Returns the message destined for stderr: argument problems,
/// configuration/startup failures, or the fetch error itself.
pub async fn execute(cli: Cli) -> Result<String, String> {
    let user_id = parse_user_id(cli.user_id.as_deref())?;

    debug!(user_id, "resolved user ID argument");

    let config = match cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
    .map_err(|err| format!("Configuration error: {err:#}"))?;

    let service = build_profile_service(&config)
        .map(Arc::new)
        .map_err(|err| format!("Startup error: {err:#}"))?;

    let profile = service
        .get_by_id(user_id)
        .await
        .map_err(|err| err.to_string())?;

    if cli.json {
        serde_json::to_string_pretty(&profile)
            .map(|json| format!("{json}\n"))
            .map_err(|err| format!("Failed to serialize profile: {err}"))
    } else {
        Ok(render_profile(&profile))
    }
}

/// Validate the raw `userId` argument.
///
/// # Errors
///
/// Returns the exact message to print on stderr.
pub fn parse_user_id(raw: Option<&str>) -> Result<UserId, String> {
    let Some(raw) = raw else {
        return Err("Missing required argument: userId (number)".to_string());
    };

    if raw.trim().is_empty() {
        return Err("Empty argument: userId".to_string());
    }

    raw.trim()
        .parse::<UserId>()
        .map_err(|_| format!("Invalid argument: userId must be a number, got '{raw}'"))
}

/// Render a profile for terminal output.
#[must_use]
pub fn render_profile(profile: &UserProfile) -> String {
    let mut out = format!(
        "{} (@{}) <{}>\nPosts ({}):\n",
        profile.name,
        profile.username,
        profile.email,
        profile.posts.len()
    );
    for post in &profile.posts {
        out.push_str(&format!("  [{}] {}\n", post.id, post.title));
    }
    out
}
