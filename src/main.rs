//! QuizAI terminal client
//!
//! Manage your QuizAI profile, avatar, and leaderboard standing from the
//! terminal, and run local countdowns for timed rounds.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use quizai::api::ApiClient;
use quizai::cli::{Cli, Commands, Display};
use quizai::session::SessionStore;
use quizai::timer;
use quizai::types::{ClientConfig, TimerEvent};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Login(args)) => {
            let store = SessionStore::new()?;
            let client = ApiClient::new(&ClientConfig::from_env());

            let user = client
                .login(&args.username, &args.password)
                .await
                .context("login failed; check the username and password")?;
            let token = user
                .session
                .clone()
                .context("login response carried no session token")?;

            store.store_login(&token, &user)?;
            Display::show_login_success(&user);
        }
        Some(Commands::Logout) => {
            let store = SessionStore::new()?;

            // Best effort: the local session is cleared even when the server
            // cannot be reached.
            if let Some(token) = store.token() {
                let client = ApiClient::new(&ClientConfig::from_env());
                if !client.logout(&token).await {
                    tracing::warn!("server-side logout failed, clearing local session anyway");
                }
            }

            store.clear()?;
            Display::show_logout();
        }
        Some(Commands::Status) => {
            let store = SessionStore::new()?;
            Display::show_status(store.is_authenticated(), store.user().as_ref());
        }
        Some(Commands::Profile) => {
            let store = SessionStore::new()?;
            let token = store.require_auth()?;
            let client = ApiClient::new(&ClientConfig::from_env());

            let user = client
                .fetch_profile(&token)
                .await
                .context("could not load the profile from the server")?;

            store.store_user(&user)?;
            Display::show_profile(&user);
        }
        Some(Commands::Update(args)) => {
            let store = SessionStore::new()?;
            let token = store.require_auth()?;
            let client = ApiClient::new(&ClientConfig::from_env());

            let user = client
                .update_profile(&token, &args.to_patch())
                .await
                .context("could not update the profile on the server")?;

            store.store_user(&user)?;
            Display::show_profile(&user);
        }
        Some(Commands::Avatar(args)) => {
            let store = SessionStore::new()?;
            let token = store.require_auth()?;
            let client = ApiClient::new(&ClientConfig::from_env());

            if !client.set_profile_pic(&token, args.id).await {
                anyhow::bail!("could not update the avatar on the server");
            }

            Display::show_avatar_updated(args.id);
        }
        Some(Commands::Leaderboard) => {
            let store = SessionStore::new()?;
            let token = store.require_auth()?;
            let client = ApiClient::new(&ClientConfig::from_env());

            let entries = client
                .fetch_global_leaderboard(&token)
                .await
                .context("could not load the leaderboard from the server")?;

            Display::show_leaderboard(&entries);
        }
        Some(Commands::Countdown(args)) => {
            run_countdown(args.duration_ms).await?;
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Runs a countdown to completion, rendering its notifications.
async fn run_countdown(duration_ms: u64) -> Result<()> {
    let (handle, mut events) = timer::spawn();
    handle.start(duration_ms)?;

    while let Some(event) = events.recv().await {
        match event {
            TimerEvent::Tick { remaining_ms } => Display::show_tick(remaining_ms),
            TimerEvent::Timeout => {
                Display::show_countdown_finished();
                break;
            }
        }
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
