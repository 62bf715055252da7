//! Operator CLI for the helpdesk portal.
//!
//! Talks to the same hosted backend as the web server and renders tickets
//! through the same presentation rules, so operators can check what the
//! dashboard would show without a browser.
//!
//! # Usage
//!
//! ```bash
//! # Probe backend reachability
//! cargo run --bin helpdeskctl -- backend check
//!
//! # Sign in interactively and print an access token
//! cargo run --bin helpdeskctl -- login --email dana@example.com
//!
//! # Show the five most recent tickets visible to that token
//! HELPDESK_ACCESS_TOKEN=... cargo run --bin helpdeskctl -- tickets recent
//!
//! # Show a profile and whether it gets the admin tile
//! HELPDESK_ACCESS_TOKEN=... cargo run --bin helpdeskctl -- profile show <user-id>
//! ```
//!
//! # Environment Variables
//!
//! - `BACKEND_URL`, `BACKEND_ANON_KEY` (required): same as the server
//! - `HELPDESK_ACCESS_TOKEN`: access token used for row reads

use helpdesk_portal::application::presentation::{
    RECENT_TICKETS_LIMIT, shows_admin_tile, status_style, truncate_description,
};
use helpdesk_portal::config::load_from_env;
use helpdesk_portal::domain::backend::Backend;
use helpdesk_portal::domain::entities::Session;
use helpdesk_portal::infrastructure::supabase::SupabaseBackend;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};

/// CLI tool for operating the helpdesk portal.
#[derive(Parser)]
#[command(name = "helpdeskctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Backend diagnostics
    Backend {
        #[command(subcommand)]
        action: BackendAction,
    },

    /// Inspect tickets
    Tickets {
        #[command(subcommand)]
        action: TicketsAction,
    },

    /// Inspect profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Sign in with email and password and print the access token
    Login {
        #[arg(short, long)]
        email: Option<String>,
    },
}

#[derive(Subcommand)]
enum BackendAction {
    /// Check that the backend answers
    Check,
}

#[derive(Subcommand)]
enum TicketsAction {
    /// Show the most recent tickets
    Recent {
        #[arg(short, long, default_value_t = RECENT_TICKETS_LIMIT)]
        limit: usize,

        /// Access token used for the query
        #[arg(long, env = "HELPDESK_ACCESS_TOKEN", hide_env_values = true)]
        token: String,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show a profile by user id
    Show {
        user_id: String,

        /// Access token used for the query
        #[arg(long, env = "HELPDESK_ACCESS_TOKEN", hide_env_values = true)]
        token: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_from_env().context("Failed to load configuration")?;
    let backend = SupabaseBackend::new(
        &config.backend_url,
        config.backend_anon_key.clone(),
        config.backend_timeout(),
    )
    .context("Failed to build backend client")?;

    match cli.command {
        Commands::Backend { action } => match action {
            BackendAction::Check => check_backend(&backend).await?,
        },
        Commands::Tickets { action } => match action {
            TicketsAction::Recent { limit, token } => {
                recent_tickets(&backend, &token, limit).await?
            }
        },
        Commands::Profile { action } => match action {
            ProfileAction::Show { user_id, token } => {
                show_profile(&backend, user_id, token).await?
            }
        },
        Commands::Login { email } => login(&backend, email).await?,
    }

    Ok(())
}

async fn check_backend(backend: &SupabaseBackend) -> Result<()> {
    println!(
        "{} {}",
        "🔍 Checking backend at".bright_blue(),
        backend.base_url().as_str().bright_white()
    );

    if !backend.health_check().await {
        bail!("Backend did not answer the health probe");
    }

    println!("{}", "✅ Backend reachable".green().bold());
    Ok(())
}

/// Prints recent tickets the way the dashboard lists them.
///
/// # Output Format
///
/// ```text
/// 📋 Recent tickets
///
///   Printer on floor 3 jams                  Open         Hardware   4 upvotes
///     Every second page gets stuck half way through...
/// ```
async fn recent_tickets(backend: &SupabaseBackend, token: &str, limit: usize) -> Result<()> {
    let session = backend
        .get_current_session(token)
        .await
        .context("Failed to resolve session")?
        .context("Access token was rejected; run `helpdeskctl login` for a fresh one")?;

    println!("{}", "📋 Recent tickets".bright_blue().bold());
    println!();

    let tickets = backend
        .list_recent_tickets(&session, limit)
        .await
        .context("Failed to fetch tickets")?;

    if tickets.is_empty() {
        println!("{}", "  No tickets yet".yellow());
        return Ok(());
    }

    for ticket in &tickets {
        let style = status_style(ticket.status);
        println!(
            "  {:<40} {:<12} {:<10} {}",
            ticket.subject.bright_white().bold(),
            ticket.status.label().color(style.terminal_color()),
            ticket.category.as_deref().unwrap_or("-").cyan(),
            format!("{} upvotes", ticket.upvotes).bright_black()
        );
        println!("    {}", truncate_description(&ticket.description));
        println!(
            "    {}",
            ticket
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Shown: {}",
        tickets.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_profile(backend: &SupabaseBackend, user_id: String, token: String) -> Result<()> {
    let session = Session {
        user_id,
        email: None,
        access_token: token,
    };

    let profile = backend
        .get_profile(&session)
        .await
        .context("Failed to fetch profile")?;

    let Some(profile) = profile else {
        println!("{}", "⚠️  No profile found for this user".yellow());
        return Ok(());
    };

    println!("{}", "👤 Profile".bright_blue().bold());
    println!();
    println!("  ID:    {}", profile.id.bright_black());
    println!("  Name:  {}", profile.display_name().cyan());
    println!("  Role:  {}", profile.role.as_str().bright_white());

    let admin_tile = if shows_admin_tile(Some(&profile)) {
        "yes".green()
    } else {
        "no".bright_black()
    };
    println!("  Admin tile: {}", admin_tile);
    println!();

    Ok(())
}

/// Signs in interactively.
///
/// The password is always read from a prompt.
async fn login(backend: &SupabaseBackend, email: Option<String>) -> Result<()> {
    println!("{}", "🔑 Sign in".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    let session = backend
        .sign_in_with_password(&email, &password)
        .await
        .context("Sign-in request failed")?;

    let Some(session) = session else {
        println!("{}", "❌ Invalid email or password".red());
        return Ok(());
    };

    println!();
    println!("{}", "✅ Signed in".green().bold());
    println!("  User:  {}", session.user_id.cyan());
    println!("  Token: {}", session.access_token.bright_yellow());
    println!();
    println!("{}", "Use it with:".bright_white());
    println!(
        "  {}={} helpdeskctl tickets recent",
        "HELPDESK_ACCESS_TOKEN".bright_cyan(),
        session.access_token.bright_yellow()
    );
    println!();

    Ok(())
}
