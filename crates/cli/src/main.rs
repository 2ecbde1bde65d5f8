//! EdgePersona CLI — the main entry point.
//!
//! Commands:
//! - `onboard` — Run the onboarding questionnaire and save the persona
//! - `chat`    — Interactive chat or single-message mode
//! - `event`   — Log or list life events
//! - `gateway` — Start the HTTP API server
//! - `reset`   — Delete the persona and all memory
//! - `doctor`  — Diagnose configuration and connectivity

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "edgepersona",
    about = "EdgePersona — your digital mirror, onboarded once, chatted with forever",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the user id from config
    #[arg(short, long, global = true)]
    user: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the onboarding questionnaire and save the persona
    Onboard,

    /// Chat with your digital persona
    Chat {
        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Log a life event, or list the logged ones
    Event {
        /// What happened
        #[arg(short, long)]
        content: Option<String>,

        /// Mood label, e.g. "proud"
        #[arg(short, long, default_value = "neutral")]
        mood: String,

        /// Significance from 1 to 5
        #[arg(short, long, default_value_t = 3)]
        weight: u8,

        /// Date label; defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// List logged events instead of adding one
        #[arg(short, long)]
        list: bool,
    },

    /// Start the HTTP gateway server
    Gateway {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Delete the persona profile, history, and events
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Diagnose configuration and connectivity
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Onboard => commands::onboard::run(cli.user).await?,
        Commands::Chat { message } => commands::chat::run(cli.user, message).await?,
        Commands::Event {
            content,
            mood,
            weight,
            date,
            list,
        } => commands::event::run(cli.user, content, mood, weight, date, list).await?,
        Commands::Gateway { port } => commands::gateway::run(port).await?,
        Commands::Reset { yes } => commands::reset::run(cli.user, yes).await?,
        Commands::Doctor => commands::doctor::run().await?,
    }

    Ok(())
}
