mod cli;
mod collectors;
mod config;
mod display;
mod error;
mod export;
mod filter;
mod github;
mod identity;
mod models;
mod renderer;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gitdigest")]
#[command(version, about = "Export GitHub commit history as LLM-ready Markdown", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// List a user's repositories
    Repos {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// GitHub username
        #[arg(short, long, env = "GITDIGEST_USER")]
        user: Option<String>,
    },
    /// Show the user the access token belongs to
    Whoami {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Fetch commits and generate an export
    Gen(cli::gen::GenArgs),
    /// Show commands
    Show {
        #[command(subcommand)]
        command: ShowCommands,
    },
}

#[derive(Subcommand)]
enum ShowCommands {
    /// Display the most recent export
    Latest {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize gitdigest.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gitdigest={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Commands::Repos { config, user } => cli::repos::run(config, user),
        Commands::Whoami { config } => cli::whoami::run(config),
        Commands::Gen(args) => cli::gen::run(args),
        Commands::Show { command } => match command {
            ShowCommands::Latest { config } => cli::show::latest(config),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
