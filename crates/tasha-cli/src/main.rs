//! CLI frontend for the tasha character builder.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tasha",
    about = "tasha - build a 5.5e character one choice at a time",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new character and save it as <name>.toml
    New {
        /// Name of the character to create
        name: String,

        /// Directory to write the character file to
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing character file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the version
    Version,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New { name, dir, force } => commands::new::run(&name, &dir, force),
        Commands::Version => commands::version::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Diagnostics go to stderr so they never mix with the menus on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
