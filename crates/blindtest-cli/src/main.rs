mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blindtest", about = "Blind photo comparison survey tools")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print or save a default survey config
    Config(commands::config::ConfigArgs),
    /// Show image sizes and pan limits for each container preset
    Info(commands::info::InfoArgs),
    /// Replay a scripted interaction and print the transforms
    Replay(commands::replay::ReplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Config(args) => commands::config::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Replay(args) => commands::replay::run(args),
    }
}
