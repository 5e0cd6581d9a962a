use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "finishline-cli", version, about = "FinishLine scroll-zone CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scene and print its zone options
    Check(commands::check::CheckArgs),
    /// Evaluate a scene once
    Run(commands::run::RunArgs),
    /// Scroll through a range and print every state change
    Sweep(commands::sweep::SweepArgs),
    /// Print a state snapshot at the scene's scroll offset
    Snapshot(commands::snapshot::SnapshotArgs),
    /// Write an example scene file
    Init(commands::init::InitArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Check(args) => commands::check::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Sweep(args) => commands::sweep::run(args),
        Commands::Snapshot(args) => commands::snapshot::run(args),
        Commands::Init(args) => commands::init::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
