//! glee CLI - exclude files from git tracking without adding them to .gitignore

use clap::Parser;
use glee::cli::{Cli, Commands};
use glee::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so `list` output stays clean
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> glee::Result<()> {
    let cwd = cli.cwd.as_deref();
    match cli.command {
        Commands::Add { entries } => glee::cli::commands::add::run(cwd, &entries).await,
        Commands::Remove { entries } => glee::cli::commands::remove::run(cwd, &entries).await,
        Commands::List { json } => glee::cli::commands::list::run(cwd, json).await,
        Commands::Clear => glee::cli::commands::clear::run(cwd).await,
        Commands::Edit => glee::cli::commands::edit::run(cwd).await,
        Commands::Version => glee::cli::commands::version::run().await,
    }
}
