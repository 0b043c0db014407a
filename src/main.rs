//! logicmedic CLI entry point.

use clap::Parser;
use logicmedic::cli::{self, Cli, Commands, EXIT_ERROR};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging unavailable: {}", e);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());
    logicmedic::init();

    let result = match &cli.command {
        Commands::Analyze(args) => cli::run_analyze(args),
        Commands::Languages => cli::run_languages(),
        Commands::Prompt(args) => cli::run_prompt(args),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
