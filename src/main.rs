//! avkg command line entry point

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

use avkg::cli::{Cli, Commands};
use avkg::commands;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "avkg=debug" } else { "avkg=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let result = match cli.command {
        Commands::Search(args) => commands::search::run(&cli.global, args),
        Commands::Objects(args) => commands::objects::run(&cli.global, &args),
        Commands::Food(args) => commands::food::run(&cli.global, &args),
        Commands::Diagnose(args) => commands::diagnose::run(&cli.global, args),
        Commands::Stats => commands::stats::run(&cli.global),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
