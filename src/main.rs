//! vkbundle - Vulkan Validation Layer Bundler
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vkbundle::abi::Mode;
use vkbundle::cli::{commands, Cli, Commands};
use vkbundle::error::BundleResult;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> BundleResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("vkbundle=warn"),
        1 => EnvFilter::new("vkbundle=info"),
        _ => EnvFilter::new("vkbundle=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        Commands::Install(args) => commands::bundle(args, Mode::Install, cli.config.as_deref()),
        Commands::Remove(args) => commands::bundle(args, Mode::Remove, cli.config.as_deref()),
        Commands::Cache(args) => commands::cache(args),
    }
}
