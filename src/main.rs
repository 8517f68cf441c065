//! Main entry point for headdiff CLI

use anyhow::Context;
use clap::Parser;
use headdiff::cli::{Cli, USAGE_HINT};
use headdiff::commands::execute_command;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", USAGE_HINT);
            eprint!("{}", e);
            std::process::exit(2);
        }
    };

    // Initialize logging from RUST_LOG, info by default
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    execute_command(&cli).with_context(|| {
        format!(
            "Failed to compare {} with {}",
            cli.first.display(),
            cli.second.display()
        )
    })
}
