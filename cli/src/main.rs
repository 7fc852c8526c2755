mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{assign, color, filter, sample, summary};

/// Route `tracing` output to stderr; `-v` raises the level, `RUST_LOG` overrides it.
fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Filter(args) => filter::run(&cli, args),
        Commands::Assign(args) => assign::run(&cli, args),
        Commands::Sample(args) => sample::run(&cli, args),
        Commands::Summary(args) => summary::run(&cli, args),
        Commands::Color(args) => color::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
