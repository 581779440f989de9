mod cli;
mod columns_cmd;
mod debug_cmd;
mod page_range;
mod shared;

use clap::Parser;
use cli::{Cli, Commands};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Columns {
            ref file,
            ref pages,
            format,
            ref detection,
        } => columns_cmd::run(file, pages.as_deref(), format, &detection.options()),
        Commands::Debug {
            ref file,
            ref pages,
            ref output,
            scale,
            obstacles,
            ref detection,
        } => debug_cmd::run(
            file,
            pages.as_deref(),
            output,
            scale,
            obstacles,
            &detection.options(),
        ),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v` when it is set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
