//! `hello_flags` entry point: parse the command line and print the request.

use std::io::{self, Write};

use hello_flags::Options;
use ortho_flags::ErrorHandling;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let options = Options::default();
    let mut flags = options.flag_set(ErrorHandling::ExitOnError);
    flags.parse(std::env::args().skip(1))?;
    debug!(urls = ?flags.args(), "parsed command line");

    let mut stdout = io::stdout().lock();
    stdout.write_all(options.describe(flags.args()).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Logs to stderr, filtered by `RUST_LOG` and quiet by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
