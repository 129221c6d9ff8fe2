//! Diagnostic logging on stderr.
//!
//! Progress lines go to stdout with `println!`; this subscriber only carries
//! `tracing` events. `RUST_LOG` overrides the level chosen by `--verbose`.

use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn build_subscriber<W>(verbose: bool, writer: W, ansi: bool) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .finish()
}

/// Install the global subscriber. Colors are used only when stderr is a terminal.
pub fn init(verbose: bool) {
    let subscriber = build_subscriber(verbose, io::stderr, io::stderr().is_terminal());
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to initialize logging: {}", e);
    }
}
