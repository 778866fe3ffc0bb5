//! Binary entry point: parse the command line, start file logging, load the
//! anthology and drive the Ratatui event loop until the user exits.
use clap::Parser;
use love_lyrics_atlas::{init_logging, load_catalog, run_app, App, Args, Config};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::from_args(Args::parse())?;
    let _log_guard = init_logging(&config.log_dir())?;
    info!(version = env!("CARGO_PKG_VERSION"), "love lyrics atlas starting");

    let catalog = load_catalog(&config)?;
    let mut app = App::new(catalog);
    let result = run_app(&mut app);

    info!("love lyrics atlas exiting");
    result
}
