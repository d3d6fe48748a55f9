// parkscout entry point.
// Loads config, resolves the state directory, then hands the terminal to the TUI.

mod app;
mod cache;
mod config;
mod error;
mod logging;
mod net;
mod nps;
mod places;
mod session;
mod state;
mod ui;

use crate::app::App;
use crate::config::Config;
use crate::error::Result;
use crate::session::Session;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let paths = config.cache_paths();
    logging::init(&config.log_filter, paths.as_ref().map(|p| p.log.as_path()))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting parkscout");

    let session = Session::open(&config)?;
    // A missing state menu is fatal.
    let directory = session.resolve_states().await?;

    let mut terminal = ratatui::init();
    let mut app = App::new(session, directory);
    let result = app.run(&mut terminal).await;
    ratatui::restore();

    app.session().save_caches();
    tracing::info!("exiting");
    result
}
